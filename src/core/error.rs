// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Simulator error types
//!
//! The CPU core itself never returns a `Result`: an unrecognized
//! instruction is reported by halting with a diagnostic message, not by
//! propagating an error (see [`crate::core::cpu`]). This module covers
//! everything around the core that can genuinely fail: loading a program
//! image, and saving or restoring a checkpoint.

use thiserror::Error;

/// Result type for simulator operations.
pub type Result<T> = std::result::Result<T, EmulatorError>;

/// Simulator error types.
#[derive(Debug, Error)]
pub enum EmulatorError {
    /// A line of a hex program image could not be parsed.
    #[error("malformed image line {line}: {text}")]
    MalformedImage {
        /// 1-based line number within the image file.
        line: usize,
        /// The offending line's text.
        text: String,
    },

    /// A program image contained no instructions.
    #[error("program image has no instructions")]
    EmptyImage,

    /// A save state was produced by an incompatible version of this crate.
    #[error("save state version mismatch: expected {expected}, found {found}")]
    SaveStateVersion {
        /// The version this build knows how to load.
        expected: u32,
        /// The version found in the file.
        found: u32,
    },

    /// Save state (de)serialization failed.
    #[error("save state encoding error: {message}")]
    SaveStateEncoding {
        /// Underlying encoder/decoder message.
        message: String,
    },

    /// Configuration file could not be parsed.
    #[error("configuration error: {message}")]
    Config {
        /// Underlying parser message.
        message: String,
    },

    /// I/O error (file operations).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
