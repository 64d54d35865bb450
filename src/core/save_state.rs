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

//! Save states: versioned, bincode-encoded snapshots of the architectural
//! `State`.
//!
//! The core's entire observable state is the 32 registers, HI/LO, and PC
//! (§3): there is no hardware side-state in this simulator, so a save
//! state is exactly one `State` value plus a version tag and a timestamp
//! for the shell to display.

use super::cpu::State;
use super::error::{EmulatorError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current on-disk save state format version.
pub const SAVE_STATE_VERSION: u32 = 1;

/// A versioned snapshot of the architectural state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveState {
    /// Format version; loading mismatches this is an error, not a panic.
    pub version: u32,
    /// When this snapshot was taken.
    pub saved_at: DateTime<Utc>,
    /// The architectural state itself.
    pub state: State,
}

impl SaveState {
    /// Snapshot `state` with the current format version and timestamp.
    pub fn new(state: State) -> Self {
        Self {
            version: SAVE_STATE_VERSION,
            saved_at: Utc::now(),
            state,
        }
    }

    /// Encode to a bincode blob.
    pub fn encode(&self) -> Result<Vec<u8>> {
        bincode::serde::encode_to_vec(self, bincode::config::standard()).map_err(|e| {
            EmulatorError::SaveStateEncoding {
                message: e.to_string(),
            }
        })
    }

    /// Decode from a bincode blob, rejecting a version mismatch.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let (save_state, _): (Self, usize) =
            bincode::serde::decode_from_slice(bytes, bincode::config::standard()).map_err(|e| {
                EmulatorError::SaveStateEncoding {
                    message: e.to_string(),
                }
            })?;

        if save_state.version != SAVE_STATE_VERSION {
            return Err(EmulatorError::SaveStateVersion {
                expected: SAVE_STATE_VERSION,
                found: save_state.version,
            });
        }

        Ok(save_state)
    }

    /// Encode and write to a file.
    pub fn save_to_file(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.encode()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Read a file and decode it.
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::decode(&bytes)
    }
}
