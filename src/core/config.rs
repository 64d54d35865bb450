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

//! Shell configuration
//!
//! A small `toml`-backed config for the interactive shell's defaults.
//! None of this affects core instruction semantics; it only controls
//! how the driver binary starts up.

use crate::core::error::{EmulatorError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Shell startup defaults, loadable from an optional `mipsim.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Print a disassembled trace line before executing each instruction.
    #[serde(default)]
    pub trace: bool,
    /// Override the default entry PC (`Bus::TEXT_START`) when set.
    #[serde(default)]
    pub entry_pc: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trace: false,
            entry_pc: None,
        }
    }
}

impl Config {
    /// Load a config from a TOML file, falling back to defaults for any
    /// field the file omits.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| EmulatorError::Config {
            message: e.to_string(),
        })
    }

    /// Load `mipsim.toml` from the current directory if present,
    /// otherwise fall back to defaults. Never errors on a missing file.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.trace);
        assert_eq!(config.entry_pc, None);
    }

    #[test]
    fn test_load_parses_partial_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mipsim.toml");
        std::fs::write(&path, "trace = true\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert!(config.trace);
        assert_eq!(config.entry_pc, None);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = Config::load_or_default("does-not-exist.toml").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_malformed_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mipsim.toml");
        std::fs::write(&path, "not valid toml {{{").unwrap();

        assert!(Config::load(&path).is_err());
    }
}
