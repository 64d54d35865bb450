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

//! Hex program image loader
//!
//! Parses a line-oriented text format, in the tradition of teaching MIPS
//! simulators: each non-blank, non-comment line is either an explicit
//! `ADDR: WORD` pair or a bare `WORD`, implicitly placed at the next
//! sequential word address. A leading `#` marks a comment line. `0x`
//! prefixes are optional on both `ADDR` and `WORD`. A `PC: WORD` line sets
//! the entry point instead of placing an instruction.
//!
//! ```text
//! # fibonacci(6)
//! PC: 0x00400000
//! 0x00400000: 0x20080006   # addi $8, $0, 6
//! 0x20A90001               # addi $9, $5, 1 (implicit next address)
//! ```

use super::error::{EmulatorError, Result};
use super::memory::Bus;

/// A parsed program image: `(address, word)` pairs to write into the bus,
/// plus an optional explicit entry PC.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProgramImage {
    /// Instruction words in file order, each paired with its target address.
    pub words: Vec<(u32, u32)>,
    /// Entry PC override from a `PC: WORD` directive, if present.
    pub entry_pc: Option<u32>,
}

fn parse_hex(token: &str) -> Option<u32> {
    let token = token.trim();
    let digits = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")).unwrap_or(token);
    u32::from_str_radix(digits, 16).ok()
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

impl ProgramImage {
    /// Parse a hex image from its full text.
    pub fn parse(text: &str) -> Result<Self> {
        let mut image = ProgramImage::default();
        let mut next_addr = Bus::TEXT_START;

        for (idx, raw_line) in text.lines().enumerate() {
            let line = strip_comment(raw_line).trim();
            if line.is_empty() {
                continue;
            }

            let malformed = || EmulatorError::MalformedImage {
                line: idx + 1,
                text: raw_line.to_string(),
            };

            if let Some((key, value)) = line.split_once(':') {
                let key = key.trim();
                if key.eq_ignore_ascii_case("pc") {
                    image.entry_pc = Some(parse_hex(value).ok_or_else(malformed)?);
                    continue;
                }
                let addr = parse_hex(key).ok_or_else(malformed)?;
                let word = parse_hex(value).ok_or_else(malformed)?;
                image.words.push((addr, word));
                next_addr = addr.wrapping_add(4);
            } else {
                let word = parse_hex(line).ok_or_else(malformed)?;
                image.words.push((next_addr, word));
                next_addr = next_addr.wrapping_add(4);
            }
        }

        if image.words.is_empty() {
            return Err(EmulatorError::EmptyImage);
        }

        Ok(image)
    }

    /// Read and parse a hex image file.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Write every parsed word into the bus at its target address.
    pub fn install(&self, bus: &mut Bus) {
        for &(addr, word) in &self.words {
            bus.write_word(addr, word);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cpu::Memory;

    #[test]
    fn test_parse_explicit_addresses() {
        let image = ProgramImage::parse(
            "0x00400000: 0x2008000A\n0x00400004: 0x00000000\n",
        )
        .unwrap();
        assert_eq!(
            image.words,
            vec![(0x0040_0000, 0x2008_000A), (0x0040_0004, 0x0000_0000)]
        );
        assert_eq!(image.entry_pc, None);
    }

    #[test]
    fn test_parse_implicit_sequential_addresses() {
        let image = ProgramImage::parse("0x2008000A\n0x00000000\n").unwrap();
        assert_eq!(
            image.words,
            vec![
                (Bus::TEXT_START, 0x2008_000A),
                (Bus::TEXT_START + 4, 0x0000_0000)
            ]
        );
    }

    #[test]
    fn test_parse_entry_pc_directive() {
        let image = ProgramImage::parse("PC: 0x00400010\n0x00000000\n").unwrap();
        assert_eq!(image.entry_pc, Some(0x0040_0010));
    }

    #[test]
    fn test_parse_ignores_comments_and_blank_lines() {
        let image = ProgramImage::parse("# a comment\n\n0x00000000 # nop\n").unwrap();
        assert_eq!(image.words, vec![(Bus::TEXT_START, 0)]);
    }

    #[test]
    fn test_parse_malformed_line_is_an_error() {
        let err = ProgramImage::parse("not hex at all\n").unwrap_err();
        assert!(matches!(err, EmulatorError::MalformedImage { line: 1, .. }));
    }

    #[test]
    fn test_parse_empty_image_is_an_error() {
        let err = ProgramImage::parse("# only a comment\n").unwrap_err();
        assert!(matches!(err, EmulatorError::EmptyImage));
    }

    #[test]
    fn test_install_writes_into_bus() {
        let image = ProgramImage::parse("0x00400000: 0xDEADBEEF\n").unwrap();
        let mut bus = Bus::new();
        image.install(&mut bus);
        assert_eq!(bus.read_word(0x0040_0000), 0xDEAD_BEEF);
    }
}
