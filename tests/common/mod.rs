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

//! Shared fixtures for integration tests.

use mipsim::core::loader::ProgramImage;
use mipsim::core::system::System;

/// Small hand-assembled programs, word-encoded, for end-to-end tests.
#[allow(dead_code)]
pub mod programs {
    /// `addiu $1, $0, 1; addiu $2, $0, 1; beq $1, $2, 1; addiu $3, $0, 0x42; addiu $4, $0, 0x99`
    ///
    /// The branch is taken, so $3 is never written and $4 is.
    pub fn branch_taken() -> Vec<u32> {
        vec![
            0x2401_0001, // addiu $1, $0, 1
            0x2402_0001, // addiu $2, $0, 1
            0x1022_0001, // beq $1, $2, 1
            0x2403_0042, // addiu $3, $0, 0x42 (skipped)
            0x2404_0099, // addiu $4, $0, 0x99 (branch target)
        ]
    }

    /// `lui $1, 0x1000; addiu $2, $0, 0xAA; sw $2, 0($1); lw $3, 0($1)`
    pub fn load_store_round_trip() -> Vec<u32> {
        vec![
            0x3C01_1000, // lui $1, 0x1000
            0x2402_00AA, // addiu $2, $0, 0xAA
            0xAC22_0000, // sw $2, 0($1)
            0x8C23_0000, // lw $3, 0($1)
        ]
    }

    /// `addi $2, $0, 10; syscall` -- halts via the exit convention.
    pub fn halt_via_syscall() -> Vec<u32> {
        vec![0x2002_000A, 0x0000_000C]
    }
}

/// Turn a sequence of words into a hex image parseable by `ProgramImage`,
/// implicitly placed starting at `Bus::TEXT_START`.
#[allow(dead_code)]
pub fn image_text(words: &[u32]) -> String {
    let mut text = String::new();
    for word in words {
        text.push_str(&format!("0x{word:08X}\n"));
    }
    text
}

/// Build a `System` with `words` installed at the default text base and
/// armed to run.
#[allow(dead_code)]
pub fn system_with_program(words: &[u32]) -> System {
    let image = ProgramImage::parse(&image_text(words)).unwrap();
    let mut system = System::new();
    system.load_image(&image);
    system
}
