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

//! The driver: owns the current/next double buffer, the memory bus, and
//! the run flag, and performs the swap the core's contract requires.
//!
//! This is the "external collaborator" layer the core itself knows
//! nothing about (§6): `core::cpu::step` only ever sees two `State`
//! values and a `&mut bool`. `System` is what turns that into something
//! callable in a loop.

use super::cpu::{self, State};
use super::error::Result;
use super::loader::ProgramImage;
use super::memory::Bus;
use log::{info, warn};

/// Owns the architectural state, the memory bus, and the run flag across
/// steps.
pub struct System {
    current: State,
    next: State,
    bus: Bus,
    run: bool,
    /// Count of instructions executed since the last reset.
    instructions_executed: u64,
}

impl System {
    /// Create a new system with a freshly reset bus and the default
    /// entry PC, not yet running.
    pub fn new() -> Self {
        Self {
            current: State::new(),
            next: State::new(),
            bus: Bus::new(),
            run: false,
            instructions_executed: 0,
        }
    }

    /// Reset architectural state and memory, as if power-cycled.
    pub fn reset(&mut self) {
        self.bus.reset();
        self.current = State::new();
        self.next = self.current;
        self.run = false;
        self.instructions_executed = 0;
    }

    /// Install a parsed program image into the bus and arm the run flag
    /// at its entry PC (or the default text-segment base if the image
    /// didn't specify one).
    pub fn load_image(&mut self, image: &ProgramImage) {
        image.install(&mut self.bus);
        self.current.pc = image.entry_pc.unwrap_or(cpu::DEFAULT_ENTRY_PC);
        self.next = self.current;
        self.run = true;
        self.instructions_executed = 0;
        info!("loaded program image, entry PC = {:#010X}", self.current.pc);
    }

    /// Execute exactly one instruction. A no-op once the run flag is
    /// clear (halted programs stay halted until reset or reloaded).
    pub fn step(&mut self) {
        if !self.run {
            return;
        }

        self.next = self.current;
        cpu::step(&self.current, &mut self.next, &mut self.bus, &mut self.run);
        self.current = self.next;
        self.instructions_executed += 1;
    }

    /// Execute up to `n` instructions, stopping early if the run flag
    /// clears.
    pub fn run_n(&mut self, n: usize) {
        for _ in 0..n {
            if !self.run {
                break;
            }
            self.step();
        }
    }

    /// Execute until the run flag clears. Unbounded: per the
    /// Non-goals, imposing an instruction limit is the caller's job, not
    /// the driver's.
    pub fn run(&mut self) {
        while self.run {
            self.step();
        }
        warn!(
            "halted after {} instruction(s) at PC {:#010X}",
            self.instructions_executed, self.current.pc
        );
    }

    /// Whether the program is still running.
    pub fn is_running(&self) -> bool {
        self.run
    }

    /// Current architectural state.
    pub fn state(&self) -> &State {
        &self.current
    }

    /// Mutable access to the architectural state, for the shell's
    /// `input reg val` command and for save-state restoration.
    pub fn state_mut(&mut self) -> &mut State {
        &mut self.current
    }

    /// Replace the architectural state wholesale (save-state restore).
    pub fn set_state(&mut self, state: State) {
        self.current = state;
        self.next = state;
    }

    /// The memory bus, for `mdump`.
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Mutable access to the memory bus, for test setup and the loader.
    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    /// Total instructions executed since the last reset or load.
    pub fn instructions_executed(&self) -> u64 {
        self.instructions_executed
    }
}

impl Default for System {
    fn default() -> Self {
        Self::new()
    }
}

/// Load a hex image from disk and install it into a fresh `System`.
pub fn load_system(path: impl AsRef<std::path::Path>) -> Result<System> {
    let image = ProgramImage::load(path)?;
    let mut system = System::new();
    system.load_image(&image);
    Ok(system)
}
