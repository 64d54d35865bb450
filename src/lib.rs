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

//! MIPS-I functional CPU simulator core
//!
//! This library provides the core simulation components for a MIPS-I
//! instruction set simulator: a decoder, an instruction executor operating
//! over a double-buffered architectural state, a flat memory bus, and the
//! ambient plumbing (loader, save states, configuration) needed to drive it.
//!
//! # Example
//!
//! ```
//! use mipsim::core::cpu::{step, State};
//! use mipsim::core::memory::Bus;
//!
//! let mut bus = Bus::new();
//! let current = State::new();
//! let mut next = current;
//! let mut run = true;
//!
//! step(&current, &mut next, &mut bus, &mut run);
//! ```

pub mod core;
