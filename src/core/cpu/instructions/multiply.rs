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

use super::super::decode::Instruction;
use super::super::State;

/// MULT: {HI,LO} = sext64(rs) * sext64(rt), the 64-bit signed product.
pub(super) fn op_mult(current: &State, next: &mut State, instr: &Instruction) {
    let a = current.regs[instr.rs as usize] as i32 as i64;
    let b = current.regs[instr.rt as usize] as i32 as i64;
    let product = (a * b) as u64;
    next.lo = product as u32;
    next.hi = (product >> 32) as u32;
}

/// MULTU: {HI,LO} = zext64(rs) * zext64(rt), the 64-bit unsigned product.
pub(super) fn op_multu(current: &State, next: &mut State, instr: &Instruction) {
    let a = current.regs[instr.rs as usize] as u64;
    let b = current.regs[instr.rt as usize] as u64;
    let product = a * b;
    next.lo = product as u32;
    next.hi = (product >> 32) as u32;
}

/// DIV: LO = rs / rt (signed quotient), HI = rs % rt (signed remainder).
///
/// Division by zero does not trap: this implementation's deterministic
/// policy is `LO = 0xFFFFFFFF`, `HI = rs`. `wrapping_div`/`wrapping_rem`
/// additionally avoid a host panic on the one signed overflow case
/// (`i32::MIN / -1`), yielding `LO = i32::MIN`, `HI = 0` there.
pub(super) fn op_div(current: &State, next: &mut State, instr: &Instruction) {
    let rs = current.regs[instr.rs as usize] as i32;
    let rt = current.regs[instr.rt as usize] as i32;
    if rt == 0 {
        next.lo = 0xFFFF_FFFF;
        next.hi = rs as u32;
    } else {
        next.lo = rs.wrapping_div(rt) as u32;
        next.hi = rs.wrapping_rem(rt) as u32;
    }
}

/// DIVU: LO = rs / rt (unsigned quotient), HI = rs % rt (unsigned remainder).
///
/// Same division-by-zero policy as `div`: `LO = 0xFFFFFFFF`, `HI = rs`.
pub(super) fn op_divu(current: &State, next: &mut State, instr: &Instruction) {
    let rs = current.regs[instr.rs as usize];
    let rt = current.regs[instr.rt as usize];
    if rt == 0 {
        next.lo = 0xFFFF_FFFF;
        next.hi = rs;
    } else {
        next.lo = rs / rt;
        next.hi = rs % rt;
    }
}
