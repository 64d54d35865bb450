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

use super::super::decode::{sign_extend16, Instruction};
use super::super::State;

// === Arithmetic Instructions ===

/// ADD: does not trap on signed overflow in this implementation; behaves
/// identically to ADDU. Format: add rd, rs, rt.
pub(super) fn op_add(current: &State, next: &mut State, instr: &Instruction) {
    let result = current.regs[instr.rs as usize].wrapping_add(current.regs[instr.rt as usize]);
    next.regs[instr.rd as usize] = result;
}

/// ADDU: rd = rs + rt, modulo 2^32.
pub(super) fn op_addu(current: &State, next: &mut State, instr: &Instruction) {
    op_add(current, next, instr);
}

/// ADDI: does not trap on signed overflow in this implementation; behaves
/// identically to ADDIU. Format: addi rt, rs, imm.
pub(super) fn op_addi(current: &State, next: &mut State, instr: &Instruction) {
    let imm = sign_extend16(instr.imm);
    next.regs[instr.rt as usize] = current.regs[instr.rs as usize].wrapping_add(imm);
}

/// ADDIU: rt = rs + sign_extend(imm), modulo 2^32.
pub(super) fn op_addiu(current: &State, next: &mut State, instr: &Instruction) {
    op_addi(current, next, instr);
}

/// SUB: does not trap on signed overflow in this implementation; behaves
/// identically to SUBU. Format: sub rd, rs, rt.
pub(super) fn op_sub(current: &State, next: &mut State, instr: &Instruction) {
    let result = current.regs[instr.rs as usize].wrapping_sub(current.regs[instr.rt as usize]);
    next.regs[instr.rd as usize] = result;
}

/// SUBU: rd = rs - rt, modulo 2^32.
pub(super) fn op_subu(current: &State, next: &mut State, instr: &Instruction) {
    op_sub(current, next, instr);
}

/// SLT: signed less-than comparison.
pub(super) fn op_slt(current: &State, next: &mut State, instr: &Instruction) {
    let a = current.regs[instr.rs as usize] as i32;
    let b = current.regs[instr.rt as usize] as i32;
    next.regs[instr.rd as usize] = (a < b) as u32;
}

/// SLTU: unsigned less-than comparison.
pub(super) fn op_sltu(current: &State, next: &mut State, instr: &Instruction) {
    let a = current.regs[instr.rs as usize];
    let b = current.regs[instr.rt as usize];
    next.regs[instr.rd as usize] = (a < b) as u32;
}

/// SLTI: signed less-than comparison against a sign-extended immediate.
pub(super) fn op_slti(current: &State, next: &mut State, instr: &Instruction) {
    let a = current.regs[instr.rs as usize] as i32;
    let imm = sign_extend16(instr.imm) as i32;
    next.regs[instr.rt as usize] = (a < imm) as u32;
}

/// SLTIU: unsigned less-than comparison; the immediate is still
/// sign-extended before the unsigned comparison.
pub(super) fn op_sltiu(current: &State, next: &mut State, instr: &Instruction) {
    let a = current.regs[instr.rs as usize];
    let imm = sign_extend16(instr.imm);
    next.regs[instr.rt as usize] = (a < imm) as u32;
}

/// MFHI: rd = HI.
pub(super) fn op_mfhi(current: &State, next: &mut State, instr: &Instruction) {
    next.regs[instr.rd as usize] = current.hi;
}

/// MTHI: HI = rs.
pub(super) fn op_mthi(current: &State, next: &mut State, instr: &Instruction) {
    next.hi = current.regs[instr.rs as usize];
}

/// MFLO: rd = LO.
pub(super) fn op_mflo(current: &State, next: &mut State, instr: &Instruction) {
    next.regs[instr.rd as usize] = current.lo;
}

/// MTLO: LO = rs.
pub(super) fn op_mtlo(current: &State, next: &mut State, instr: &Instruction) {
    next.lo = current.regs[instr.rs as usize];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cpu::decode::decode;

    fn st() -> State {
        State::new()
    }

    #[test]
    fn test_add() {
        let mut current = st();
        current.regs[8] = 5;
        current.regs[9] = 7;
        let mut next = current;
        op_add(&current, &mut next, &decode(0x0109_5020));
        assert_eq!(next.regs[10], 12);
    }

    #[test]
    fn test_add_wraps_instead_of_trapping() {
        let mut current = st();
        current.regs[8] = 0x7FFF_FFFF;
        current.regs[9] = 1;
        let mut next = current;
        op_add(&current, &mut next, &decode(0x0109_5020));
        assert_eq!(next.regs[10], 0x8000_0000);
    }

    #[test]
    fn test_addi_sign_extends() {
        let current = st();
        let mut next = current;
        // addi $2, $1, 0xFFFF
        op_addi(&current, &mut next, &decode(0x2022_FFFF));
        assert_eq!(next.regs[2], 0xFFFF_FFFF);
    }

    #[test]
    fn test_sub() {
        let mut current = st();
        current.regs[8] = 10;
        current.regs[9] = 3;
        let mut next = current;
        // sub $10, $8, $9
        op_sub(&current, &mut next, &decode(0x0109_5022));
        assert_eq!(next.regs[10], 7);
    }

    #[test]
    fn test_slt_signed() {
        let mut current = st();
        current.regs[8] = (-1i32) as u32;
        current.regs[9] = 1;
        let mut next = current;
        // slt $10, $8, $9
        op_slt(&current, &mut next, &decode(0x0109_502A));
        assert_eq!(next.regs[10], 1);
    }

    #[test]
    fn test_sltu_treats_operands_as_unsigned() {
        let mut current = st();
        current.regs[8] = (-1i32) as u32;
        current.regs[9] = 1;
        let mut next = current;
        // sltu $10, $8, $9
        op_sltu(&current, &mut next, &decode(0x0109_502B));
        assert_eq!(next.regs[10], 0);
    }

    #[test]
    fn test_mfhi_mflo() {
        let mut current = st();
        current.hi = 0xAAAA_AAAA;
        current.lo = 0x5555_5555;
        let mut next = current;
        // mfhi $1
        op_mfhi(&current, &mut next, &decode(0x0000_0810));
        assert_eq!(next.regs[1], 0xAAAA_AAAA);

        let current = next;
        let mut next = current;
        // mflo $2
        op_mflo(&current, &mut next, &decode(0x0000_1012));
        assert_eq!(next.regs[2], 0x5555_5555);
    }
}
