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

/// Branch target: PC + 4 + (sign_extend(imm) << 2), computed against
/// `current.pc` since branches have no delay slot in this core.
fn target(current: &State, instr: &Instruction) -> u32 {
    let offset = sign_extend16(instr.imm) << 2;
    current.pc.wrapping_add(4).wrapping_add(offset)
}

/// BEQ: branch if rs == rt.
pub(super) fn op_beq(current: &State, next: &mut State, instr: &Instruction) {
    if current.regs[instr.rs as usize] == current.regs[instr.rt as usize] {
        next.pc = target(current, instr);
    }
}

/// BNE: branch if rs != rt.
pub(super) fn op_bne(current: &State, next: &mut State, instr: &Instruction) {
    if current.regs[instr.rs as usize] != current.regs[instr.rt as usize] {
        next.pc = target(current, instr);
    }
}

/// BLEZ: branch if rs <= 0 (signed).
pub(super) fn op_blez(current: &State, next: &mut State, instr: &Instruction) {
    if (current.regs[instr.rs as usize] as i32) <= 0 {
        next.pc = target(current, instr);
    }
}

/// BGTZ: branch if rs > 0 (signed).
pub(super) fn op_bgtz(current: &State, next: &mut State, instr: &Instruction) {
    if (current.regs[instr.rs as usize] as i32) > 0 {
        next.pc = target(current, instr);
    }
}

/// BLTZ: branch if rs < 0 (signed). REGIMM, rt == 0x00.
pub(super) fn op_bltz(current: &State, next: &mut State, instr: &Instruction) {
    if (current.regs[instr.rs as usize] as i32) < 0 {
        next.pc = target(current, instr);
    }
}

/// BGEZ: branch if rs >= 0 (signed). REGIMM, rt == 0x01.
pub(super) fn op_bgez(current: &State, next: &mut State, instr: &Instruction) {
    if (current.regs[instr.rs as usize] as i32) >= 0 {
        next.pc = target(current, instr);
    }
}

/// BLTZAL: like BLTZ, linking $ra only when the branch is taken (the
/// table in §4.2 REGIMM lists the link write under "on taken" only;
/// unlike real MIPS hardware, this core does not link unconditionally).
/// REGIMM, rt == 0x10.
pub(super) fn op_bltzal(current: &State, next: &mut State, instr: &Instruction) {
    if (current.regs[instr.rs as usize] as i32) < 0 {
        next.regs[31] = current.pc.wrapping_add(4);
        next.pc = target(current, instr);
    }
}

/// BGEZAL: like BGEZ, linking $ra only when the branch is taken. REGIMM,
/// rt == 0x11.
pub(super) fn op_bgezal(current: &State, next: &mut State, instr: &Instruction) {
    if (current.regs[instr.rs as usize] as i32) >= 0 {
        next.regs[31] = current.pc.wrapping_add(4);
        next.pc = target(current, instr);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cpu::decode::decode;

    #[test]
    fn test_beq_taken_backward() {
        let mut current = State::new();
        current.pc = 0x100;
        // regs[1] == regs[2] == 0
        let mut next = current;
        // beq $1, $2, -1
        op_beq(&current, &mut next, &decode(0x1022_FFFF));
        assert_eq!(next.pc, 0x100);
    }

    #[test]
    fn test_bne_not_taken_leaves_pc_default() {
        let mut current = State::new();
        current.pc = 0x100;
        let mut next = current;
        next.pc = current.pc.wrapping_add(4);
        // bne $1, $2, -1 (rs == rt, so not taken)
        op_bne(&current, &mut next, &decode(0x1422_FFFF));
        assert_eq!(next.pc, 0x104);
    }

    #[test]
    fn test_bltzal_does_not_link_when_not_taken() {
        let mut current = State::new();
        current.pc = 0x100;
        current.regs[8] = 5; // not negative, branch not taken
        current.regs[31] = 0xDEAD_BEEF;
        let mut next = current;
        next.pc = current.pc.wrapping_add(4);
        // bltzal $8, 0
        op_bltzal(&current, &mut next, &decode(0x0510_0000));
        assert_eq!(next.regs[31], 0xDEAD_BEEF);
        assert_eq!(next.pc, 0x104);
    }

    #[test]
    fn test_bltzal_links_when_taken() {
        let mut current = State::new();
        current.pc = 0x100;
        current.regs[8] = (-1i32) as u32; // negative, branch taken
        let mut next = current;
        next.pc = current.pc.wrapping_add(4);
        // bltzal $8, 0
        op_bltzal(&current, &mut next, &decode(0x0510_0000));
        assert_eq!(next.regs[31], 0x104);
        assert_eq!(next.pc, 0x104);
    }

    #[test]
    fn test_bgez_taken() {
        let mut current = State::new();
        current.pc = 0x100;
        current.regs[8] = 0;
        let mut next = current;
        // bgez $8, 4
        op_bgez(&current, &mut next, &decode(0x0501_0004));
        assert_eq!(next.pc, 0x100 + 4 + (4 << 2));
    }
}
