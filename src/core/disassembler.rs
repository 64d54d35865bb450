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

//! Disassembly of decoded instructions for diagnostics and trace output.
//!
//! This is purely cosmetic: it never feeds back into execution. An
//! instruction the executor cannot dispatch still renders, as
//! `.word 0xXXXXXXXX`, the way a real disassembler degrades on data it
//! mistook for code.

use super::cpu::decode::{sign_extend16, Instruction};

fn reg(n: u8) -> String {
    format!("${n}")
}

/// Render a decoded instruction as one line of MIPS assembly text.
pub fn disassemble(instr: &Instruction) -> String {
    match instr.opcode {
        0x00 => disassemble_special(instr),
        0x01 => disassemble_regimm(instr),
        0x02 => format!(".word 0x{:08X} ; j 0x{:07X}", instr.word, instr.addr << 2),
        0x03 => format!(".word 0x{:08X} ; jal 0x{:07X}", instr.word, instr.addr << 2),
        0x04 => branch_text("beq", instr),
        0x05 => branch_text("bne", instr),
        0x06 => branch_text1("blez", instr),
        0x07 => branch_text1("bgtz", instr),
        0x08 => immediate_text("addi", instr),
        0x09 => immediate_text("addiu", instr),
        0x0A => immediate_text("slti", instr),
        0x0B => immediate_text("sltiu", instr),
        0x0C => immediate_text_zext("andi", instr),
        0x0D => immediate_text_zext("ori", instr),
        0x0E => immediate_text_zext("xori", instr),
        0x0F => format!("lui {}, 0x{:04X}", reg(instr.rt), instr.imm),
        0x20 => load_store_text("lb", instr),
        0x21 => load_store_text("lh", instr),
        0x23 => load_store_text("lw", instr),
        0x24 => load_store_text("lbu", instr),
        0x25 => load_store_text("lhu", instr),
        0x28 => load_store_text("sb", instr),
        0x29 => load_store_text("sh", instr),
        0x2B => load_store_text("sw", instr),
        _ => format!(".word 0x{:08X}", instr.word),
    }
}

fn disassemble_special(instr: &Instruction) -> String {
    match instr.funct {
        0x00 if instr.word == 0 => "nop".to_string(),
        0x00 => shift_text("sll", instr),
        0x02 => shift_text("srl", instr),
        0x03 => shift_text("sra", instr),
        0x04 => shift_var_text("sllv", instr),
        0x06 => shift_var_text("srlv", instr),
        0x07 => shift_var_text("srav", instr),
        0x08 => format!("jr {}", reg(instr.rs)),
        0x09 if instr.rd == 31 => format!("jalr {}", reg(instr.rs)),
        0x09 => format!("jalr {}, {}", reg(instr.rd), reg(instr.rs)),
        0x0C => "syscall".to_string(),
        0x10 => format!("mfhi {}", reg(instr.rd)),
        0x11 => format!("mthi {}", reg(instr.rs)),
        0x12 => format!("mflo {}", reg(instr.rd)),
        0x13 => format!("mtlo {}", reg(instr.rs)),
        0x18 => format!("mult {}, {}", reg(instr.rs), reg(instr.rt)),
        0x19 => format!("multu {}, {}", reg(instr.rs), reg(instr.rt)),
        0x1A => format!("div {}, {}", reg(instr.rs), reg(instr.rt)),
        0x1B => format!("divu {}, {}", reg(instr.rs), reg(instr.rt)),
        0x20 => rtype_text("add", instr),
        0x21 => rtype_text("addu", instr),
        0x22 => rtype_text("sub", instr),
        0x23 => rtype_text("subu", instr),
        0x24 => rtype_text("and", instr),
        0x25 => rtype_text("or", instr),
        0x26 => rtype_text("xor", instr),
        0x27 => rtype_text("nor", instr),
        0x2A => rtype_text("slt", instr),
        0x2B => rtype_text("sltu", instr),
        _ => format!(".word 0x{:08X}", instr.word),
    }
}

fn disassemble_regimm(instr: &Instruction) -> String {
    match instr.rt {
        0x00 => branch_text1("bltz", instr),
        0x01 => branch_text1("bgez", instr),
        0x10 => branch_text1("bltzal", instr),
        0x11 => branch_text1("bgezal", instr),
        _ => format!(".word 0x{:08X}", instr.word),
    }
}

fn rtype_text(mnemonic: &str, instr: &Instruction) -> String {
    format!(
        "{mnemonic} {}, {}, {}",
        reg(instr.rd),
        reg(instr.rs),
        reg(instr.rt)
    )
}

fn shift_text(mnemonic: &str, instr: &Instruction) -> String {
    format!(
        "{mnemonic} {}, {}, {}",
        reg(instr.rd),
        reg(instr.rt),
        instr.shamt
    )
}

fn shift_var_text(mnemonic: &str, instr: &Instruction) -> String {
    format!(
        "{mnemonic} {}, {}, {}",
        reg(instr.rd),
        reg(instr.rt),
        reg(instr.rs)
    )
}

fn immediate_text(mnemonic: &str, instr: &Instruction) -> String {
    format!(
        "{mnemonic} {}, {}, {}",
        reg(instr.rt),
        reg(instr.rs),
        sign_extend16(instr.imm) as i32
    )
}

fn immediate_text_zext(mnemonic: &str, instr: &Instruction) -> String {
    format!(
        "{mnemonic} {}, {}, 0x{:04X}",
        reg(instr.rt),
        reg(instr.rs),
        instr.imm
    )
}

fn load_store_text(mnemonic: &str, instr: &Instruction) -> String {
    format!(
        "{mnemonic} {}, {}({})",
        reg(instr.rt),
        sign_extend16(instr.imm) as i32,
        reg(instr.rs)
    )
}

fn branch_text(mnemonic: &str, instr: &Instruction) -> String {
    format!(
        "{mnemonic} {}, {}, {}",
        reg(instr.rs),
        reg(instr.rt),
        sign_extend16(instr.imm) as i32
    )
}

fn branch_text1(mnemonic: &str, instr: &Instruction) -> String {
    format!(
        "{mnemonic} {}, {}",
        reg(instr.rs),
        sign_extend16(instr.imm) as i32
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cpu::decode::decode;

    #[test]
    fn test_disassemble_add() {
        // add $10, $8, $9
        let instr = decode(0x0109_5020);
        assert_eq!(disassemble(&instr), "add $10, $8, $9");
    }

    #[test]
    fn test_disassemble_addi_sign_extends_displayed_immediate() {
        // addi $2, $1, 0xFFFF
        let instr = decode(0x2022_FFFF);
        assert_eq!(disassemble(&instr), "addi $2, $1, -1");
    }

    #[test]
    fn test_disassemble_beq() {
        // beq $1, $2, -1
        let instr = decode(0x1022_FFFF);
        assert_eq!(disassemble(&instr), "beq $1, $2, -1");
    }

    #[test]
    fn test_disassemble_nop() {
        let instr = decode(0x0000_0000);
        assert_eq!(disassemble(&instr), "nop");
    }

    #[test]
    fn test_disassemble_syscall() {
        let instr = decode(0x0000_000C);
        assert_eq!(disassemble(&instr), "syscall");
    }

    #[test]
    fn test_disassemble_unknown_degrades_to_word_directive() {
        // funct 0x3F under opcode 0x00 is not assigned
        let instr = decode(0x0000_003F);
        assert_eq!(disassemble(&instr), ".word 0x0000003F");
    }

    #[test]
    fn test_disassemble_lw() {
        // lw $9, 0($8)
        let instr = decode(0x8D09_0000);
        assert_eq!(disassemble(&instr), "lw $9, 0($8)");
    }

    #[test]
    fn test_disassemble_lui() {
        // lui $1, 0x1234
        let instr = decode(0x3C01_1234);
        assert_eq!(disassemble(&instr), "lui $1, 0x1234");
    }
}
