//! # Opcode Dispatch Table
//!
//! This module contains the 256-entry opcode table that maps each opcode byte to
//! its instruction and addressing mode. It is immutable data shared by every
//! CPU instance.
//!
//! The table covers the 149 documented NMOS 6502 opcodes other than BRK and RTI.
//! Every other byte (interrupt instructions and undocumented opcodes) has no entry
//! and is reported as `ExecutionError::UnknownOpcode` by the execute loop.

use crate::addressing::AddressingMode;

/// The operation an opcode performs, independent of its addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    // Load/store
    Lda,
    Ldx,
    Ldy,
    Sta,
    Stx,
    Sty,
    // Register transfers
    Tax,
    Tay,
    Txa,
    Tya,
    Tsx,
    Txs,
    // Logical and arithmetic
    And,
    Eor,
    Ora,
    Bit,
    Adc,
    Sbc,
    Cmp,
    Cpx,
    Cpy,
    // Shifts and rotates
    Asl,
    Lsr,
    Rol,
    Ror,
    // Increments and decrements
    Inc,
    Dec,
    Inx,
    Iny,
    Dex,
    Dey,
    // Branches
    Bcc,
    Bcs,
    Beq,
    Bne,
    Bmi,
    Bpl,
    Bvc,
    Bvs,
    // Jumps and subroutines
    Jmp,
    Jsr,
    Rts,
    // Stack
    Pha,
    Php,
    Pla,
    Plp,
    // Status flags
    Clc,
    Sec,
    Cli,
    Sei,
    Clv,
    Cld,
    Sed,
    // System
    Nop,
}

/// A dispatch table entry.
///
/// # Examples
///
/// ```
/// use emu6502::{AddressingMode, OPCODE_TABLE};
/// use emu6502::opcodes::Instruction;
///
/// let lda_imm = OPCODE_TABLE[0xA9].unwrap();
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.instruction, Instruction::Lda);
/// assert_eq!(lda_imm.mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.cycles, 2);
/// assert_eq!(lda_imm.size_bytes(), 2);
///
/// // BRK is not part of the table
/// assert!(OPCODE_TABLE[0x00].is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    /// Three-letter instruction name.
    pub mnemonic: &'static str,

    /// What the opcode does.
    pub instruction: Instruction,

    /// How the operand bytes are interpreted.
    pub mode: AddressingMode,

    /// Published cycle cost without page-crossing or branch-taken penalties.
    pub cycles: u8,
}

impl Opcode {
    /// Total instruction size in bytes (opcode + operands).
    pub const fn size_bytes(&self) -> u8 {
        1 + self.mode.operand_bytes()
    }
}

/// Looks up the table entry for an opcode byte.
pub fn lookup(opcode: u8) -> Option<&'static Opcode> {
    OPCODE_TABLE[opcode as usize].as_ref()
}

/// Opcode table indexed by opcode byte value. `None` marks bytes the core
/// does not execute.
pub static OPCODE_TABLE: [Option<Opcode>; 256] = build_table();

const fn op(
    byte: u8,
    mnemonic: &'static str,
    instruction: Instruction,
    mode: AddressingMode,
    cycles: u8,
) -> (u8, Opcode) {
    (
        byte,
        Opcode {
            mnemonic,
            instruction,
            mode,
            cycles,
        },
    )
}

const fn build_table() -> [Option<Opcode>; 256] {
    let mut table: [Option<Opcode>; 256] = [None; 256];
    let mut i = 0;
    while i < OPCODES.len() {
        let (byte, opcode) = OPCODES[i];
        table[byte as usize] = Some(opcode);
        i += 1;
    }
    table
}

use AddressingMode::*;
use Instruction::*;

// Reference: http://www.obelisk.me.uk/6502/reference.html
const OPCODES: [(u8, Opcode); 149] = [
    op(0x01, "ORA", Ora, IndirectX, 6),
    op(0x05, "ORA", Ora, ZeroPage, 3),
    op(0x06, "ASL", Asl, ZeroPage, 5),
    op(0x08, "PHP", Php, Implied, 3),
    op(0x09, "ORA", Ora, Immediate, 2),
    op(0x0A, "ASL", Asl, Accumulator, 2),
    op(0x0D, "ORA", Ora, Absolute, 4),
    op(0x0E, "ASL", Asl, Absolute, 6),
    op(0x10, "BPL", Bpl, Relative, 2),
    op(0x11, "ORA", Ora, IndirectY, 5),
    op(0x15, "ORA", Ora, ZeroPageX, 4),
    op(0x16, "ASL", Asl, ZeroPageX, 6),
    op(0x18, "CLC", Clc, Implied, 2),
    op(0x19, "ORA", Ora, AbsoluteY, 4),
    op(0x1D, "ORA", Ora, AbsoluteX, 4),
    op(0x1E, "ASL", Asl, AbsoluteX, 7),
    op(0x20, "JSR", Jsr, Absolute, 6),
    op(0x21, "AND", And, IndirectX, 6),
    op(0x24, "BIT", Bit, ZeroPage, 3),
    op(0x25, "AND", And, ZeroPage, 3),
    op(0x26, "ROL", Rol, ZeroPage, 5),
    op(0x28, "PLP", Plp, Implied, 4),
    op(0x29, "AND", And, Immediate, 2),
    op(0x2A, "ROL", Rol, Accumulator, 2),
    op(0x2C, "BIT", Bit, Absolute, 4),
    op(0x2D, "AND", And, Absolute, 4),
    op(0x2E, "ROL", Rol, Absolute, 6),
    op(0x30, "BMI", Bmi, Relative, 2),
    op(0x31, "AND", And, IndirectY, 5),
    op(0x35, "AND", And, ZeroPageX, 4),
    op(0x36, "ROL", Rol, ZeroPageX, 6),
    op(0x38, "SEC", Sec, Implied, 2),
    op(0x39, "AND", And, AbsoluteY, 4),
    op(0x3D, "AND", And, AbsoluteX, 4),
    op(0x3E, "ROL", Rol, AbsoluteX, 7),
    op(0x41, "EOR", Eor, IndirectX, 6),
    op(0x45, "EOR", Eor, ZeroPage, 3),
    op(0x46, "LSR", Lsr, ZeroPage, 5),
    op(0x48, "PHA", Pha, Implied, 3),
    op(0x49, "EOR", Eor, Immediate, 2),
    op(0x4A, "LSR", Lsr, Accumulator, 2),
    op(0x4C, "JMP", Jmp, Absolute, 3),
    op(0x4D, "EOR", Eor, Absolute, 4),
    op(0x4E, "LSR", Lsr, Absolute, 6),
    op(0x50, "BVC", Bvc, Relative, 2),
    op(0x51, "EOR", Eor, IndirectY, 5),
    op(0x55, "EOR", Eor, ZeroPageX, 4),
    op(0x56, "LSR", Lsr, ZeroPageX, 6),
    op(0x58, "CLI", Cli, Implied, 2),
    op(0x59, "EOR", Eor, AbsoluteY, 4),
    op(0x5D, "EOR", Eor, AbsoluteX, 4),
    op(0x5E, "LSR", Lsr, AbsoluteX, 7),
    op(0x60, "RTS", Rts, Implied, 6),
    op(0x61, "ADC", Adc, IndirectX, 6),
    op(0x65, "ADC", Adc, ZeroPage, 3),
    op(0x66, "ROR", Ror, ZeroPage, 5),
    op(0x68, "PLA", Pla, Implied, 4),
    op(0x69, "ADC", Adc, Immediate, 2),
    op(0x6A, "ROR", Ror, Accumulator, 2),
    op(0x6C, "JMP", Jmp, Indirect, 5),
    op(0x6D, "ADC", Adc, Absolute, 4),
    op(0x6E, "ROR", Ror, Absolute, 6),
    op(0x70, "BVS", Bvs, Relative, 2),
    op(0x71, "ADC", Adc, IndirectY, 5),
    op(0x75, "ADC", Adc, ZeroPageX, 4),
    op(0x76, "ROR", Ror, ZeroPageX, 6),
    op(0x78, "SEI", Sei, Implied, 2),
    op(0x79, "ADC", Adc, AbsoluteY, 4),
    op(0x7D, "ADC", Adc, AbsoluteX, 4),
    op(0x7E, "ROR", Ror, AbsoluteX, 7),
    op(0x81, "STA", Sta, IndirectX, 6),
    op(0x84, "STY", Sty, ZeroPage, 3),
    op(0x85, "STA", Sta, ZeroPage, 3),
    op(0x86, "STX", Stx, ZeroPage, 3),
    op(0x88, "DEY", Dey, Implied, 2),
    op(0x8A, "TXA", Txa, Implied, 2),
    op(0x8C, "STY", Sty, Absolute, 4),
    op(0x8D, "STA", Sta, Absolute, 4),
    op(0x8E, "STX", Stx, Absolute, 4),
    op(0x90, "BCC", Bcc, Relative, 2),
    op(0x91, "STA", Sta, IndirectY, 6),
    op(0x94, "STY", Sty, ZeroPageX, 4),
    op(0x95, "STA", Sta, ZeroPageX, 4),
    op(0x96, "STX", Stx, ZeroPageY, 4),
    op(0x98, "TYA", Tya, Implied, 2),
    op(0x99, "STA", Sta, AbsoluteY, 5),
    op(0x9A, "TXS", Txs, Implied, 2),
    op(0x9D, "STA", Sta, AbsoluteX, 5),
    op(0xA0, "LDY", Ldy, Immediate, 2),
    op(0xA1, "LDA", Lda, IndirectX, 6),
    op(0xA2, "LDX", Ldx, Immediate, 2),
    op(0xA4, "LDY", Ldy, ZeroPage, 3),
    op(0xA5, "LDA", Lda, ZeroPage, 3),
    op(0xA6, "LDX", Ldx, ZeroPage, 3),
    op(0xA8, "TAY", Tay, Implied, 2),
    op(0xA9, "LDA", Lda, Immediate, 2),
    op(0xAA, "TAX", Tax, Implied, 2),
    op(0xAC, "LDY", Ldy, Absolute, 4),
    op(0xAD, "LDA", Lda, Absolute, 4),
    op(0xAE, "LDX", Ldx, Absolute, 4),
    op(0xB0, "BCS", Bcs, Relative, 2),
    op(0xB1, "LDA", Lda, IndirectY, 5),
    op(0xB4, "LDY", Ldy, ZeroPageX, 4),
    op(0xB5, "LDA", Lda, ZeroPageX, 4),
    op(0xB6, "LDX", Ldx, ZeroPageY, 4),
    op(0xB8, "CLV", Clv, Implied, 2),
    op(0xB9, "LDA", Lda, AbsoluteY, 4),
    op(0xBA, "TSX", Tsx, Implied, 2),
    op(0xBC, "LDY", Ldy, AbsoluteX, 4),
    op(0xBD, "LDA", Lda, AbsoluteX, 4),
    op(0xBE, "LDX", Ldx, AbsoluteY, 4),
    op(0xC0, "CPY", Cpy, Immediate, 2),
    op(0xC1, "CMP", Cmp, IndirectX, 6),
    op(0xC4, "CPY", Cpy, ZeroPage, 3),
    op(0xC5, "CMP", Cmp, ZeroPage, 3),
    op(0xC6, "DEC", Dec, ZeroPage, 5),
    op(0xC8, "INY", Iny, Implied, 2),
    op(0xC9, "CMP", Cmp, Immediate, 2),
    op(0xCA, "DEX", Dex, Implied, 2),
    op(0xCC, "CPY", Cpy, Absolute, 4),
    op(0xCD, "CMP", Cmp, Absolute, 4),
    op(0xCE, "DEC", Dec, Absolute, 6),
    op(0xD0, "BNE", Bne, Relative, 2),
    op(0xD1, "CMP", Cmp, IndirectY, 5),
    op(0xD5, "CMP", Cmp, ZeroPageX, 4),
    op(0xD6, "DEC", Dec, ZeroPageX, 6),
    op(0xD8, "CLD", Cld, Implied, 2),
    op(0xD9, "CMP", Cmp, AbsoluteY, 4),
    op(0xDD, "CMP", Cmp, AbsoluteX, 4),
    op(0xDE, "DEC", Dec, AbsoluteX, 7),
    op(0xE0, "CPX", Cpx, Immediate, 2),
    op(0xE1, "SBC", Sbc, IndirectX, 6),
    op(0xE4, "CPX", Cpx, ZeroPage, 3),
    op(0xE5, "SBC", Sbc, ZeroPage, 3),
    op(0xE6, "INC", Inc, ZeroPage, 5),
    op(0xE8, "INX", Inx, Implied, 2),
    op(0xE9, "SBC", Sbc, Immediate, 2),
    op(0xEA, "NOP", Nop, Implied, 2),
    op(0xEC, "CPX", Cpx, Absolute, 4),
    op(0xED, "SBC", Sbc, Absolute, 4),
    op(0xEE, "INC", Inc, Absolute, 6),
    op(0xF0, "BEQ", Beq, Relative, 2),
    op(0xF1, "SBC", Sbc, IndirectY, 5),
    op(0xF5, "SBC", Sbc, ZeroPageX, 4),
    op(0xF6, "INC", Inc, ZeroPageX, 6),
    op(0xF8, "SED", Sed, Implied, 2),
    op(0xF9, "SBC", Sbc, AbsoluteY, 4),
    op(0xFD, "SBC", Sbc, AbsoluteX, 4),
    op(0xFE, "INC", Inc, AbsoluteX, 7),
];
