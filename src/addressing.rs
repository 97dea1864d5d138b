//! # Addressing Modes
//!
//! This module defines the addressing modes supported by the 6502 processor and
//! the resolver that turns the operand bytes following an opcode into an
//! effective address.
//!
//! The resolver consumes operand bytes at PC, advances PC past them and reports
//! the base cycle cost of the mode together with whether indexing crossed a page.
//! It never applies the page-crossing penalty itself: reads pay it only when a
//! page is crossed, stores and read-modify-write instructions decide for themselves.

use crate::memory::{check_address, offset_crosses_page_boundary, MemoryBus};
use crate::{ExecutionError, CPU};

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how the CPU interprets the operand bytes
/// that follow an opcode and how it calculates the effective memory address
/// for the operation.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implied,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10 (load immediate value 0x10 into accumulator)
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage,

    /// Zero page address indexed by X register.
    ///
    /// Example: LDA $80,X (load from address 0x0080 + X, wraps within zero page)
    ZeroPageX,

    /// Zero page address indexed by Y register.
    ///
    /// Example: LDX $80,Y (load from address 0x0080 + Y, wraps within zero page)
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label (branch if zero flag set, offset is relative to PC)
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234 (jump to address 0x1234)
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X (load from address 0x1234 + X)
    /// Reads incur a +1 cycle penalty if a page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y (load from address 0x1234 + Y)
    /// Reads incur a +1 cycle penalty if a page boundary is crossed.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer.
    ///
    /// Example: JMP ($FFFC) (jump to address stored at 0xFFFC/0xFFFD)
    /// Only used by JMP instruction.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X) (add X to 0x40, read 16-bit address from that ZP location, load from result)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y (read 16-bit address from ZP 0x40, add Y, load from result)
    /// Reads incur a +1 cycle penalty if a page boundary is crossed.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implied | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }

    /// Cycles the resolver charges for this mode, on top of the opcode fetch.
    pub const fn base_cycles(self) -> u8 {
        match self {
            AddressingMode::Implied
            | AddressingMode::Accumulator
            | AddressingMode::Immediate
            | AddressingMode::Relative => 0,
            AddressingMode::ZeroPage => 1,
            AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY => 2,
            AddressingMode::IndirectY => 3,
            AddressingMode::Indirect | AddressingMode::IndirectX => 4,
        }
    }
}

/// Where an instruction's operand lives after resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// No operand.
    None,
    /// The accumulator itself.
    Accumulator,
    /// A validated memory address. For Immediate and Relative this is the
    /// address of the operand byte.
    Address(u16),
}

/// Result of resolving an addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub operand: Operand,
    /// Base cycle cost of the mode.
    pub cycles: u8,
    /// Whether indexing moved the effective address into another page.
    pub page_crossed: bool,
}

impl Resolved {
    fn at(address: u16, mode: AddressingMode) -> Self {
        Self {
            operand: Operand::Address(address),
            cycles: mode.base_cycles(),
            page_crossed: false,
        }
    }
}

impl CPU {
    /// Reads the byte at PC and advances PC by one.
    pub(crate) fn fetch_byte<M: MemoryBus>(&mut self, memory: &M) -> Result<u8, ExecutionError> {
        let value = memory.read_byte(u32::from(self.pc))?;
        self.pc = self.pc.wrapping_add(1);
        Ok(value)
    }

    /// Reads a little-endian word at PC and advances PC by two.
    pub(crate) fn fetch_word<M: MemoryBus>(&mut self, memory: &M) -> Result<u16, ExecutionError> {
        let low = self.fetch_byte(memory)?;
        let high = self.fetch_byte(memory)?;
        Ok(u16::from_le_bytes([low, high]))
    }

    /// Resolves `mode` into an operand, consuming the operand bytes at PC.
    ///
    /// Every effective address is range-checked here, before the instruction
    /// applies any side effect.
    pub(crate) fn resolve<M: MemoryBus>(
        &mut self,
        memory: &M,
        mode: AddressingMode,
    ) -> Result<Resolved, ExecutionError> {
        let resolved = match mode {
            AddressingMode::Implied => Resolved {
                operand: Operand::None,
                cycles: mode.base_cycles(),
                page_crossed: false,
            },
            AddressingMode::Accumulator => Resolved {
                operand: Operand::Accumulator,
                cycles: mode.base_cycles(),
                page_crossed: false,
            },
            AddressingMode::Immediate | AddressingMode::Relative => {
                let address = self.pc;
                self.pc = self.pc.wrapping_add(1);
                Resolved::at(address, mode)
            }
            AddressingMode::ZeroPage => {
                let zp = self.fetch_byte(memory)?;
                Resolved::at(u16::from(zp), mode)
            }
            AddressingMode::ZeroPageX => {
                let zp = self.fetch_byte(memory)?.wrapping_add(self.registers.x);
                Resolved::at(u16::from(zp), mode)
            }
            AddressingMode::ZeroPageY => {
                let zp = self.fetch_byte(memory)?.wrapping_add(self.registers.y);
                Resolved::at(u16::from(zp), mode)
            }
            AddressingMode::Absolute => {
                let address = self.fetch_word(memory)?;
                Resolved::at(address, mode)
            }
            AddressingMode::AbsoluteX => {
                let base = self.fetch_word(memory)?;
                indexed(base, self.registers.x, mode)?
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_word(memory)?;
                indexed(base, self.registers.y, mode)?
            }
            AddressingMode::Indirect => {
                let pointer = self.fetch_word(memory)?;
                // NMOS bug: the high byte is fetched without carrying into the
                // pointer's page, so JMP ($10FF) reads 0x10FF and 0x1000.
                let high_pointer = (pointer & 0xFF00) | (pointer.wrapping_add(1) & 0x00FF);
                let low = memory.read_byte(u32::from(pointer))?;
                let high = memory.read_byte(u32::from(high_pointer))?;
                Resolved::at(u16::from_le_bytes([low, high]), mode)
            }
            AddressingMode::IndirectX => {
                let zp = self.fetch_byte(memory)?.wrapping_add(self.registers.x);
                let address = read_zero_page_word(memory, zp)?;
                Resolved::at(address, mode)
            }
            AddressingMode::IndirectY => {
                let zp = self.fetch_byte(memory)?;
                let base = read_zero_page_word(memory, zp)?;
                indexed(base, self.registers.y, mode)?
            }
        };

        Ok(resolved)
    }

    /// Reads the value an operand refers to.
    ///
    /// `Operand::None` reads as the accumulator; no read instruction is paired
    /// with implied addressing in the opcode table.
    pub(crate) fn read_operand<M: MemoryBus>(
        &self,
        memory: &M,
        operand: Operand,
    ) -> Result<u8, ExecutionError> {
        match operand {
            Operand::None | Operand::Accumulator => Ok(self.registers.a),
            Operand::Address(address) => Ok(memory.read_byte(u32::from(address))?),
        }
    }

    /// Writes a value back to where an operand refers to.
    pub(crate) fn write_operand<M: MemoryBus>(
        &mut self,
        memory: &mut M,
        operand: Operand,
        value: u8,
    ) -> Result<(), ExecutionError> {
        match operand {
            Operand::None | Operand::Accumulator => {
                self.registers.a = value;
                Ok(())
            }
            Operand::Address(address) => Ok(memory.write_byte(u32::from(address), value)?),
        }
    }
}

/// Adds an index to a base address without wrapping.
fn indexed(base: u16, index: u8, mode: AddressingMode) -> Result<Resolved, ExecutionError> {
    let address = check_address(u32::from(base) + u32::from(index))?;
    Ok(Resolved {
        operand: Operand::Address(address),
        cycles: mode.base_cycles(),
        page_crossed: offset_crosses_page_boundary(u32::from(base), i32::from(index)),
    })
}

/// Reads a pointer from page zero; the high byte wraps from 0xFF to 0x00.
fn read_zero_page_word<M: MemoryBus>(memory: &M, zp: u8) -> Result<u16, ExecutionError> {
    let low = memory.read_byte(u32::from(zp))?;
    let high = memory.read_byte(u32::from(zp.wrapping_add(1)))?;
    Ok(u16::from_le_bytes([low, high]))
}
