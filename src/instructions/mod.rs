//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all 6502 instructions, organized by category.
//! Each instruction is a standalone function that receives the CPU, the memory and the
//! already-resolved operand. By the time one runs, the execute loop has charged the
//! opcode fetch and the addressing mode's base cost; the function adds its own cycles.
//!
//! ## Categories
//!
//! - **alu**: Logical and arithmetic operations (AND, EOR, ORA, BIT, ADC, SBC, CMP, CPX, CPY)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::addressing::Resolved;
use crate::memory::MemoryBus;
use crate::opcodes::{Instruction, Opcode};
use crate::registers::Register;
use crate::{ExecutionError, CPU};

/// Runs the semantic function for a decoded opcode.
pub(crate) fn execute<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &mut M,
    opcode: &Opcode,
    resolved: Resolved,
) -> Result<(), ExecutionError> {
    let mode = opcode.mode;

    match opcode.instruction {
        Instruction::Lda => load_store::execute_load(cpu, memory, resolved, Register::A),
        Instruction::Ldx => load_store::execute_load(cpu, memory, resolved, Register::X),
        Instruction::Ldy => load_store::execute_load(cpu, memory, resolved, Register::Y),
        Instruction::Sta => load_store::execute_store(cpu, memory, mode, resolved, Register::A),
        Instruction::Stx => load_store::execute_store(cpu, memory, mode, resolved, Register::X),
        Instruction::Sty => load_store::execute_store(cpu, memory, mode, resolved, Register::Y),

        Instruction::Tax => transfer::execute_transfer(cpu, Register::A, Register::X),
        Instruction::Tay => transfer::execute_transfer(cpu, Register::A, Register::Y),
        Instruction::Txa => transfer::execute_transfer(cpu, Register::X, Register::A),
        Instruction::Tya => transfer::execute_transfer(cpu, Register::Y, Register::A),
        Instruction::Tsx => transfer::execute_transfer(cpu, Register::SP, Register::X),
        Instruction::Txs => transfer::execute_transfer(cpu, Register::X, Register::SP),

        Instruction::And => alu::execute_and(cpu, memory, resolved),
        Instruction::Eor => alu::execute_eor(cpu, memory, resolved),
        Instruction::Ora => alu::execute_ora(cpu, memory, resolved),
        Instruction::Bit => alu::execute_bit(cpu, memory, resolved),
        Instruction::Adc => alu::execute_adc(cpu, memory, resolved),
        Instruction::Sbc => alu::execute_sbc(cpu, memory, resolved),
        Instruction::Cmp => alu::execute_compare(cpu, memory, resolved, Register::A),
        Instruction::Cpx => alu::execute_compare(cpu, memory, resolved, Register::X),
        Instruction::Cpy => alu::execute_compare(cpu, memory, resolved, Register::Y),

        Instruction::Asl => shifts::execute_asl(cpu, memory, mode, resolved),
        Instruction::Lsr => shifts::execute_lsr(cpu, memory, mode, resolved),
        Instruction::Rol => shifts::execute_rol(cpu, memory, mode, resolved),
        Instruction::Ror => shifts::execute_ror(cpu, memory, mode, resolved),

        Instruction::Inc => inc_dec::execute_inc(cpu, memory, mode, resolved),
        Instruction::Dec => inc_dec::execute_dec(cpu, memory, mode, resolved),
        Instruction::Inx => inc_dec::execute_increment_register(cpu, Register::X),
        Instruction::Iny => inc_dec::execute_increment_register(cpu, Register::Y),
        Instruction::Dex => inc_dec::execute_decrement_register(cpu, Register::X),
        Instruction::Dey => inc_dec::execute_decrement_register(cpu, Register::Y),

        Instruction::Bcc => branches::execute_branch(cpu, memory, resolved, |f| !f.carry),
        Instruction::Bcs => branches::execute_branch(cpu, memory, resolved, |f| f.carry),
        Instruction::Bne => branches::execute_branch(cpu, memory, resolved, |f| !f.zero),
        Instruction::Beq => branches::execute_branch(cpu, memory, resolved, |f| f.zero),
        Instruction::Bpl => branches::execute_branch(cpu, memory, resolved, |f| !f.negative),
        Instruction::Bmi => branches::execute_branch(cpu, memory, resolved, |f| f.negative),
        Instruction::Bvc => branches::execute_branch(cpu, memory, resolved, |f| !f.overflow),
        Instruction::Bvs => branches::execute_branch(cpu, memory, resolved, |f| f.overflow),

        Instruction::Jmp => control::execute_jmp(cpu, resolved),
        Instruction::Jsr => control::execute_jsr(cpu, memory, resolved),
        Instruction::Rts => control::execute_rts(cpu, memory),
        Instruction::Nop => control::execute_nop(cpu),

        Instruction::Pha => stack::execute_pha(cpu, memory),
        Instruction::Php => stack::execute_php(cpu, memory),
        Instruction::Pla => stack::execute_pla(cpu, memory),
        Instruction::Plp => stack::execute_plp(cpu, memory),

        Instruction::Clc => flags::execute_flag(cpu, |f| f.carry = false),
        Instruction::Sec => flags::execute_flag(cpu, |f| f.carry = true),
        Instruction::Cli => flags::execute_flag(cpu, |f| f.interrupt_disable = false),
        Instruction::Sei => flags::execute_flag(cpu, |f| f.interrupt_disable = true),
        Instruction::Clv => flags::execute_flag(cpu, |f| f.overflow = false),
        Instruction::Cld => flags::execute_flag(cpu, |f| f.decimal = false),
        Instruction::Sed => flags::execute_flag(cpu, |f| f.decimal = true),
    }
}

/// Reads an 8-bit register by name.
pub(crate) fn read_register(cpu: &CPU, register: Register) -> u8 {
    match register {
        Register::A => cpu.registers.a,
        Register::X => cpu.registers.x,
        Register::Y => cpu.registers.y,
        Register::SP => cpu.sp,
    }
}

/// Writes an 8-bit register by name.
pub(crate) fn write_register(cpu: &mut CPU, register: Register, value: u8) {
    match register {
        Register::A => cpu.registers.a = value,
        Register::X => cpu.registers.x = value,
        Register::Y => cpu.registers.y = value,
        Register::SP => cpu.sp = value,
    }
}

/// Cycles a read instruction adds: the read itself plus the page-crossing penalty.
pub(crate) fn read_cycles(resolved: &Resolved) -> u64 {
    1 + u64::from(resolved.page_crossed)
}
