//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - AND, EOR, ORA: Bitwise combine with the accumulator
//! - BIT: Test bits against the accumulator
//! - ADC, SBC: Add/subtract with carry
//! - CMP, CPX, CPY: Compare a register with memory
//!
//! All of these are reads: +1 cycle, +1 more when indexing crosses a page.
//! ADC and SBC always use binary arithmetic; the decimal flag is not consulted.

use super::{read_cycles, read_register};
use crate::addressing::Resolved;
use crate::memory::MemoryBus;
use crate::registers::Register;
use crate::{ExecutionError, CPU};

fn execute_logical<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &M,
    resolved: Resolved,
    op: fn(u8, u8) -> u8,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(memory, resolved.operand)?;

    let result = op(cpu.registers.a, value);
    cpu.registers.a = result;
    cpu.flags.set_zero_negative(result);

    cpu.cycles += read_cycles(&resolved);
    Ok(())
}

/// Executes the AND (Logical AND) instruction. Updates Z and N.
pub(crate) fn execute_and<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &M,
    resolved: Resolved,
) -> Result<(), ExecutionError> {
    execute_logical(cpu, memory, resolved, |a, m| a & m)
}

/// Executes the EOR (Exclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_eor<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &M,
    resolved: Resolved,
) -> Result<(), ExecutionError> {
    execute_logical(cpu, memory, resolved, |a, m| a ^ m)
}

/// Executes the ORA (Logical Inclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_ora<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &M,
    resolved: Resolved,
) -> Result<(), ExecutionError> {
    execute_logical(cpu, memory, resolved, |a, m| a | m)
}

/// Executes the BIT (Bit Test) instruction.
///
/// The AND result is discarded except for the Zero flag.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A & M = 0
/// - Negative (N): Bit 7 of M (not of the AND result)
/// - Overflow (V): Bit 6 of M
pub(crate) fn execute_bit<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &M,
    resolved: Resolved,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(memory, resolved.operand)?;

    cpu.flags.set_zero(u16::from(cpu.registers.a & value));
    cpu.flags.set_negative(u16::from(value));
    cpu.flags.overflow = value & 0x40 != 0;

    cpu.cycles += read_cycles(&resolved);
    Ok(())
}

/// Adds `value` and the carry to the accumulator, updating C, V, Z and N.
fn add_with_carry(cpu: &mut CPU, value: u8) {
    let a = cpu.registers.a;
    let sum = u16::from(a) + u16::from(value) + u16::from(cpu.flags.carry);
    let result = sum as u8;

    cpu.flags.carry = sum > 0xFF;
    // Signed overflow: both inputs share a sign the result does not have
    cpu.flags.overflow = (a ^ result) & (value ^ result) & 0x80 != 0;
    cpu.registers.a = result;
    cpu.flags.set_zero_negative(result);
}

/// Executes the ADC (Add with Carry) instruction.
pub(crate) fn execute_adc<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &M,
    resolved: Resolved,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(memory, resolved.operand)?;
    add_with_carry(cpu, value);

    cpu.cycles += read_cycles(&resolved);
    Ok(())
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// A - M - (1 - C), computed as A + !M + C. Carry is set when no borrow occurred.
pub(crate) fn execute_sbc<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &M,
    resolved: Resolved,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(memory, resolved.operand)?;
    add_with_carry(cpu, !value);

    cpu.cycles += read_cycles(&resolved);
    Ok(())
}

/// Executes CMP/CPX/CPY.
///
/// # Flag Behavior
///
/// - Carry (C): Set if register >= M
/// - Zero (Z), Negative (N): From register - M
pub(crate) fn execute_compare<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &M,
    resolved: Resolved,
    register: Register,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(memory, resolved.operand)?;
    let reg = read_register(cpu, register);

    cpu.flags.carry = reg >= value;
    cpu.flags.set_zero_negative(reg.wrapping_sub(value));

    cpu.cycles += read_cycles(&resolved);
    Ok(())
}
