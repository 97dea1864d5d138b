//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! - INC, DEC: Read-modify-write on a memory byte
//! - INX, INY, DEX, DEY: Register forms (2 cycles)
//!
//! All wrap modulo 256 and update Z and N; carry is never touched.

use super::shifts::rmw_cycles;
use super::{read_register, write_register};
use crate::addressing::{AddressingMode, Resolved};
use crate::memory::MemoryBus;
use crate::registers::Register;
use crate::{ExecutionError, CPU};

fn execute_memory_step<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &mut M,
    mode: AddressingMode,
    resolved: Resolved,
    op: fn(u8) -> u8,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(memory, resolved.operand)?;

    let result = op(value);
    cpu.write_operand(memory, resolved.operand, result)?;
    cpu.flags.set_zero_negative(result);

    cpu.cycles += rmw_cycles(mode, resolved.operand);
    Ok(())
}

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &mut M,
    mode: AddressingMode,
    resolved: Resolved,
) -> Result<(), ExecutionError> {
    execute_memory_step(cpu, memory, mode, resolved, |v| v.wrapping_add(1))
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &mut M,
    mode: AddressingMode,
    resolved: Resolved,
) -> Result<(), ExecutionError> {
    execute_memory_step(cpu, memory, mode, resolved, |v| v.wrapping_sub(1))
}

/// Executes INX/INY.
pub(crate) fn execute_increment_register(
    cpu: &mut CPU,
    register: Register,
) -> Result<(), ExecutionError> {
    let result = read_register(cpu, register).wrapping_add(1);
    write_register(cpu, register, result);
    cpu.flags.set_zero_negative(result);

    cpu.cycles += 1;
    Ok(())
}

/// Executes DEX/DEY.
pub(crate) fn execute_decrement_register(
    cpu: &mut CPU,
    register: Register,
) -> Result<(), ExecutionError> {
    let result = read_register(cpu, register).wrapping_sub(1);
    write_register(cpu, register, result);
    cpu.flags.set_zero_negative(result);

    cpu.cycles += 1;
    Ok(())
}
