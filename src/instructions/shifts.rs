//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left
//! - ROR: Rotate Right
//!
//! Each works on the accumulator (Accumulator mode) or on a memory byte
//! (read-modify-write). Carry receives the bit shifted out; the rotates feed the
//! previous carry into the vacated bit.

use crate::addressing::{AddressingMode, Operand, Resolved};
use crate::memory::MemoryBus;
use crate::{ExecutionError, CPU};

/// Read-modify-write cycles beyond the resolver's base cost.
///
/// Writing back to A costs 1; writing back to memory costs 3, or 4 for AbsoluteX,
/// which never gets the page-cross shortcut.
pub(crate) fn rmw_cycles(mode: AddressingMode, operand: Operand) -> u64 {
    match (operand, mode) {
        (Operand::Accumulator, _) => 1,
        (_, AddressingMode::AbsoluteX) => 4,
        _ => 3,
    }
}

/// Shared body: `op` maps (value, carry in) to (result, carry out).
fn execute_shift<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &mut M,
    mode: AddressingMode,
    resolved: Resolved,
    op: fn(u8, bool) -> (u8, bool),
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(memory, resolved.operand)?;

    let (result, carry) = op(value, cpu.flags.carry);
    cpu.write_operand(memory, resolved.operand, result)?;

    cpu.flags.carry = carry;
    cpu.flags.set_zero_negative(result);

    cpu.cycles += rmw_cycles(mode, resolved.operand);
    Ok(())
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 0 is set to 0 and bit 7 is placed in the carry flag.
pub(crate) fn execute_asl<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &mut M,
    mode: AddressingMode,
    resolved: Resolved,
) -> Result<(), ExecutionError> {
    execute_shift(cpu, memory, mode, resolved, |value, _| {
        (value << 1, value & 0x80 != 0)
    })
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 7 is set to 0 and bit 0 is placed in the carry flag.
pub(crate) fn execute_lsr<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &mut M,
    mode: AddressingMode,
    resolved: Resolved,
) -> Result<(), ExecutionError> {
    execute_shift(cpu, memory, mode, resolved, |value, _| {
        (value >> 1, value & 0x01 != 0)
    })
}

/// Executes the ROL (Rotate Left) instruction. Old carry enters bit 0.
pub(crate) fn execute_rol<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &mut M,
    mode: AddressingMode,
    resolved: Resolved,
) -> Result<(), ExecutionError> {
    execute_shift(cpu, memory, mode, resolved, |value, carry| {
        ((value << 1) | u8::from(carry), value & 0x80 != 0)
    })
}

/// Executes the ROR (Rotate Right) instruction. Old carry enters bit 7.
pub(crate) fn execute_ror<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &mut M,
    mode: AddressingMode,
    resolved: Resolved,
) -> Result<(), ExecutionError> {
    execute_shift(cpu, memory, mode, resolved, |value, carry| {
        ((value >> 1) | (u8::from(carry) << 7), value & 0x01 != 0)
    })
}
