//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA, LDX, LDY: Load a register from memory
//! - STA, STX, STY: Store a register to memory
//!
//! Loads behave like every other read: +1 cycle, +1 more on a page cross.
//! Stores never look at the page-cross result; indexed absolute and
//! indirect-indexed stores always pay the extra cycle.

use super::{read_cycles, read_register, write_register};
use crate::addressing::{AddressingMode, Resolved};
use crate::memory::MemoryBus;
use crate::registers::Register;
use crate::{ExecutionError, CPU};

/// Executes LDA/LDX/LDY.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if the loaded value is 0
/// - Negative (N): Set if bit 7 of the loaded value is set
/// - Other flags: Not affected
pub(crate) fn execute_load<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &M,
    resolved: Resolved,
    register: Register,
) -> Result<(), ExecutionError> {
    let value = cpu.read_operand(memory, resolved.operand)?;

    write_register(cpu, register, value);
    cpu.flags.set_zero_negative(value);

    cpu.cycles += read_cycles(&resolved);
    Ok(())
}

/// Executes STA/STX/STY. No flags are affected.
pub(crate) fn execute_store<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &mut M,
    mode: AddressingMode,
    resolved: Resolved,
    register: Register,
) -> Result<(), ExecutionError> {
    let value = read_register(cpu, register);
    cpu.write_operand(memory, resolved.operand, value)?;

    cpu.cycles += 1;
    if matches!(
        mode,
        AddressingMode::AbsoluteX | AddressingMode::AbsoluteY | AddressingMode::IndirectY
    ) {
        cpu.cycles += 1;
    }
    Ok(())
}
