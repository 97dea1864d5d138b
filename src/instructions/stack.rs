//! # Stack Instructions
//!
//! This module implements stack push and pull operations:
//! - PHA: Push Accumulator (3 cycles)
//! - PHP: Push Processor Status (3 cycles)
//! - PLA: Pull Accumulator (4 cycles)
//! - PLP: Pull Processor Status (4 cycles)
//!
//! The stack lives at 0x0100-0x01FF. Pushes write to 0x0100 + SP then decrement SP;
//! pulls increment SP then read.

use crate::memory::MemoryBus;
use crate::{ExecutionError, CPU};

/// Executes the PHA (Push Accumulator) instruction. No flags are affected.
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU, memory: &mut M) -> Result<(), ExecutionError> {
    let value = cpu.registers.a;
    cpu.push(memory, value)?;

    cpu.cycles += 2;
    Ok(())
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The packed status byte is pushed as held, so PHP followed by PLP restores
/// every flag exactly.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU, memory: &mut M) -> Result<(), ExecutionError> {
    let status = cpu.flags.status();
    cpu.push(memory, status)?;

    cpu.cycles += 2;
    Ok(())
}

/// Executes the PLA (Pull Accumulator) instruction. Updates Z and N.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU, memory: &M) -> Result<(), ExecutionError> {
    let value = cpu.pull(memory)?;
    cpu.registers.a = value;
    cpu.flags.set_zero_negative(value);

    cpu.cycles += 3;
    Ok(())
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Every flag is overwritten from the pulled byte; nothing is derived.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU, memory: &M) -> Result<(), ExecutionError> {
    let status = cpu.pull(memory)?;
    cpu.flags.set_status(status);

    cpu.cycles += 3;
    Ok(())
}
