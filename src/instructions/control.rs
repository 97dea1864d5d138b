//! # Control Flow Instructions
//!
//! This module implements:
//! - JMP: Jump (Absolute 3 cycles, Indirect 5 cycles)
//! - JSR: Jump to Subroutine (6 cycles)
//! - RTS: Return from Subroutine (6 cycles)
//! - NOP: No Operation (2 cycles)
//!
//! JSR pushes the address of the last byte of its own operand (return - 1),
//! high byte first; RTS pulls it low byte first and adds one.

use crate::addressing::{Operand, Resolved};
use crate::memory::MemoryBus;
use crate::{ExecutionError, CPU};

fn target(resolved: &Resolved, fallback: u16) -> u16 {
    match resolved.operand {
        Operand::Address(address) => address,
        Operand::None | Operand::Accumulator => fallback,
    }
}

/// Executes the JMP instruction. Costs nothing beyond address resolution.
pub(crate) fn execute_jmp(cpu: &mut CPU, resolved: Resolved) -> Result<(), ExecutionError> {
    cpu.pc = target(&resolved, cpu.pc);
    Ok(())
}

/// Executes the JSR (Jump to Subroutine) instruction.
pub(crate) fn execute_jsr<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &mut M,
    resolved: Resolved,
) -> Result<(), ExecutionError> {
    let destination = target(&resolved, cpu.pc);
    let [low, high] = cpu.pc.wrapping_sub(1).to_le_bytes();

    cpu.push(memory, high)?;
    cpu.push(memory, low)?;
    cpu.pc = destination;

    cpu.cycles += 3;
    Ok(())
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU, memory: &M) -> Result<(), ExecutionError> {
    let low = cpu.pull(memory)?;
    let high = cpu.pull(memory)?;
    cpu.pc = u16::from_le_bytes([low, high]).wrapping_add(1);

    cpu.cycles += 5;
    Ok(())
}

/// Executes the NOP instruction.
pub(crate) fn execute_nop(cpu: &mut CPU) -> Result<(), ExecutionError> {
    cpu.cycles += 1;
    Ok(())
}
