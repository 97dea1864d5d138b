//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC: Clear Carry Flag
//! - SEC: Set Carry Flag
//! - CLI: Clear Interrupt Disable
//! - SEI: Set Interrupt Disable
//! - CLV: Clear Overflow Flag
//! - CLD: Clear Decimal Mode
//! - SED: Set Decimal Mode
//!
//! These instructions use implied addressing mode and execute in 2 cycles.

use crate::{ExecutionError, Flags, CPU};

/// Applies a single flag change.
pub(crate) fn execute_flag(
    cpu: &mut CPU,
    change: impl FnOnce(&mut Flags),
) -> Result<(), ExecutionError> {
    change(&mut cpu.flags);

    cpu.cycles += 1;
    Ok(())
}
