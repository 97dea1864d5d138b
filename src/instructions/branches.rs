//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS.
//!
//! All branch instructions use relative addressing with a signed 8-bit offset.
//! Cycle timing varies based on whether the branch is taken and whether a page boundary is crossed.

use crate::addressing::Resolved;
use crate::memory::{offset_crosses_page_boundary, MemoryBus};
use crate::{ExecutionError, Flags, CPU};

/// Branches by the signed offset operand when `condition` holds.
///
/// Cycle timing:
/// - 2 cycles if branch not taken
/// - 3 cycles if branch taken to same page
/// - 4 cycles if branch taken to different page
///
/// The page is compared against the instruction following the branch.
/// No flags are affected.
pub(crate) fn execute_branch<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &M,
    resolved: Resolved,
    condition: fn(&Flags) -> bool,
) -> Result<(), ExecutionError> {
    let offset = cpu.read_operand(memory, resolved.operand)? as i8;

    // Offset fetch
    cpu.cycles += 1;

    if condition(&cpu.flags) {
        let next = cpu.pc;
        let target = next.wrapping_add_signed(i16::from(offset));

        cpu.cycles += 1;
        if offset_crosses_page_boundary(u32::from(next), i32::from(offset)) {
            cpu.cycles += 1;
        }

        cpu.pc = target;
    }

    Ok(())
}
