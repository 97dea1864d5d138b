//! # Register Transfer Instructions
//!
//! TAX, TAY, TXA, TYA, TSX, TXS. All take 2 cycles. Every transfer except TXS
//! updates Z and N from the value copied.

use super::{read_register, write_register};
use crate::registers::Register;
use crate::{ExecutionError, CPU};

pub(crate) fn execute_transfer(
    cpu: &mut CPU,
    from: Register,
    to: Register,
) -> Result<(), ExecutionError> {
    let value = read_register(cpu, from);
    write_register(cpu, to, value);

    if to != Register::SP {
        cpu.flags.set_zero_negative(value);
    }

    cpu.cycles += 1;
    Ok(())
}
