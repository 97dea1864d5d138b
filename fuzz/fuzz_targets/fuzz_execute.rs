//! Fuzz target for the cycle-budgeted execution loop.
//!
//! Loads an arbitrary image at 0x0000 and runs it against an arbitrary
//! budget. Execution must either meet the budget or stop with an error.

#![no_main]

use arbitrary::Arbitrary;
use emu6502::{FlatMemory, CPU};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    image: Vec<u8>,
    budget: u16,
}

fuzz_target!(|input: FuzzInput| {
    let Ok(mut memory) = FlatMemory::from_image(&input.image) else {
        return;
    };
    let mut cpu = CPU::new();
    let budget = u64::from(input.budget);

    if let Ok(consumed) = cpu.execute(&mut memory, budget) {
        assert!(consumed >= budget);
        // No instruction costs more than 7 cycles
        assert!(consumed < budget + 7);
        assert_eq!(cpu.cycles(), consumed);
    }
});
