//! Fuzz target for single-instruction execution.
//!
//! Builds an arbitrary CPU state and memory neighborhood, executes one
//! instruction and checks that a failure left no trace.

#![no_main]

use arbitrary::Arbitrary;
use emu6502::{FlatMemory, MemoryBus, CPU};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
    /// Where the instruction is placed; high values exercise the 0xFFFF edge
    pc: u16,
}

/// Memory regions for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instruction + operands)
    instruction_bytes: [u8; 3],
    /// Zero page contents, used as indirect pointers
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    for (i, &byte) in input.memory.zero_page.iter().enumerate() {
        let _ = memory.write_byte(i as u32, byte);
    }
    for (i, &byte) in input.memory.stack_page.iter().enumerate() {
        let _ = memory.write_byte(0x0100 + i as u32, byte);
    }
    // Instruction bytes past 0xFFFF are simply dropped
    for (i, &byte) in input.memory.instruction_bytes.iter().enumerate() {
        let _ = memory.write_byte(u32::from(input.cpu_state.pc) + i as u32, byte);
    }

    let mut cpu = CPU::new();
    cpu.set_pc(input.cpu_state.pc);
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);

    let before_cpu = cpu.state();
    let before_memory = memory.clone();

    match cpu.step(&mut memory) {
        Ok(cycles) => {
            assert!((2..=7).contains(&cycles), "cycle cost {} out of range", cycles);
            assert_eq!(cpu.cycles(), cycles);
        }
        Err(_) => {
            assert_eq!(cpu.state(), before_cpu);
            assert_eq!(memory.as_slice(), before_memory.as_slice());
        }
    }
});
