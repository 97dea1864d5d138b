//! # 6502 CPU Emulator Core
//!
//! A cycle-exact NMOS 6502 execution core: a bounds-checked 64KB memory, the
//! register and flag file, an addressing-mode resolver, an immutable opcode
//! dispatch table and a cycle-budgeted fetch-decode-execute loop.
//!
//! ## Quick Start
//!
//! ```rust
//! use emu6502::{CPU, FlatMemory, MemoryBus};
//!
//! // Create 64KB flat memory and install a program at 0x0000
//! let mut memory = FlatMemory::new();
//! memory.load(&[
//!     0xA9, 0x80, // LDA #$80
//!     0x0A,       // ASL A
//!     0x85, 0x10, // STA $10
//! ]).unwrap();
//!
//! let mut cpu = CPU::new();
//! let consumed = cpu.execute(&mut memory, 7).unwrap();
//!
//! assert_eq!(consumed, 7);
//! assert_eq!(memory.read_byte(0x0010).unwrap(), 0x00);
//! assert!(cpu.flags().carry);
//! assert!(cpu.flags().zero);
//! ```
//!
//! ## Architecture
//!
//! - **Memory is borrowed per call**: the CPU holds registers, flags, PC, SP and a
//!   cycle counter; memory is owned by the caller and passed to `step`/`execute`.
//! - **Table-driven dispatch**: `OPCODE_TABLE` maps every opcode byte to an
//!   instruction and addressing mode. It is static data shared by all CPUs.
//! - **Fail, don't wrap**: addresses outside 0x0000-0xFFFF are errors, and a
//!   failed instruction leaves no partial effects behind.
//!
//! ## Modules
//!
//! - `cpu` - CPU state and execution logic
//! - `memory` - MemoryBus trait and FlatMemory
//! - `flags` - Status register
//! - `registers` - A, X, Y
//! - `opcodes` - Opcode dispatch table
//! - `addressing` - Addressing modes and the resolver

pub mod addressing;
pub mod cpu;
pub mod flags;
pub mod memory;
pub mod opcodes;
pub mod registers;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::{CpuConfig, CpuState, CPU};
pub use flags::Flags;
pub use memory::{AddressRangeError, FlatMemory, MemoryBus};
pub use opcodes::{Opcode, OPCODE_TABLE};
pub use registers::{Register, Registers};

use thiserror::Error;

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// A memory access fell outside 0x0000-0xFFFF.
    #[error(transparent)]
    AddressRange(#[from] AddressRangeError),

    /// The byte at `address` has no entry in the opcode table.
    #[error("unknown opcode 0x{opcode:02X} at 0x{address:04X}")]
    UnknownOpcode { opcode: u8, address: u16 },
}
