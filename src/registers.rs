//! # Registers
//!
//! The accumulator and the two index registers. The stack pointer lives on the
//! CPU itself but can be named through [`Register::SP`] for transfers.

/// Accumulator (A) and index registers (X, Y).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Registers {
    /// Accumulator register
    pub a: u8,

    /// X index register
    pub x: u8,

    /// Y index register
    pub y: u8,
}

/// Names an 8-bit register operand of a load, store or transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    A,
    X,
    Y,
    /// Stack pointer
    SP,
}
