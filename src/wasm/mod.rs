//! WebAssembly bindings for the emulator core.
//!
//! Wraps one CPU and one FlatMemory in a single JavaScript-visible session object.

pub mod api;

pub use api::Emulator6502;
