//! WASM API for the 6502 emulator.
//!
//! Provides JavaScript-callable interfaces for loading programs, running the CPU
//! against a cycle budget and inspecting its state.

use crate::memory::MEMORY_SIZE;
use crate::opcodes::lookup;
use crate::{AddressRangeError, ExecutionError, FlatMemory, MemoryBus, CPU};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct EmulatorError {
    message: String,
}

#[wasm_bindgen]
impl EmulatorError {
    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<ExecutionError> for EmulatorError {
    fn from(err: ExecutionError) -> Self {
        EmulatorError {
            message: err.to_string(),
        }
    }
}

impl From<AddressRangeError> for EmulatorError {
    fn from(err: AddressRangeError) -> Self {
        ExecutionError::from(err).into()
    }
}

/// Decoded opcode information for front-end tooling
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct OpcodeInfo {
    mnemonic: String,
    mode: String,
    size_bytes: u8,
    cycles: u8,
}

#[wasm_bindgen]
impl OpcodeInfo {
    #[wasm_bindgen(getter)]
    pub fn mnemonic(&self) -> String {
        self.mnemonic.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> String {
        self.mode.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn size_bytes(&self) -> u8 {
        self.size_bytes
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> u8 {
        self.cycles
    }
}

/// One emulation session: a CPU and the memory it runs against.
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: CPU,
    memory: FlatMemory,
}

#[wasm_bindgen]
impl Emulator6502 {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Emulator6502 {
            cpu: CPU::new(),
            memory: FlatMemory::new(),
        }
    }

    /// Execute a single instruction, returning its cycle cost
    pub fn step(&mut self) -> Result<u32, EmulatorError> {
        let cycles = self.cpu.step(&mut self.memory)?;
        Ok(cycles as u32)
    }

    /// Execute until the budget is met and return actual cycles executed
    pub fn execute(&mut self, cycles: u32) -> Result<u32, EmulatorError> {
        let consumed = self.cpu.execute(&mut self.memory, u64::from(cycles))?;
        Ok(consumed as u32)
    }

    /// Return the CPU to its power-on state. Memory is kept.
    pub fn initialize(&mut self) {
        self.cpu.initialize();
    }

    /// Initialize, then jump through the reset vector
    pub fn reset(&mut self) -> Result<(), EmulatorError> {
        self.cpu.reset(&self.memory)?;
        Ok(())
    }

    /// Zero all memory
    pub fn clear_memory(&mut self) {
        self.memory.clear();
    }

    /// Load a program into memory and set PC
    pub fn load_program(&mut self, program: &[u8], start_addr: u16) -> Result<(), EmulatorError> {
        self.memory.load_at(start_addr, program)?;
        self.cpu.set_pc(start_addr);
        Ok(())
    }

    // Register getters

    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    /// Cycle counter as f64 (JavaScript numbers cannot hold a full u64)
    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64
    }

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    // Memory access methods

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.memory.as_slice()[addr as usize]
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) -> Result<(), EmulatorError> {
        self.memory.write_byte(u32::from(addr), value)?;
        Ok(())
    }

    /// Read a 256-byte page from memory (for efficient display)
    pub fn get_memory_page(&self, page: u8) -> js_sys::Uint8Array {
        let start = (page as usize) << 8;
        js_sys::Uint8Array::from(&self.memory.as_slice()[start..start + 256])
    }

    /// Copy of the whole address space
    pub fn memory_snapshot(&self) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(&self.memory.as_slice()[..MEMORY_SIZE])
    }

    /// Classify an opcode byte, or `undefined` if the core does not execute it
    pub fn opcode_info(&self, opcode: u8) -> Option<OpcodeInfo> {
        lookup(opcode).map(|op| OpcodeInfo {
            mnemonic: op.mnemonic.to_string(),
            mode: format!("{:?}", op.mode),
            size_bytes: op.size_bytes(),
            cycles: op.cycles,
        })
    }
}

impl Default for Emulator6502 {
    fn default() -> Self {
        Self::new()
    }
}
