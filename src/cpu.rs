//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: N, V, B, D, I, Z, C
//! - **Cycle counter**: u64 monotonically increasing cycle count
//!
//! Memory is not part of the CPU. It is borrowed for the duration of each call,
//! so one session owns exactly one CPU/memory pair and nothing is global.
//!
//! ## Execution Model
//!
//! - `step()`: Execute one instruction, returning its cycle cost
//! - `execute()`: Execute whole instructions until the cycle budget is met
//!
//! Each instruction costs 1 cycle for the opcode fetch, the addressing mode's base
//! cost, and whatever the instruction itself adds. An instruction either applies
//! all of its effects or none: on error, PC and the cycle counter are rolled back.

use crate::instructions;
use crate::memory::MemoryBus;
use crate::opcodes::lookup;
use crate::{ExecutionError, Flags, Registers};

/// Base address of the hardware stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Location of the little-endian reset vector.
pub const RESET_VECTOR: u32 = 0xFFFC;

/// Power-on values applied by [`CPU::initialize`].
///
/// # Examples
///
/// ```
/// use emu6502::{CpuConfig, CPU};
///
/// let config = CpuConfig { initial_pc: 0x0200, ..CpuConfig::default() };
/// let cpu = CPU::with_config(config);
/// assert_eq!(cpu.pc(), 0x0200);
/// assert_eq!(cpu.sp(), 0xFF);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CpuConfig {
    /// Program counter after initialization
    pub initial_pc: u16,

    /// Stack pointer after initialization
    pub initial_sp: u8,

    /// Packed status byte after initialization
    pub initial_status: u8,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            initial_pc: 0x0000,
            initial_sp: 0xFF,
            initial_status: crate::flags::UNUSED,
        }
    }
}

/// A copy of everything the CPU holds, for inspection or save states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CpuState {
    pub registers: Registers,
    pub flags: Flags,
    pub pc: u16,
    pub sp: u8,
    pub cycles: u64,
}

/// 6502 CPU state and execution context.
///
/// # Examples
///
/// ```
/// use emu6502::{CPU, FlatMemory};
///
/// let mut memory = FlatMemory::new();
/// // LDA #$42 ; STA $00
/// memory.load(&[0xA9, 0x42, 0x85, 0x00]).unwrap();
///
/// let mut cpu = CPU::new();
/// let cycles = cpu.execute(&mut memory, 5).unwrap();
///
/// assert_eq!(cycles, 5);
/// assert_eq!(cpu.a(), 0x42);
/// assert_eq!(cpu.pc(), 0x0004);
/// ```
#[derive(Debug, Clone)]
pub struct CPU {
    pub(crate) registers: Registers,

    pub(crate) flags: Flags,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Total CPU cycles executed
    pub(crate) cycles: u64,

    config: CpuConfig,
}

impl CPU {
    /// Creates a CPU in the default power-on state.
    pub fn new() -> Self {
        Self::with_config(CpuConfig::default())
    }

    /// Creates a CPU whose power-on state comes from `config`.
    pub fn with_config(config: CpuConfig) -> Self {
        let mut cpu = Self {
            registers: Registers::default(),
            flags: Flags::default(),
            pc: 0,
            sp: 0,
            cycles: 0,
            config,
        };
        cpu.initialize();
        cpu
    }

    /// Returns the configuration this CPU resets to.
    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    /// Resets the CPU to its power-on state. Memory is not touched.
    ///
    /// PC, SP and the status byte take their configured values; A, X, Y and
    /// the cycle counter return to zero.
    pub fn initialize(&mut self) {
        self.registers = Registers::default();
        self.flags = Flags::from_status(self.config.initial_status);
        self.pc = self.config.initial_pc;
        self.sp = self.config.initial_sp;
        self.cycles = 0;

        log::debug!(
            "CPU initialized: PC=0x{:04X} SP=0x{:02X} P=0x{:02X}",
            self.pc,
            self.sp,
            self.flags.status()
        );
    }

    /// Initializes the CPU, then loads PC from the reset vector at 0xFFFC/0xFFFD.
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.write_word(0xFFFC, 0x8000).unwrap();
    ///
    /// let mut cpu = CPU::new();
    /// cpu.reset(&memory).unwrap();
    /// assert_eq!(cpu.pc(), 0x8000);
    /// ```
    pub fn reset<M: MemoryBus>(&mut self, memory: &M) -> Result<(), ExecutionError> {
        let vector = memory.read_word(RESET_VECTOR)?;
        self.initialize();
        self.pc = vector;
        log::debug!("CPU reset through vector: PC=0x{:04X}", self.pc);
        Ok(())
    }

    /// Executes one instruction and returns the cycles it consumed.
    ///
    /// Performs the fetch-decode-execute cycle:
    /// 1. Fetch opcode byte at PC, advance PC
    /// 2. Look up the opcode in the dispatch table
    /// 3. Resolve the addressing mode (consumes operand bytes)
    /// 4. Run the instruction, which finalizes cycle accounting
    ///
    /// # Errors
    ///
    /// - `UnknownOpcode` if the byte at PC has no table entry
    /// - `AddressRange` if an effective address falls outside memory
    ///
    /// Either way PC and the cycle counter are left as they were before the call.
    pub fn step<M: MemoryBus>(&mut self, memory: &mut M) -> Result<u64, ExecutionError> {
        let start_pc = self.pc;
        let start_cycles = self.cycles;

        match self.step_inner(memory) {
            Ok(()) => Ok(self.cycles - start_cycles),
            Err(err) => {
                self.pc = start_pc;
                self.cycles = start_cycles;
                Err(err)
            }
        }
    }

    fn step_inner<M: MemoryBus>(&mut self, memory: &mut M) -> Result<(), ExecutionError> {
        let address = self.pc;
        let byte = self.fetch_byte(memory)?;
        let opcode = lookup(byte).ok_or(ExecutionError::UnknownOpcode {
            opcode: byte,
            address,
        })?;

        let resolved = self.resolve(memory, opcode.mode)?;
        let start_cycles = self.cycles;
        self.cycles += 1 + u64::from(resolved.cycles);

        instructions::execute(self, memory, opcode, resolved)?;

        log::trace!(
            "{:04X}  {:02X}  {} {:?}  A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X}  +{}",
            address,
            byte,
            opcode.mnemonic,
            opcode.mode,
            self.registers.a,
            self.registers.x,
            self.registers.y,
            self.flags.status(),
            self.sp,
            self.cycles - start_cycles
        );
        Ok(())
    }

    /// Runs whole instructions until at least `cycle_budget` cycles have been consumed.
    ///
    /// Returns the cycles consumed by this call. This is never less than the
    /// budget and overshoots by at most the cost of the last instruction, since
    /// instructions are never split. A zero budget executes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::{CPU, FlatMemory};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.load(&[0xEA; 16]).unwrap(); // NOPs, 2 cycles each
    ///
    /// let mut cpu = CPU::new();
    /// assert_eq!(cpu.execute(&mut memory, 5).unwrap(), 6);
    /// assert_eq!(cpu.pc(), 0x0003);
    /// ```
    pub fn execute<M: MemoryBus>(
        &mut self,
        memory: &mut M,
        cycle_budget: u64,
    ) -> Result<u64, ExecutionError> {
        let mut consumed = 0;

        while consumed < cycle_budget {
            match self.step(memory) {
                Ok(cycles) => consumed += cycles,
                Err(err) => {
                    log::warn!(
                        "execution stopped after {} cycles at PC=0x{:04X}: {}",
                        consumed,
                        self.pc,
                        err
                    );
                    return Err(err);
                }
            }
        }

        log::debug!(
            "executed {} cycles (budget {}), PC=0x{:04X}",
            consumed,
            cycle_budget,
            self.pc
        );
        Ok(consumed)
    }

    // ========== Stack Helpers ==========

    /// Writes to 0x0100 + SP, then decrements SP.
    pub(crate) fn push<M: MemoryBus>(&mut self, memory: &mut M, value: u8) -> Result<(), ExecutionError> {
        memory.write_byte(u32::from(STACK_BASE + u16::from(self.sp)), value)?;
        self.sp = self.sp.wrapping_sub(1);
        Ok(())
    }

    /// Increments SP, then reads from 0x0100 + SP.
    pub(crate) fn pull<M: MemoryBus>(&mut self, memory: &M) -> Result<u8, ExecutionError> {
        self.sp = self.sp.wrapping_add(1);
        Ok(memory.read_byte(u32::from(STACK_BASE + u16::from(self.sp)))?)
    }

    // ========== State Snapshot ==========

    /// Captures the full CPU state.
    pub fn state(&self) -> CpuState {
        CpuState {
            registers: self.registers,
            flags: self.flags,
            pc: self.pc,
            sp: self.sp,
            cycles: self.cycles,
        }
    }

    /// Restores a previously captured state.
    pub fn restore(&mut self, state: &CpuState) {
        self.registers = state.registers;
        self.flags = state.flags;
        self.pc = state.pc;
        self.sp = state.sp;
        self.cycles = state.cycles;
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.registers.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.registers.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.registers.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the register file.
    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    /// Returns the status flags.
    pub fn flags(&self) -> &Flags {
        &self.flags
    }

    /// Returns the status register as a packed byte (NV-BDIZC, bit 5 always 1).
    pub fn status(&self) -> u8 {
        self.flags.status()
    }

    /// Returns the total number of CPU cycles executed since initialization.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    // ========== Setters (test harnesses, debuggers) ==========

    pub fn set_a(&mut self, value: u8) {
        self.registers.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.registers.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.registers.y = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    pub fn set_status(&mut self, value: u8) {
        self.flags.set_status(value);
    }

    /// Mutable access to individual flags.
    pub fn flags_mut(&mut self) -> &mut Flags {
        &mut self.flags
    }
}

impl Default for CPU {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FlatMemory, MemoryBus};

    #[test]
    fn test_cpu_initialization() {
        let cpu = CPU::new();

        assert_eq!(cpu.pc(), 0x0000);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.x(), 0x00);
        assert_eq!(cpu.y(), 0x00);
        assert_eq!(cpu.cycles(), 0);
        assert_eq!(cpu.status(), 0b0010_0000);
    }

    #[test]
    fn test_initialize_keeps_memory() {
        let mut memory = FlatMemory::new();
        memory.load(&[0xA9, 0x07]).unwrap();

        let mut cpu = CPU::new();
        cpu.execute(&mut memory, 2).unwrap();
        assert_eq!(cpu.pc(), 0x0002);

        cpu.initialize();
        assert_eq!(cpu.pc(), 0x0000);
        assert_eq!(cpu.cycles(), 0);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(memory.read_byte(0x0001).unwrap(), 0x07);
    }

    #[test]
    fn test_reset_vector() {
        let mut memory = FlatMemory::new();
        memory.write_word(0xFFFC, 0xC000).unwrap();

        let mut cpu = CPU::new();
        cpu.set_a(0x55);
        cpu.reset(&memory).unwrap();

        assert_eq!(cpu.pc(), 0xC000);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.sp(), 0xFF);
    }

    #[test]
    fn test_step_returns_instruction_cost() {
        let mut memory = FlatMemory::new();
        memory.load(&[0xEA]).unwrap();

        let mut cpu = CPU::new();
        assert_eq!(cpu.step(&mut memory).unwrap(), 2);
        assert_eq!(cpu.pc(), 0x0001);
    }

    #[test]
    fn test_unknown_opcode_reports_address() {
        let mut memory = FlatMemory::new();
        memory.load(&[0xEA, 0x02]).unwrap();

        let mut cpu = CPU::new();
        let err = cpu.execute(&mut memory, 10).unwrap_err();

        assert_eq!(
            err,
            ExecutionError::UnknownOpcode {
                opcode: 0x02,
                address: 0x0001
            }
        );
        // NOP completed, failing fetch rolled back
        assert_eq!(cpu.pc(), 0x0001);
        assert_eq!(cpu.cycles(), 2);
    }

    #[test]
    fn test_failed_instruction_has_no_effect() {
        let mut memory = FlatMemory::new();
        // STA $FFFF,X with X = 1 → 0x10000
        memory.load(&[0x9D, 0xFF, 0xFF]).unwrap();

        let mut cpu = CPU::new();
        cpu.set_x(0x01);
        cpu.set_a(0x42);
        let before = cpu.state();

        assert!(matches!(
            cpu.step(&mut memory),
            Err(ExecutionError::AddressRange(_))
        ));
        assert_eq!(cpu.state(), before);
    }

    #[test]
    fn test_zero_budget_executes_nothing() {
        let mut memory = FlatMemory::new();
        let mut cpu = CPU::new();
        assert_eq!(cpu.execute(&mut memory, 0).unwrap(), 0);
        assert_eq!(cpu.pc(), 0x0000);
    }

    #[test]
    fn test_state_restore() {
        let mut cpu = CPU::new();
        cpu.set_a(0x12);
        cpu.set_pc(0x3000);
        let saved = cpu.state();

        cpu.initialize();
        cpu.restore(&saved);
        assert_eq!(cpu.a(), 0x12);
        assert_eq!(cpu.pc(), 0x3000);
    }

    #[test]
    fn test_push_pull_wraps_stack_pointer() {
        let mut memory = FlatMemory::new();
        let mut cpu = CPU::new();
        cpu.set_sp(0x00);

        cpu.push(&mut memory, 0xAB).unwrap();
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(memory.read_byte(0x0100).unwrap(), 0xAB);

        assert_eq!(cpu.pull(&memory).unwrap(), 0xAB);
        assert_eq!(cpu.sp(), 0x00);
    }
}
