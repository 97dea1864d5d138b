//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from specific
//! memory implementations, plus `FlatMemory`, a flat 64KB RAM.
//!
//! ## Design Principles
//!
//! - Every access is bounds-checked against 0x0000-0xFFFF. Out-of-range addresses
//!   fail with [`AddressRangeError`] instead of wrapping.
//! - Addresses are `u32` at this surface so that 0x10000 and above can be expressed
//!   (and rejected).
//! - Words are little-endian: low byte at `addr`, high byte at `addr + 1`.
//! - The CPU borrows memory per call; it never owns it.

use thiserror::Error;

/// Number of addressable byte cells (64KB).
pub const MEMORY_SIZE: usize = 0x1_0000;

/// Highest valid address.
pub const MAX_ADDRESS: u32 = 0xFFFF;

/// A memory access fell outside 0x0000-0xFFFF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("address 0x{address:X} is outside the memory range 0x0000-0xFFFF")]
pub struct AddressRangeError {
    /// The offending address.
    pub address: u32,
}

/// Validates an address and narrows it to 16 bits.
///
/// # Examples
///
/// ```
/// use emu6502::memory::check_address;
///
/// assert_eq!(check_address(0xFFFF), Ok(0xFFFF));
/// assert!(check_address(0x10000).is_err());
/// ```
pub fn check_address(address: u32) -> Result<u16, AddressRangeError> {
    u16::try_from(address).map_err(|_| AddressRangeError { address })
}

/// Returns true if `addr + offset` lands in a different 256-byte page than `addr`.
///
/// Only the high bytes are compared, so no range validation is done here.
///
/// # Examples
///
/// ```
/// use emu6502::memory::offset_crosses_page_boundary;
///
/// assert!(!offset_crosses_page_boundary(0x1200, 0xFF));
/// assert!(offset_crosses_page_boundary(0x12FF, 0x01));
/// assert!(offset_crosses_page_boundary(0x1200, -1));
/// ```
pub fn offset_crosses_page_boundary(addr: u32, offset: i32) -> bool {
    let destination = i64::from(addr) + i64::from(offset);
    (i64::from(addr) >> 8) != (destination >> 8)
}

/// Memory bus trait for CPU to read/write bytes.
///
/// Implementations provide the byte primitives; word access and range checks
/// on the second byte of a word come for free.
///
/// # Examples
///
/// ```
/// use emu6502::{FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.write_word(0x1234, 0xBEEF).unwrap();
/// assert_eq!(mem.read_byte(0x1234).unwrap(), 0xEF);
/// assert_eq!(mem.read_byte(0x1235).unwrap(), 0xBE);
/// assert_eq!(mem.read_word(0x1234).unwrap(), 0xBEEF);
/// assert!(mem.read_word(0xFFFF).is_err());
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use emu6502::memory::{check_address, AddressRangeError, MemoryBus};
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],  // 32KB RAM (0x0000-0x7FFF)
///     rom: [u8; 0x8000],  // 32KB ROM (0x8000-0xFFFF)
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read_byte(&self, addr: u32) -> Result<u8, AddressRangeError> {
///         let addr = check_address(addr)?;
///         Ok(if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         })
///     }
///
///     fn write_byte(&mut self, addr: u32, value: u8) -> Result<(), AddressRangeError> {
///         let addr = check_address(addr)?;
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         // Writes to ROM are silently ignored
///         Ok(())
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte, failing if `addr` is above 0xFFFF.
    fn read_byte(&self, addr: u32) -> Result<u8, AddressRangeError>;

    /// Writes a byte, failing if `addr` is above 0xFFFF.
    fn write_byte(&mut self, addr: u32, value: u8) -> Result<(), AddressRangeError>;

    /// Reads a little-endian word. Both `addr` and `addr + 1` must be in range.
    fn read_word(&self, addr: u32) -> Result<u16, AddressRangeError> {
        let high_addr = addr.checked_add(1).ok_or(AddressRangeError { address: addr })?;
        check_address(addr)?;
        check_address(high_addr)?;

        let low = self.read_byte(addr)?;
        let high = self.read_byte(high_addr)?;
        Ok(u16::from_le_bytes([low, high]))
    }

    /// Writes a little-endian word. Both `addr` and `addr + 1` must be in range;
    /// nothing is written if either is not.
    fn write_word(&mut self, addr: u32, value: u16) -> Result<(), AddressRangeError> {
        let high_addr = addr.checked_add(1).ok_or(AddressRangeError { address: addr })?;
        check_address(addr)?;
        check_address(high_addr)?;

        let [low, high] = value.to_le_bytes();
        self.write_byte(addr, low)?;
        self.write_byte(high_addr, high)
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses (0x0000-0xFFFF) are mapped to a single contiguous RAM array,
/// zero-filled on creation.
///
/// # Examples
///
/// ```
/// use emu6502::{FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.load(&[0xA9, 0x42]).unwrap(); // LDA #$42 at 0x0000
/// assert_eq!(memory.read_byte(0x0001).unwrap(), 0x42);
///
/// memory.clear();
/// assert_eq!(memory.read_byte(0x0001).unwrap(), 0x00);
/// ```
#[derive(Clone)]
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; MEMORY_SIZE]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; MEMORY_SIZE]),
        }
    }

    /// Creates memory pre-loaded with `image` at 0x0000.
    pub fn from_image(image: &[u8]) -> Result<Self, AddressRangeError> {
        let mut memory = Self::new();
        memory.load(image)?;
        Ok(memory)
    }

    /// Sets every byte to 0x00.
    pub fn clear(&mut self) {
        self.data.fill(0x00);
    }

    /// Installs `image` starting at 0x0000.
    ///
    /// Bytes past the end of `image` keep their previous contents. An image
    /// larger than 64KB is rejected and memory is left unchanged.
    pub fn load(&mut self, image: &[u8]) -> Result<(), AddressRangeError> {
        self.load_at(0x0000, image)
    }

    /// Installs `bytes` starting at `origin`.
    ///
    /// Fails without writing anything if the last byte would land above 0xFFFF.
    pub fn load_at(&mut self, origin: u16, bytes: &[u8]) -> Result<(), AddressRangeError> {
        let start = origin as usize;
        let end = start + bytes.len();
        if end > MEMORY_SIZE {
            return Err(AddressRangeError {
                address: u32::try_from(end - 1).unwrap_or(u32::MAX),
            });
        }

        self.data[start..end].copy_from_slice(bytes);
        log::debug!(
            "loaded {} bytes at 0x{:04X}-0x{:04X}",
            bytes.len(),
            origin,
            end.saturating_sub(1)
        );
        Ok(())
    }

    /// Borrows the whole address space.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FlatMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatMemory")
            .field("size", &MEMORY_SIZE)
            .finish_non_exhaustive()
    }
}

impl MemoryBus for FlatMemory {
    fn read_byte(&self, addr: u32) -> Result<u8, AddressRangeError> {
        let addr = check_address(addr)?;
        Ok(self.data[addr as usize])
    }

    fn write_byte(&mut self, addr: u32, value: u8) -> Result<(), AddressRangeError> {
        let addr = check_address(addr)?;
        self.data[addr as usize] = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_memory_read_write() {
        let mut mem = FlatMemory::new();

        // Initially all zeros
        assert_eq!(mem.read_byte(0x0000).unwrap(), 0x00);
        assert_eq!(mem.read_byte(0xFFFF).unwrap(), 0x00);

        mem.write_byte(0x1234, 0x42).unwrap();
        assert_eq!(mem.read_byte(0x1234).unwrap(), 0x42);

        // Neighbours untouched
        assert_eq!(mem.read_byte(0x1233).unwrap(), 0x00);
        assert_eq!(mem.read_byte(0x1235).unwrap(), 0x00);
    }

    #[test]
    fn test_out_of_range_byte_access() {
        let mut mem = FlatMemory::new();

        assert_eq!(
            mem.read_byte(0x10000),
            Err(AddressRangeError { address: 0x10000 })
        );
        assert_eq!(
            mem.write_byte(0x10000, 0x01),
            Err(AddressRangeError { address: 0x10000 })
        );
        assert!(mem.read_byte(u32::MAX).is_err());
    }

    #[test]
    fn test_word_little_endian() {
        let mut mem = FlatMemory::new();

        mem.write_word(0x0200, 0x1234).unwrap();
        assert_eq!(mem.read_byte(0x0200).unwrap(), 0x34);
        assert_eq!(mem.read_byte(0x0201).unwrap(), 0x12);
        assert_eq!(mem.read_word(0x0200).unwrap(), 0x1234);

        mem.write_word(0xFFFE, 0xABCD).unwrap();
        assert_eq!(mem.read_word(0xFFFE).unwrap(), 0xABCD);
    }

    #[test]
    fn test_word_at_last_address_fails() {
        let mut mem = FlatMemory::new();
        mem.write_byte(0xFFFF, 0x77).unwrap();

        assert_eq!(
            mem.read_word(0xFFFF),
            Err(AddressRangeError { address: 0x10000 })
        );
        assert!(mem.write_word(0xFFFF, 0x1234).is_err());
        // Failed word write leaves the low byte alone
        assert_eq!(mem.read_byte(0xFFFF).unwrap(), 0x77);
        assert!(mem.read_word(u32::MAX).is_err());
    }

    #[test]
    fn test_clear() {
        let mut mem = FlatMemory::new();
        mem.write_byte(0x8000, 0xEA).unwrap();
        mem.clear();
        assert!(mem.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_load_short_image_keeps_tail() {
        let mut mem = FlatMemory::new();
        mem.write_byte(0x0003, 0x99).unwrap();

        mem.load(&[0x01, 0x02, 0x03]).unwrap();

        assert_eq!(mem.read_byte(0x0000).unwrap(), 0x01);
        assert_eq!(mem.read_byte(0x0002).unwrap(), 0x03);
        assert_eq!(mem.read_byte(0x0003).unwrap(), 0x99);
    }

    #[test]
    fn test_load_full_and_oversized_image() {
        let mut mem = FlatMemory::new();
        let image = vec![0xAA; MEMORY_SIZE];
        mem.load(&image).unwrap();
        assert_eq!(mem.read_byte(0xFFFF).unwrap(), 0xAA);

        let too_big = vec![0x55; MEMORY_SIZE + 1];
        assert_eq!(
            mem.load(&too_big),
            Err(AddressRangeError { address: 0x10000 })
        );
        // Unchanged
        assert_eq!(mem.read_byte(0x0000).unwrap(), 0xAA);
    }

    #[test]
    fn test_load_at_origin() {
        let mut mem = FlatMemory::new();
        mem.load_at(0xFFFE, &[0x00, 0x80]).unwrap();
        assert_eq!(mem.read_word(0xFFFE).unwrap(), 0x8000);

        assert!(mem.load_at(0xFFFF, &[0x01, 0x02]).is_err());
        assert_eq!(mem.read_byte(0xFFFF).unwrap(), 0x80);
    }

    #[test]
    fn test_page_boundary() {
        assert!(!offset_crosses_page_boundary(0x00FE, 1));
        assert!(offset_crosses_page_boundary(0x00FF, 1));
        assert!(offset_crosses_page_boundary(0x0100, -1));
        assert!(!offset_crosses_page_boundary(0x01FF, -0xFF));
        assert!(offset_crosses_page_boundary(0xFFFF, 1));
    }
}
