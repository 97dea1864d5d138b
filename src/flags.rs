//! # Processor Status Flags
//!
//! The 6502 status register (P) held as seven named booleans, with a packed
//! byte view used by PHP/PLP.
//!
//! Bit layout (NV-BDIZC):
//! - Bit 7: N (Negative)
//! - Bit 6: V (Overflow)
//! - Bit 5: (unused, always 1)
//! - Bit 4: B (Break)
//! - Bit 3: D (Decimal)
//! - Bit 2: I (Interrupt Disable)
//! - Bit 1: Z (Zero)
//! - Bit 0: C (Carry)

pub const CARRY: u8 = 0b0000_0001;
pub const ZERO: u8 = 0b0000_0010;
pub const INTERRUPT_DISABLE: u8 = 0b0000_0100;
pub const DECIMAL: u8 = 0b0000_1000;
pub const BREAK: u8 = 0b0001_0000;
pub const UNUSED: u8 = 0b0010_0000;
pub const OVERFLOW: u8 = 0b0100_0000;
pub const NEGATIVE: u8 = 0b1000_0000;

/// The 6502 status flags.
///
/// # Examples
///
/// ```
/// use emu6502::Flags;
///
/// let mut flags = Flags::default();
/// flags.set_zero_negative(0x80);
/// assert!(!flags.zero);
/// assert!(flags.negative);
/// assert_eq!(flags.status(), 0b1010_0000);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flags {
    /// Carry flag (set on unsigned overflow/underflow)
    pub carry: bool,

    /// Zero flag (set if result is zero)
    pub zero: bool,

    /// Interrupt disable flag
    pub interrupt_disable: bool,

    /// Decimal mode flag. Only bookkept; arithmetic is always binary.
    pub decimal: bool,

    /// Break flag
    pub break_command: bool,

    /// Overflow flag (set on signed overflow)
    pub overflow: bool,

    /// Negative flag (set if bit 7 of result is 1)
    pub negative: bool,
}

impl Flags {
    /// Builds flags from a packed status byte.
    pub fn from_status(status: u8) -> Self {
        let mut flags = Self::default();
        flags.set_status(status);
        flags
    }

    /// Sets Zero iff the low 8 bits of `value` are zero.
    pub fn set_zero(&mut self, value: u16) {
        self.zero = value & 0x00FF == 0;
    }

    /// Sets Negative iff bit 7 of `value` is set.
    pub fn set_negative(&mut self, value: u16) {
        self.negative = value & 0x0080 != 0;
    }

    /// Derives both Zero and Negative from the same result byte.
    ///
    /// Every instruction that touches Z/N goes through here so the two
    /// can never disagree about which value they describe.
    pub fn set_zero_negative(&mut self, result: u8) {
        self.set_zero(u16::from(result));
        self.set_negative(u16::from(result));
    }

    /// Returns the flags packed into a byte. Bit 5 always reads as 1.
    pub fn status(&self) -> u8 {
        let mut status = UNUSED;

        if self.negative {
            status |= NEGATIVE;
        }
        if self.overflow {
            status |= OVERFLOW;
        }
        if self.break_command {
            status |= BREAK;
        }
        if self.decimal {
            status |= DECIMAL;
        }
        if self.interrupt_disable {
            status |= INTERRUPT_DISABLE;
        }
        if self.zero {
            status |= ZERO;
        }
        if self.carry {
            status |= CARRY;
        }

        status
    }

    /// Overwrites every flag from a packed byte. Bit 5 is ignored.
    pub fn set_status(&mut self, status: u8) {
        self.negative = status & NEGATIVE != 0;
        self.overflow = status & OVERFLOW != 0;
        self.break_command = status & BREAK != 0;
        self.decimal = status & DECIMAL != 0;
        self.interrupt_disable = status & INTERRUPT_DISABLE != 0;
        self.zero = status & ZERO != 0;
        self.carry = status & CARRY != 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_status_has_unused_bit() {
        assert_eq!(Flags::default().status(), 0b0010_0000);
    }

    #[test]
    fn test_zero_uses_low_byte_only() {
        let mut flags = Flags::default();
        flags.set_zero(0x0100);
        assert!(flags.zero);
        flags.set_zero(0x0101);
        assert!(!flags.zero);
    }

    #[test]
    fn test_negative_from_bit_seven() {
        let mut flags = Flags::default();
        flags.set_negative(0x7F);
        assert!(!flags.negative);
        flags.set_negative(0x80);
        assert!(flags.negative);
    }

    #[test]
    fn test_status_packing() {
        let flags = Flags {
            carry: true,
            zero: false,
            interrupt_disable: true,
            decimal: false,
            break_command: true,
            overflow: false,
            negative: true,
        };
        assert_eq!(flags.status(), 0b1011_0101);
    }

    #[test]
    fn test_status_unpacking() {
        let flags = Flags::from_status(0b0100_1010);
        assert!(flags.overflow);
        assert!(flags.decimal);
        assert!(flags.zero);
        assert!(!flags.carry);
        assert!(!flags.negative);
        assert!(!flags.break_command);
        assert!(!flags.interrupt_disable);
        // Unused bit comes back set regardless
        assert_eq!(flags.status(), 0b0110_1010);
    }

    #[test]
    fn test_status_round_trip_all_bytes() {
        for byte in 0..=255u8 {
            assert_eq!(Flags::from_status(byte).status(), byte | UNUSED);
        }
    }
}
