//! General-Purpose Register File.
//!
//! This module implements the register file of the simulated processor. It performs the following:
//! 1. **Storage:** Maintains eight 8-bit registers (`AH`..`DL`) as the only backing state.
//! 2. **Wide View:** Derives each 16-bit register (`AX`..`DX`) from its two halves on every read,
//!    so a wide value can never disagree with its bytes.
//! 3. **Debugging:** Provides a utility for dumping the complete register state.

use crate::common::error::DecodeError;
use crate::common::reg::{BYTE_REGISTER_COUNT, ByteRegister, RegisterName, WideRegister};

/// General-purpose register file.
///
/// Holds the eight byte registers. Wide registers have no storage of their own.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    bytes: [u8; BYTE_REGISTER_COUNT],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads an 8-bit register.
    #[inline]
    pub const fn read_byte(&self, reg: ByteRegister) -> u8 {
        self.bytes[reg.index()]
    }

    /// Writes an 8-bit register.
    ///
    /// The owning wide register observes the new byte on its next read.
    #[inline]
    pub const fn write_byte(&mut self, reg: ByteRegister, val: u8) {
        self.bytes[reg.index()] = val;
    }

    /// Reads a 16-bit register as `high * 256 + low`.
    #[inline]
    pub const fn read_wide(&self, reg: WideRegister) -> u16 {
        u16::from_be_bytes([self.read_byte(reg.high()), self.read_byte(reg.low())])
    }

    /// Reads any register; byte values are zero-extended.
    pub const fn read(&self, name: RegisterName) -> u16 {
        match name {
            RegisterName::Wide(w) => self.read_wide(w),
            RegisterName::Byte(b) => self.read_byte(b) as u16,
        }
    }

    /// Reads a register by its textual name.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnknownRegister`] if `name` is not one of the twelve register names.
    pub fn read_named(&self, name: &str) -> Result<u16, DecodeError> {
        Ok(self.read(name.parse()?))
    }

    /// Sets every byte register, and therefore every wide register, to zero.
    pub const fn reset_all(&mut self) {
        self.bytes = [0; BYTE_REGISTER_COUNT];
    }

    /// Dumps the contents of all registers to stdout.
    ///
    /// Displays each wide register followed by its two halves in hexadecimal.
    pub fn dump(&self) {
        for wide in WideRegister::ALL {
            println!(
                "{}={:#06x} {}={:#04x} {}={:#04x}",
                wide,
                self.read_wide(wide),
                wide.high(),
                self.read_byte(wide.high()),
                wide.low(),
                self.read_byte(wide.low())
            );
        }
    }
}
