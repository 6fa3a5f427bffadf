//! Register names.
//!
//! This module defines the architectural register names of the simulated processor.
//! It provides:
//! 1. **Byte registers:** The eight addressable 8-bit registers (`AH`..`DL`).
//! 2. **Wide registers:** The four 16-bit registers (`AX`..`DX`), each a pair of byte registers.
//! 3. **Names:** A unified [`RegisterName`] covering all twelve names, parsed case-insensitively.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DecodeError;

/// Number of 8-bit registers in the register file.
pub const BYTE_REGISTER_COUNT: usize = 8;

/// Number of 16-bit registers in the register file.
pub const WIDE_REGISTER_COUNT: usize = 4;

/// One of the eight 8-bit registers.
///
/// The discriminant is the register's slot in the byte storage; each wide
/// register owns two adjacent slots, high byte first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ByteRegister {
    /// High byte of `AX`.
    AH = 0,
    /// Low byte of `AX`.
    AL = 1,
    /// High byte of `BX`.
    BH = 2,
    /// Low byte of `BX`.
    BL = 3,
    /// High byte of `CX`.
    CH = 4,
    /// Low byte of `CX`.
    CL = 5,
    /// High byte of `DX`.
    DH = 6,
    /// Low byte of `DX`.
    DL = 7,
}

impl ByteRegister {
    /// All byte registers in storage order.
    pub const ALL: [Self; BYTE_REGISTER_COUNT] = [
        Self::AH,
        Self::AL,
        Self::BH,
        Self::BL,
        Self::CH,
        Self::CL,
        Self::DH,
        Self::DL,
    ];

    /// Slot of this register in the byte storage.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The wide register this byte belongs to.
    pub const fn owner(self) -> WideRegister {
        match self {
            Self::AH | Self::AL => WideRegister::AX,
            Self::BH | Self::BL => WideRegister::BX,
            Self::CH | Self::CL => WideRegister::CX,
            Self::DH | Self::DL => WideRegister::DX,
        }
    }

    /// Returns `true` for the high half of a wide register.
    pub const fn is_high(self) -> bool {
        self.index() % 2 == 0
    }

    /// Canonical upper-case name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AH => "AH",
            Self::AL => "AL",
            Self::BH => "BH",
            Self::BL => "BL",
            Self::CH => "CH",
            Self::CL => "CL",
            Self::DH => "DH",
            Self::DL => "DL",
        }
    }
}

/// One of the four 16-bit registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WideRegister {
    /// Accumulator, `AH:AL`.
    AX,
    /// `BH:BL`.
    BX,
    /// `CH:CL`.
    CX,
    /// `DH:DL`.
    DX,
}

impl WideRegister {
    /// All wide registers in display order.
    pub const ALL: [Self; WIDE_REGISTER_COUNT] = [Self::AX, Self::BX, Self::CX, Self::DX];

    /// The byte register holding bits 15..8.
    pub const fn high(self) -> ByteRegister {
        match self {
            Self::AX => ByteRegister::AH,
            Self::BX => ByteRegister::BH,
            Self::CX => ByteRegister::CH,
            Self::DX => ByteRegister::DH,
        }
    }

    /// The byte register holding bits 7..0.
    pub const fn low(self) -> ByteRegister {
        match self {
            Self::AX => ByteRegister::AL,
            Self::BX => ByteRegister::BL,
            Self::CX => ByteRegister::CL,
            Self::DX => ByteRegister::DL,
        }
    }

    /// Canonical upper-case name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AX => "AX",
            Self::BX => "BX",
            Self::CX => "CX",
            Self::DX => "DX",
        }
    }
}

/// Any of the twelve addressable register names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RegisterName {
    /// A 16-bit register.
    Wide(WideRegister),
    /// An 8-bit register.
    Byte(ByteRegister),
}

impl RegisterName {
    /// All twelve names in display order: each wide register followed by its halves.
    pub const ALL: [Self; WIDE_REGISTER_COUNT + BYTE_REGISTER_COUNT] = [
        Self::Wide(WideRegister::AX),
        Self::Byte(ByteRegister::AH),
        Self::Byte(ByteRegister::AL),
        Self::Wide(WideRegister::BX),
        Self::Byte(ByteRegister::BH),
        Self::Byte(ByteRegister::BL),
        Self::Wide(WideRegister::CX),
        Self::Byte(ByteRegister::CH),
        Self::Byte(ByteRegister::CL),
        Self::Wide(WideRegister::DX),
        Self::Byte(ByteRegister::DH),
        Self::Byte(ByteRegister::DL),
    ];

    /// Canonical upper-case name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wide(w) => w.name(),
            Self::Byte(b) => b.name(),
        }
    }

    /// Width of the register in bits (8 or 16).
    pub const fn bits(self) -> u32 {
        match self {
            Self::Wide(_) => 16,
            Self::Byte(_) => 8,
        }
    }

    /// The byte register this name refers to, if it is one.
    pub const fn as_byte(self) -> Option<ByteRegister> {
        match self {
            Self::Byte(b) => Some(b),
            Self::Wide(_) => None,
        }
    }
}

impl From<ByteRegister> for RegisterName {
    fn from(reg: ByteRegister) -> Self {
        Self::Byte(reg)
    }
}

impl From<WideRegister> for RegisterName {
    fn from(reg: WideRegister) -> Self {
        Self::Wide(reg)
    }
}

impl FromStr for RegisterName {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| DecodeError::UnknownRegister(name.to_string()))
    }
}

impl FromStr for ByteRegister {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<RegisterName>()? {
            RegisterName::Byte(b) => Ok(b),
            RegisterName::Wide(w) => Err(DecodeError::WideOperand(w)),
        }
    }
}

impl fmt::Display for ByteRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for WideRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for RegisterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
