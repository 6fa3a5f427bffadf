//! Instruction representation.
//!
//! An [`Instruction`] is the typed form of one program line. It is built once at the
//! text boundary (see [`crate::isa::decode`]) and never re-parsed during execution.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::error::DecodeError;
use crate::common::reg::ByteRegister;

/// Operation performed by an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Copy the source into the destination.
    Mov,
    /// Saturating addition.
    Add,
    /// Saturating subtraction.
    Sub,
}

impl Operation {
    /// All operations.
    pub const ALL: [Self; 3] = [Self::Mov, Self::Add, Self::Sub];

    /// Upper-case mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Mov => "MOV",
            Self::Add => "ADD",
            Self::Sub => "SUB",
        }
    }
}

impl FromStr for Operation {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(s))
            .ok_or_else(|| DecodeError::MalformedLine(s.to_string()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Source operand of an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operand {
    /// Another byte register.
    Register(ByteRegister),
    /// An immediate value.
    Literal(u8),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Register(reg) => write!(f, "{reg}"),
            Self::Literal(val) => write!(f, "{val}"),
        }
    }
}

impl From<ByteRegister> for Operand {
    fn from(reg: ByteRegister) -> Self {
        Self::Register(reg)
    }
}

impl From<u8> for Operand {
    fn from(val: u8) -> Self {
        Self::Literal(val)
    }
}

/// A decoded `OP DEST, SRC` instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Instruction {
    /// Operation to perform.
    pub op: Operation,
    /// Register written by the instruction.
    pub dest: ByteRegister,
    /// Value read by the instruction.
    pub src: Operand,
}

impl Instruction {
    /// Builds an instruction from its parts.
    pub fn new(op: Operation, dest: ByteRegister, src: impl Into<Operand>) -> Self {
        Self {
            op,
            dest,
            src: src.into(),
        }
    }

    /// `MOV dest, src`.
    pub fn mov(dest: ByteRegister, src: impl Into<Operand>) -> Self {
        Self::new(Operation::Mov, dest, src)
    }

    /// `ADD dest, src`.
    pub fn add(dest: ByteRegister, src: impl Into<Operand>) -> Self {
        Self::new(Operation::Add, dest, src)
    }

    /// `SUB dest, src`.
    pub fn sub(dest: ByteRegister, src: impl Into<Operand>) -> Self {
        Self::new(Operation::Sub, dest, src)
    }
}

impl fmt::Display for Instruction {
    /// Formats the instruction in the canonical program-file syntax, e.g. `ADD AL, 10`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}, {}", self.op, self.dest, self.src)
    }
}

impl FromStr for Instruction {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::isa::decode::decode(s)
    }
}
