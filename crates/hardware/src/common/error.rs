//! Error definitions.
//!
//! This module defines the error types surfaced by the simulator. It provides:
//! 1. **Decode errors:** Rejections of malformed program lines, raised before any register is touched.
//! 2. **Loader errors:** File I/O failures and decode failures annotated with their line number.
//! 3. **Config errors:** Failures reading or deserializing a JSON configuration.
//!
//! None of these are fatal to a simulation; each is a caller-correctable input problem.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::reg::WideRegister;

/// Failure to turn a line of text into an instruction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The name is not one of the twelve register names.
    #[error("unknown register `{0}`")]
    UnknownRegister(String),

    /// The operand is neither a register nor an integer in `0..=255`.
    #[error("invalid literal `{0}`: expected an integer in 0..=255")]
    InvalidLiteral(String),

    /// Wrong token count, unknown mnemonic, or missing comma.
    #[error("malformed line `{0}`: expected `OP DEST, SRC`")]
    MalformedLine(String),

    /// A 16-bit register was named where the dialect only allows 8-bit operands.
    #[error("`{0}` is a 16-bit register; operands must be 8-bit registers")]
    WideOperand(WideRegister),
}

/// Failure to load or save a program file.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The file could not be read or written.
    #[error("could not access `{}`: {source}", path.display())]
    Io {
        /// File that was being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A line failed to decode.
    #[error("line {line}: {source}")]
    Decode {
        /// 1-based line number in the source text.
        line: usize,
        /// Underlying decode error.
        #[source]
        source: DecodeError,
    },
}

/// Failure to load a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("could not read config `{}`: {source}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The file is not a valid configuration document.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
