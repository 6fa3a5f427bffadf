//! Common types shared across the simulator.
//!
//! This module provides the fundamental building blocks used by every other component:
//! 1. **Register Names:** Strong types for the 8-bit and 16-bit register names.
//! 2. **Error Handling:** Decode, loader, and configuration error types.

/// Error types.
pub mod error;

/// Register name definitions.
pub mod reg;

pub use error::{ConfigError, DecodeError, LoaderError};
pub use reg::{ByteRegister, RegisterName, WideRegister};
