//! Instruction Set Architecture (ISA) Definitions.
//!
//! The dialect has three two-operand instructions, `MOV`, `ADD`, and `SUB`, each writing an
//! 8-bit destination register from an 8-bit register or an immediate literal.

/// Text decoding of program lines.
pub mod decode;

/// Typed instruction representation.
pub mod instruction;

pub use decode::decode;
pub use instruction::{Instruction, Operand, Operation};
