//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 8-bit ALU used by the execution engine. Every result is
//! already in register range; `ADD` and `SUB` saturate instead of wrapping.
//!
//! - [`arithmetic`]: saturating add and sub

/// Saturating 8-bit arithmetic.
pub mod arithmetic;

use serde::Serialize;

use crate::isa::instruction::Operation;

/// Output of one ALU operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AluResult {
    /// Value to write back to the destination register.
    pub value: u8,
    /// `true` if the exact result fell outside `0..=255` and was clamped.
    pub saturated: bool,
}

/// Arithmetic Logic Unit for 8-bit register operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The operation to perform.
    /// * `a`  - Current destination value.
    /// * `b`  - Source operand value.
    ///
    /// # Examples
    ///
    /// ```
    /// use regsim_core::core::units::alu::Alu;
    /// use regsim_core::isa::Operation;
    ///
    /// assert_eq!(Alu::execute(Operation::Add, 250, 20).value, 255);
    /// assert_eq!(Alu::execute(Operation::Sub, 5, 10).value, 0);
    /// assert_eq!(Alu::execute(Operation::Mov, 5, 10).value, 10);
    /// ```
    pub const fn execute(op: Operation, a: u8, b: u8) -> AluResult {
        let (value, saturated) = match op {
            Operation::Mov => (b, false),
            Operation::Add => arithmetic::add(a, b),
            Operation::Sub => arithmetic::sub(a, b),
        };
        AluResult { value, saturated }
    }
}
