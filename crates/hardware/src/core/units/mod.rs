//! Execution units.
//!
//! The simulated processor has a single functional unit, the 8-bit ALU.

/// Arithmetic Logic Unit for register operations.
pub mod alu;
