//! Core processor implementation.
//!
//! This module contains the CPU, its architectural state, and its execution units.

/// Architectural state (register file, snapshots).
pub mod arch;

/// CPU core and instruction execution.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
