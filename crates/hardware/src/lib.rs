//! Register-level microprocessor simulator library.
//!
//! This crate implements a teaching simulator for a three-instruction assembly dialect
//! (`MOV`, `ADD`, `SUB`) over four 16-bit registers, each split into two 8-bit halves:
//! 1. **Core:** Byte-backed register file with derived 16-bit views, saturating ALU, execution.
//! 2. **ISA:** Typed instructions and the `OP DEST, SRC` text decoder.
//! 3. **Simulation:** Program editing, single-step and run-to-completion, snapshots, loader.
//! 4. **Support:** Configuration, statistics, and error types.
//!
//! # Example
//!
//! ```
//! use regsim_core::{Config, Simulation};
//! use regsim_core::common::ByteRegister;
//!
//! let mut sim = Simulation::new(&Config::default());
//! sim.append_line("MOV AL, 250").unwrap();
//! sim.append_line("ADD AL, 20").unwrap();
//! let _ = sim.run_to_completion();
//! assert_eq!(sim.registers().read_byte(ByteRegister::AL), 255);
//! ```

/// Common types (register names, errors).
pub mod common;
/// Simulator configuration.
pub mod config;
/// CPU core (register file, ALU, execution).
pub mod core;
/// Instruction set (instruction types, decoder).
pub mod isa;
/// Simulation sessions, programs, and the loader.
pub mod sim;
/// Execution statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// CPU type; holds the register file.
pub use crate::core::Cpu;
/// Simulation session; the entry point for front ends.
pub use crate::sim::Simulation;
