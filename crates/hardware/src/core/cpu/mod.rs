//! CPU Core Definition.
//!
//! This module defines the `Cpu` structure, the container for all architectural state of
//! the simulated processor. It coordinates the following:
//! 1. **State Management:** Owns the register file.
//! 2. **Execution:** Applies decoded instructions through the ALU (see [`execution`]).
//! 3. **Observability:** Optional per-instruction trace output.

/// Instruction execution.
pub mod execution;

use crate::config::Config;
use crate::core::arch::gpr::RegisterFile;

/// Architectural state of the simulated processor.
#[derive(Clone, Debug, Default)]
pub struct Cpu {
    /// General-purpose registers.
    pub regs: RegisterFile,
    /// Emit an `info` event for every executed instruction.
    pub trace: bool,
}

impl Cpu {
    /// Creates a CPU with all registers zeroed.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(),
            trace: config.general.trace_instructions,
        }
    }

    /// Zeroes every register.
    pub fn reset(&mut self) {
        self.regs.reset_all();
    }
}
