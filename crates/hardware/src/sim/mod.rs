//! Simulation sessions, programs, and program loading.
//!
//! Provides the [`Simulation`] state machine, the [`Program`] it executes, and utilities for
//! reading and writing program text files.

/// Program text parsing and file persistence.
pub mod loader;

/// Ordered instruction storage.
pub mod program;

/// Top-level simulation session.
pub mod simulator;

pub use program::Program;
pub use simulator::{ExecutionState, Simulation, StepResult};
