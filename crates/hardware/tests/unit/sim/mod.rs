//! # Simulation Tests
//!
//! Program editing, the step/run state machine, and program files.

/// Program text parsing and file round trips.
pub mod loader;

/// Stack-like program storage.
pub mod program;
