//! Architectural state.
//!
//! This module contains the programmer-visible state of the simulated processor:
//! 1. **GPRs:** The byte-backed register file with its derived 16-bit view.
//! 2. **Snapshots:** Detached, display-formatted copies of the register file.

/// General-Purpose Register file implementation.
pub mod gpr;

/// Display-formatted register snapshots.
pub mod snapshot;
