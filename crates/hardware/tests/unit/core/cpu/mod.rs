//! CPU execution tests.

/// MOV/ADD/SUB semantics against the register file.
pub mod execution;
