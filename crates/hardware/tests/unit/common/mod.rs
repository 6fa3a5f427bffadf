//! Common component tests.
//!
//! Register name parsing and error formatting.

/// Register name parsing, ordering, and byte/wide relationships.
pub mod register_indexing;

/// Error display text.
pub mod error;
