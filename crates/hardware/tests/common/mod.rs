//! # Common Test Infrastructure
//!
//! Helpers shared by the unit tests.


pub use harness::TestContext;
