//! Test Utilities Crate
//!
//! Shared test infrastructure for the car insurance test suite.
//!
//! # Modules
//!
//! - `builders`: Builder patterns for test data construction
//! - `fixtures`: Pre-seeded stores with a pinned clock

pub mod builders;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;
