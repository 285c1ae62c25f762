//! Integration test utilities for the Party Gallery data layer
//!
//! Tests run against the in-memory backend through the same `AppContext`
//! the seeder uses.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
