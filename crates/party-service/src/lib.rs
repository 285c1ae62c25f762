//! # party-service
//!
//! Application layer: the `AppContext` dependency container and mock data
//! seeding.

pub mod context;
pub mod seed;

pub use context::{AppContext, AppContextBuilder};
pub use seed::{seed_mock_data, SeedReport, MOCK_PASSWORD};
