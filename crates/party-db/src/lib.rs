//! # party-db
//!
//! Data layer implementing the `party-core` repository traits.
//!
//! ## Overview
//!
//! - Document DTOs in the remote wire shape (camelCase keys, epoch millis,
//!   string enums)
//! - DTO ↔ entity mappers
//! - Data-source traits, one per collection, and an in-memory backend
//! - The signed-in user session
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use party_db::{MemoryBackend, SessionState, UserRepositoryImpl};
//! use party_core::traits::UserRepository;
//!
//! async fn example() -> Result<(), party_core::DomainError> {
//!     let backend = Arc::new(MemoryBackend::new());
//!     let users = UserRepositoryImpl::new(backend, SessionState::new());
//!
//!     let check = users.validate_username("dj_night").await?;
//!     println!("{check}");
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod repositories;
pub mod session;
pub mod sources;
pub mod stream;

// Re-export commonly used types
pub use memory::{BackendStats, MemoryBackend};
pub use repositories::{
    AuthRepositoryImpl, ChatRepositoryImpl, MediaRepositoryImpl, PartyRepositoryImpl,
    UserFollowRepositoryImpl, UserRepositoryImpl,
};
pub use session::SessionState;
pub use sources::{
    AuthDataSource, ChatDataSource, FollowDataSource, MediaDataSource, PartyDataSource,
    PartyQuery, SourceResult, UserDataSource,
};
pub use stream::watch_stream;
