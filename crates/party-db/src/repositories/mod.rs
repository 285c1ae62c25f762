//! Repository implementations
//!
//! Implement the `party-core` repository traits on top of the data sources.
//! Each call goes to the source, wraps a failure as `DomainError::DataSource`
//! and maps documents to domain models.

mod auth;
mod chat;
mod error;
mod follow;
mod media;
mod party;
mod user;

pub use auth::AuthRepositoryImpl;
pub use chat::ChatRepositoryImpl;
pub use follow::UserFollowRepositoryImpl;
pub use media::MediaRepositoryImpl;
pub use party::PartyRepositoryImpl;
pub use user::UserRepositoryImpl;
