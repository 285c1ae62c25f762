//! Error handling utilities for repositories

use tracing::warn;

use party_core::{DataSourceError, DomainError};

/// Wrap a data source failure for the named operation, keeping the source
/// error unchanged
pub fn source_error(operation: &'static str) -> impl FnOnce(DataSourceError) -> DomainError {
    move |e| {
        warn!(operation, error = %e, "Data source call failed");
        DomainError::data_source(operation, e)
    }
}

/// Create a "user not found" error
pub fn user_not_found(id: &str) -> DomainError {
    DomainError::UserNotFound(id.to_string())
}

/// Create a "party not found" error
pub fn party_not_found(id: &str) -> DomainError {
    DomainError::PartyNotFound(id.to_string())
}

/// Create a "media not found" error
pub fn media_not_found(id: &str) -> DomainError {
    DomainError::MediaNotFound(id.to_string())
}

/// Create a "chat room not found" error
pub fn chat_room_not_found(id: &str) -> DomainError {
    DomainError::ChatRoomNotFound(id.to_string())
}
