//! Domain errors - error types for the domain layer

use thiserror::Error;

use super::data_source_error::DataSourceError;
use crate::value_objects::UsernameValidation;

/// Coarse error category shared by every repository operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    Validation,
    Unauthenticated,
    PermissionDenied,
    Unavailable,
    Internal,
}

impl ErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::Validation => "VALIDATION_ERROR",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::PermissionDenied => "PERMISSION_DENIED",
            Self::Unavailable => "UNAVAILABLE",
            Self::Internal => "INTERNAL_ERROR",
        }
    }
}

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Party not found: {0}")]
    PartyNotFound(String),

    #[error("Media not found: {0}")]
    MediaNotFound(String),

    #[error("Chat room not found: {0}")]
    ChatRoomNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    #[error("Invalid username: {0}")]
    InvalidUsername(UsernameValidation),

    #[error("Users cannot follow themselves")]
    CannotFollowSelf,

    // =========================================================================
    // Session Errors
    // =========================================================================
    #[error("Not signed in")]
    NotAuthenticated,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("{operation} failed: {source}")]
    DataSource {
        operation: &'static str,
        #[source]
        source: DataSourceError,
    },

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Wrap a data source failure for the named repository operation
    pub fn data_source(operation: &'static str, source: DataSourceError) -> Self {
        Self::DataSource { operation, source }
    }

    /// Coarse category, taken from the wrapped source for backend failures
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UserNotFound(_)
            | Self::PartyNotFound(_)
            | Self::MediaNotFound(_)
            | Self::ChatRoomNotFound(_) => ErrorKind::NotFound,

            Self::ValidationError(_)
            | Self::InvalidEmail
            | Self::WeakPassword(_)
            | Self::CannotFollowSelf => ErrorKind::Validation,

            Self::InvalidUsername(UsernameValidation::AlreadyTaken) => ErrorKind::Conflict,
            Self::InvalidUsername(_) => ErrorKind::Validation,

            Self::NotAuthenticated => ErrorKind::Unauthenticated,

            Self::DataSource { source, .. } => source.kind(),
            Self::InternalError(_) => ErrorKind::Internal,
        }
    }

    /// Get an error code string for clients
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::PartyNotFound(_) => "UNKNOWN_PARTY",
            Self::MediaNotFound(_) => "UNKNOWN_MEDIA",
            Self::ChatRoomNotFound(_) => "UNKNOWN_CHAT_ROOM",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::WeakPassword(_) => "WEAK_PASSWORD",
            Self::InvalidUsername(_) => "INVALID_USERNAME",
            Self::CannotFollowSelf => "CANNOT_FOLLOW_SELF",

            // Session
            Self::NotAuthenticated => "NOT_AUTHENTICATED",

            // Infrastructure
            Self::DataSource { source, .. } => source.kind().code(),
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// The wrapped backend error, if this failure came from a data source
    pub fn data_source_error(&self) -> Option<&DataSourceError> {
        match self {
            Self::DataSource { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        self.kind() == ErrorKind::Conflict
    }
}
