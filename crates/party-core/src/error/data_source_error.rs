//! Errors raised by remote data sources
//!
//! Backends map their own failures into these; repositories wrap them
//! unchanged in `DomainError::DataSource`.

use thiserror::Error;

use super::domain_error::ErrorKind;

/// Remote data source errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataSourceError {
    #[error("Document not found: {collection}/{id}")]
    NotFound { collection: &'static str, id: String },

    #[error("Document already exists: {collection}/{id}")]
    AlreadyExists { collection: &'static str, id: String },

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("No signed-in account")]
    Unauthenticated,

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed document: {0}")]
    InvalidDocument(String),

    #[error("Internal backend error: {0}")]
    Internal(String),
}

impl DataSourceError {
    /// Create a "not found" error for a collection
    pub fn not_found(collection: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            collection,
            id: id.into(),
        }
    }

    /// Create an "already exists" error for a collection
    pub fn already_exists(collection: &'static str, id: impl Into<String>) -> Self {
        Self::AlreadyExists {
            collection,
            id: id.into(),
        }
    }

    /// Coarse error category
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::AlreadyExists { .. } => ErrorKind::Conflict,
            Self::InvalidCredentials | Self::Unauthenticated => ErrorKind::Unauthenticated,
            Self::PermissionDenied(_) => ErrorKind::PermissionDenied,
            Self::Unavailable(_) => ErrorKind::Unavailable,
            Self::InvalidDocument(_) | Self::Internal(_) => ErrorKind::Internal,
        }
    }
}
