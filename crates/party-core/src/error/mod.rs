//! Error types for the domain layer

mod data_source_error;
mod domain_error;

pub use data_source_error::DataSourceError;
pub use domain_error::{DomainError, ErrorKind};
