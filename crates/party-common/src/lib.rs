//! # party-common
//!
//! Shared utilities including configuration, error handling, password hashing,
//! and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{
    hash_password, validate_password_strength, verify_password, PasswordRules, PasswordService,
};
pub use config::{
    AppConfig, AppSettings, ConfigError, DataConfig, Environment, LoggingConfig, UsernameConfig,
};
pub use error::{AppError, AppResult};
pub use telemetry::{try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError};
