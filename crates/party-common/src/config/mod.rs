//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, DataConfig, Environment, LoggingConfig, UsernameConfig,
};
