//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file).

use party_core::UsernamePolicy;
use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub logging: LoggingConfig,
    pub data: DataConfig,
    pub username: UsernameConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Log output settings
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    pub level: String,
    pub json: bool,
}

/// Data layer settings
#[derive(Debug, Clone)]
pub struct DataConfig {
    /// Populate the in-memory backend with mock data at startup
    pub seed_mock_data: bool,
    pub default_page_size: usize,
    pub chat_history_limit: usize,
}

/// Username rules
#[derive(Debug, Clone)]
pub struct UsernameConfig {
    pub min_length: usize,
    pub max_length: usize,
    /// Replaces the built-in reserved list when set
    pub reserved: Option<Vec<String>>,
    pub fail_open_on_lookup_error: bool,
}

impl UsernameConfig {
    /// Build the domain policy from these settings
    #[must_use]
    pub fn policy(&self) -> UsernamePolicy {
        let policy = UsernamePolicy::new(self.min_length, self.max_length)
            .with_fail_open(self.fail_open_on_lookup_error);
        match &self.reserved {
            Some(words) => policy.with_reserved(words),
            None => policy,
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "party-gallery".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_page_size() -> usize {
    20
}

fn default_chat_history_limit() -> usize {
    50
}

fn default_username_min_length() -> usize {
    3
}

fn default_username_max_length() -> usize {
    30
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable is set to an unparsable value
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// # Errors
    /// Returns an error if a key holds an unparsable value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = match lookup("APP_ENV") {
            Some(raw) => Environment::parse(&raw)
                .ok_or(ConfigError::InvalidValue("APP_ENV", raw))?,
            None => Environment::default(),
        };

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env,
            },
            logging: LoggingConfig {
                level: lookup("LOG_LEVEL").unwrap_or_else(default_log_level),
                json: parse_or(&lookup, "LOG_JSON", env.is_production())?,
            },
            data: DataConfig {
                seed_mock_data: parse_or(&lookup, "SEED_MOCK_DATA", env.is_development())?,
                default_page_size: parse_or(&lookup, "DEFAULT_PAGE_SIZE", default_page_size())?,
                chat_history_limit: parse_or(
                    &lookup,
                    "CHAT_HISTORY_LIMIT",
                    default_chat_history_limit(),
                )?,
            },
            username: UsernameConfig {
                min_length: parse_or(&lookup, "USERNAME_MIN_LENGTH", default_username_min_length())?,
                max_length: parse_or(&lookup, "USERNAME_MAX_LENGTH", default_username_max_length())?,
                reserved: lookup("USERNAME_RESERVED")
                    .map(|s| s.split(',').map(str::trim).map(String::from).collect()),
                fail_open_on_lookup_error: parse_or(&lookup, "USERNAME_FAIL_OPEN", false)?,
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => {
            let parsed = raw.trim().parse();
            parsed.map_err(|_| ConfigError::InvalidValue(key, raw))
        }
        None => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
