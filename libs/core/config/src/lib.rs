pub mod server;
pub mod tracing;

use std::env;
use thiserror::Error;

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable '{0}' is required but not set")]
    MissingEnvVar(String),

    #[error("Failed to parse environment variable '{key}': {details}")]
    ParseError { key: String, details: String },
}

/// Application environment
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn from_env() -> Self {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        if app_env.eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Output format for log events
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event, for log aggregation
    Json,
    /// Multi-line human-readable output
    Pretty,
}

impl LogFormat {
    /// Reads `LOG_FORMAT` ("json" or "pretty", case-insensitive).
    ///
    /// Falls back to JSON in production and pretty output in development
    /// when the variable is unset.
    pub fn from_env(environment: &Environment) -> Result<Self, ConfigError> {
        match env::var("LOG_FORMAT") {
            Ok(value) if value.eq_ignore_ascii_case("json") => Ok(LogFormat::Json),
            Ok(value) if value.eq_ignore_ascii_case("pretty") => Ok(LogFormat::Pretty),
            Ok(value) => Err(ConfigError::ParseError {
                key: "LOG_FORMAT".to_string(),
                details: format!("expected 'json' or 'pretty', got '{}'", value),
            }),
            Err(_) if environment.is_production() => Ok(LogFormat::Json),
            Err(_) => Ok(LogFormat::Pretty),
        }
    }
}

/// Name and version of the running application
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
}

/// Builds an [`AppInfo`] from the Cargo metadata of the calling crate.
#[macro_export]
macro_rules! app_info {
    () => {
        $crate::AppInfo {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    };
}

/// Trait for configuration that can be loaded from environment variables
pub trait FromEnv: Sized {
    fn from_env() -> Result<Self, ConfigError>;
}

/// Helper to load and parse environment variable with a default value
pub fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Helper to load and parse environment variable or return error
pub fn env_required(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}
