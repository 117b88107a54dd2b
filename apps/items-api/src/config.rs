//! Configuration for Items API

use core_config::{AppInfo, FromEnv, LogFormat, app_info, env_or_default, server::ServerConfig};
use std::time::Duration;

pub use core_config::Environment;

const DEFAULT_SHUTDOWN_TIMEOUT_SECS: &str = "30";

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub log_format: LogFormat,
    /// How long in-flight requests may take to finish after a shutdown signal
    pub shutdown_timeout: Duration,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let log_format = LogFormat::from_env(&environment)?;
        let server = ServerConfig::from_env()?;

        let shutdown_timeout = env_or_default("SHUTDOWN_TIMEOUT_SECS", DEFAULT_SHUTDOWN_TIMEOUT_SECS)
            .parse()
            .map(Duration::from_secs)
            .map_err(|e| eyre::eyre!("Failed to parse SHUTDOWN_TIMEOUT_SECS: {}", e))?;

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            log_format,
            shutdown_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        temp_env::with_vars(
            [
                ("APP_ENV", None::<&str>),
                ("LOG_FORMAT", None),
                ("HOST", None),
                ("PORT", None),
                ("SHUTDOWN_TIMEOUT_SECS", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.app.name, "items_api");
                assert_eq!(config.environment, Environment::Development);
                assert_eq!(config.log_format, LogFormat::Pretty);
                assert_eq!(config.server.address(), "0.0.0.0:8000");
                assert_eq!(config.shutdown_timeout, Duration::from_secs(30));
            },
        );
    }

    #[test]
    fn test_config_production_logs_json() {
        temp_env::with_vars(
            [("APP_ENV", Some("production")), ("LOG_FORMAT", None)],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.log_format, LogFormat::Json);
            },
        );
    }

    #[test]
    fn test_config_rejects_bad_shutdown_timeout() {
        temp_env::with_var("SHUTDOWN_TIMEOUT_SECS", Some("soon"), || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("SHUTDOWN_TIMEOUT_SECS"));
        });
    }
}
