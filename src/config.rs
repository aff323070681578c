//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file with environment variable
//! overrides for deployment-specific values like `PAYSTORE_API_URL`.
//!
//! # Example
//!
//! ```no_run
//! use paystore::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

/// REST API connection settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the payments admin REST API.
    ///
    /// Defaults to empty so an absent field reaches `validate()` and is
    /// reported as a structured `MissingField` rather than a parse error.
    #[serde(default)]
    pub base_url: String,
    /// Whole-request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    30_000
}

fn default_connect_timeout_ms() -> u64 {
    5_000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file, applying environment
    /// variable overrides.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&raw)
    }

    /// Parse configuration from a TOML string.
    pub fn parse_toml(raw: &str) -> Result<Self> {
        // Pick up a local .env if present; deployment-specific values
        // override the file.
        let _ = dotenvy::dotenv();

        let mut config: Config = toml::from_str(raw).map_err(ConfigError::Parse)?;
        if let Ok(url) = std::env::var("PAYSTORE_API_URL") {
            config.api.base_url = url;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.api.base_url.is_empty() {
            return Err(ConfigError::MissingField {
                field: "api.base_url",
            });
        }
        if self.api.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_ms",
                reason: "timeout must be non-zero".into(),
            });
        }
        Ok(())
    }

    /// Initialize the tracing subscriber from the logging section.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_parses_with_defaults() {
        let config = Config::parse_toml(
            r#"
            [api]
            base_url = "https://api.example.test/v1"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "https://api.example.test/v1");
        assert_eq!(config.api.timeout_ms, 30_000);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn missing_base_url_is_rejected() {
        use crate::error::Error;

        // Only run meaningfully when the env override is absent.
        if std::env::var("PAYSTORE_API_URL").is_ok() {
            return;
        }
        let err = Config::parse_toml("[api]\ntimeout_ms = 1000\n").unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::MissingField {
                field: "api.base_url"
            })
        ));
        assert!(err.to_string().contains("api.base_url"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = Config::parse_toml(
            r#"
            [api]
            base_url = "https://api.example.test/v1"
            timeout_ms = 0
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("timeout"));
    }
}
