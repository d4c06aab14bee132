//! Server configuration.
//!
//! Configuration is read from environment variables:
//!
//! - `API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `API_PORT`: Port to listen on (default: 8080)
//! - `API_REQUEST_TIMEOUT_SECS`: Per-request timeout (default: 30)
//! - `ALPS_CATALOG_PATH`: TOML repository catalog (default: none, empty registry)

use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::DEFAULT_PORT;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Default bind address
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Errors raised while reading configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}' - {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

/// API server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Maximum time a request may take before the server answers 408
    pub request_timeout: Duration,

    /// Repository catalog to expose; `None` serves an empty registry
    pub catalog_path: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: DEFAULT_HOST.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            catalog_path: None,
        }
    }
}

impl ApiConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns the value of a
    /// variable or `None` when unset. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let port = match lookup("API_PORT") {
            Some(value) => parse_value("API_PORT", &value)?,
            None => defaults.port,
        };

        let request_timeout = match lookup("API_REQUEST_TIMEOUT_SECS") {
            Some(value) => {
                let secs: u64 = parse_value("API_REQUEST_TIMEOUT_SECS", &value)?;
                if secs == 0 {
                    return Err(ConfigError::InvalidValue {
                        key: "API_REQUEST_TIMEOUT_SECS".to_string(),
                        value,
                        reason: "timeout must be at least one second".to_string(),
                    });
                }
                Duration::from_secs(secs)
            }
            None => defaults.request_timeout,
        };

        Ok(Self {
            port,
            host: lookup("API_HOST").unwrap_or(defaults.host),
            request_timeout,
            catalog_path: lookup("ALPS_CATALOG_PATH").map(PathBuf::from),
        })
    }
}

fn parse_value<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}
