use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::constants::PAGE_SIZES;
use crate::models::PageSize;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as integer: {source}")]
    ParseInt {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Web Server
    pub web_host: String,
    pub web_port: u16,

    // Blog API
    /// Used only when the session store has no base URL yet.
    pub api_base_url: Option<String>,
    pub request_timeout: Duration,

    // Session
    pub session_store_path: PathBuf,
    pub default_page_size: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            // Web Server
            web_host: env_or_default("WEB_HOST", "0.0.0.0"),
            web_port: parse_env_u16("WEB_PORT", 5001)?,

            // Blog API
            api_base_url: optional_env("API_BASE_URL"),
            request_timeout: Duration::from_secs(parse_env_u64("REQUEST_TIMEOUT_SECS", 10)?),

            // Session
            session_store_path: PathBuf::from(env_or_default(
                "SESSION_STORE_PATH",
                "./data/session.toml",
            )),
            default_page_size: parse_env_u32("DEFAULT_PAGE_SIZE", 10)?,
        })
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                name: "REQUEST_TIMEOUT_SECS".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if !PAGE_SIZES.contains(&self.default_page_size) {
            return Err(ConfigError::InvalidValue {
                name: "DEFAULT_PAGE_SIZE".to_string(),
                message: format!("must be one of {PAGE_SIZES:?}"),
            });
        }
        if let Some(url) = &self.api_base_url {
            if let Err(e) = url::Url::parse(url) {
                return Err(ConfigError::InvalidValue {
                    name: "API_BASE_URL".to_string(),
                    message: e.to_string(),
                });
            }
        }
        Ok(())
    }

    /// The configured default page size, falling back to the built-in one.
    #[must_use]
    pub fn page_size(&self) -> PageSize {
        PageSize::try_from(self.default_page_size).unwrap_or_default()
    }
}

fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_u32(name: &str, default: u32) -> Result<u32, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_u16(name: &str, default: u16) -> Result<u16, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}
