//! # Client Configuration
//!
//! Configuration loaded from environment variables (and an optional `.env` file loaded by the
//! binary). Validated on startup so a misconfigured client fails before its first request.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `JOURNAL_API_URL` | `http://localhost:8000` | Base URL of the journal REST API |
//! | `JOURNAL_CREDENTIALS_FILE` | `.journal/session.json` | Persistent credential store |
//! | `JOURNAL_HTTP_TIMEOUT_SECS` | `10` | Per-request timeout |

use crate::core::error::{AppError, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_CREDENTIALS_FILE: &str = ".journal/session.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Journal client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the remote API, without trailing slash
    pub api_url: String,

    /// File holding the persisted session credential
    pub credentials_file: PathBuf,

    /// Request timeout in seconds
    ///
    /// Valid range: 1-300
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            credentials_file: PathBuf::from(DEFAULT_CREDENTIALS_FILE),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn get_env(name: &'static str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn get_env_parse<T: FromStr>(name: &'static str) -> Result<Option<T>> {
    get_env(name)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|_| AppError::Config(format!("{} has an invalid value: '{}'", name, raw)))
        })
        .transpose()
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let config = Self {
            api_url: get_env("JOURNAL_API_URL").unwrap_or(defaults.api_url),
            credentials_file: get_env("JOURNAL_CREDENTIALS_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.credentials_file),
            timeout_secs: get_env_parse("JOURNAL_HTTP_TIMEOUT_SECS")?
                .unwrap_or(defaults.timeout_secs),
        };

        Ok(config.normalized())
    }

    /// Override the API URL (used by the `--api-url` flag).
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self.normalized()
    }

    fn normalized(mut self) -> Self {
        self.api_url = self.api_url.trim().trim_end_matches('/').to_string();
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "JOURNAL_API_URL must start with http:// or https://, got '{}'",
                self.api_url
            )));
        }

        if !(1..=300).contains(&self.timeout_secs) {
            return Err(AppError::Config(
                "JOURNAL_HTTP_TIMEOUT_SECS must be between 1 and 300".to_string(),
            ));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ClientConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ClientConfig::default().with_api_url("https://journal.example.com/api/ ");
        assert_eq!(config.api_url, "https://journal.example.com/api");
    }

    #[test]
    fn test_rejects_bad_url() {
        let config = ClientConfig::default().with_api_url("ftp://journal.example.com");
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_rejects_bad_timeout() {
        let config = ClientConfig {
            timeout_secs: 0,
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ClientConfig {
            timeout_secs: 301,
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
