//! Logging configuration from environment variables

use std::env;
use std::path::PathBuf;

pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_LOG_FILTER: &str = "journal_terminal=info,warn";
pub const LOG_FILE_PREFIX: &str = "journal.log";

/// Output format of the log file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Directory holding the daily-rotated log files
    pub log_dir: PathBuf,
    /// `EnvFilter` directives (e.g. "journal_terminal=debug,info")
    pub log_level: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            log_level: DEFAULT_LOG_FILTER.to_string(),
            format: LogFormat::Text,
        }
    }
}

impl LogConfig {
    /// Load configuration from `JOURNAL_LOG_DIR`, `RUST_LOG` and `JOURNAL_LOG_FORMAT`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let non_empty = |name: &str| env::var(name).ok().filter(|value| !value.trim().is_empty());

        Self {
            log_dir: non_empty("JOURNAL_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level: non_empty("RUST_LOG").unwrap_or(defaults.log_level),
            format: non_empty("JOURNAL_LOG_FORMAT")
                .map(|raw| LogFormat::parse(&raw))
                .unwrap_or_default(),
        }
    }

    /// Path of today's log file is `<log_dir>/journal.log.<date>`; this is the prefix.
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_PREFIX)
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}
