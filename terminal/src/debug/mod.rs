//! # Logging Infrastructure
//!
//! File-based structured logging for the `journal` client. Command output owns stdout, so every
//! diagnostic goes to a daily-rotated file instead.
//!
//! ## Usage
//!
//! ```rust,no_run
//! // Initialize at startup and keep the guard for the lifetime of the process
//! let _log_guard = journal_terminal::debug::init();
//!
//! tracing::info!(endpoint = "/trades/", rows = 20, "Fetched trades");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log filter (default `journal_terminal=info,warn`)
//! - `JOURNAL_LOG_DIR`: Log directory (default `logs/`)
//! - `JOURNAL_LOG_FORMAT`: `text` (default) or `json`

pub mod config;
pub mod logger;

pub use config::{LogConfig, LogFormat};
pub use logger::{init, init_with};
