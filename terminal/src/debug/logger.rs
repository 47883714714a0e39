//! File-based logging initialization

use super::config::{LogConfig, LogFormat, DEFAULT_LOG_FILTER, LOG_FILE_PREFIX};
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system
///
/// Sets up file-based logging with:
/// - Daily log rotation under `JOURNAL_LOG_DIR` (default `logs/`)
/// - Text or JSON lines, per `JOURNAL_LOG_FORMAT`
/// - Non-blocking writes
/// - Panic hook integration for crash logging
///
/// Stdout stays reserved for command output. Keep the returned guard alive until exit so
/// buffered lines are flushed; `None` means logging is disabled (the directory could not be
/// created or a subscriber was already installed).
pub fn init() -> Option<WorkerGuard> {
    init_with(&LogConfig::from_env())
}

pub fn init_with(config: &LogConfig) -> Option<WorkerGuard> {
    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let registry = tracing_subscriber::registry().with(env_filter);
    let installed = match config.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_target(true)
                    .with_current_span(true),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_writer(writer)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_ansi(false), // No ANSI codes in log files
            )
            .try_init(),
    };

    if installed.is_err() {
        return None;
    }

    tracing::info!(
        log_file = %config.log_file().display(),
        log_level = %config.log_level,
        format = ?config.format,
        "Logging initialized"
    );

    setup_panic_hook();

    Some(guard)
}

/// Log panics before handing over to the default hook
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        let backtrace = std::backtrace::Backtrace::force_capture();
        tracing::error!(
            location = %location,
            message = %message,
            backtrace = %backtrace,
            "Application panic"
        );

        default_panic(panic_info);
    }));
}
