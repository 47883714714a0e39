//! # Common Error Types
//!
//! Consolidated error handling for the journal client.
//!
//! ## Error Categories
//!
//! Errors are categorized by their source:
//!
//! - **Network**: The API could not be reached (connection refused, DNS, timeout)
//! - **Unauthorized**: The API rejected the bearer credential (HTTP 401)
//! - **Api**: Any other non-success response; carries the server's `detail` verbatim when present
//!   (validation failures, missing or foreign trades, closing an already closed trade)
//! - **Parse**: A success response whose body did not match the expected shape
//! - **Storage**: The persistent credential store could not be read or written
//! - **Validation**: Client-side form validation failed before any request was sent
//! - **Config**: Invalid environment configuration
//!
//! ## Surfacing Errors
//!
//! Resource services return [`Result`] and never swallow errors. Controllers catch them at the
//! action boundary and keep a human-readable message via [`AppError::user_message`]:
//!
//! ```rust
//! use journal_terminal::core::error::AppError;
//!
//! let err = AppError::Api { status: 400, detail: Some("Trade is already closed".to_string()) };
//! assert_eq!(err.user_message("Failed to close trade."), "Trade is already closed");
//!
//! let err = AppError::Network("connection refused".to_string());
//! assert_eq!(err.user_message("Failed to close trade."), "Failed to close trade.");
//! ```

use thiserror::Error;

/// Application-wide error type for the journal client.
#[derive(Debug, Error)]
pub enum AppError {
    /// The API server could not be reached or the request did not complete.
    #[error("Network error: {0}")]
    Network(String),

    /// The API rejected the stored credential (or the login attempt).
    #[error("Unauthorized: {}", .detail.as_deref().unwrap_or("could not validate credentials"))]
    Unauthorized { detail: Option<String> },

    /// Non-success response other than 401.
    #[error("API error ({status}): {}", .detail.as_deref().unwrap_or("request failed"))]
    Api { status: u16, detail: Option<String> },

    /// Response body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Credential store I/O failure.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Input rejected before reaching the server.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Detail the server attached to a rejection, if any.
    pub fn server_detail(&self) -> Option<&str> {
        match self {
            AppError::Api { detail, .. } | AppError::Unauthorized { detail } => detail.as_deref(),
            _ => None,
        }
    }

    /// Message to show next to the form or pane that triggered the failure.
    ///
    /// Server details and client validation messages are shown verbatim; everything else falls
    /// back to the generic `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AppError::Validation(message) => message.clone(),
            other => other
                .server_detail()
                .map(str::to_string)
                .unwrap_or_else(|| fallback.to_string()),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Unauthorized { .. })
    }

    /// HTTP status that produced this error, when it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            AppError::Unauthorized { .. } => Some(401),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Parse(err.to_string())
        } else {
            AppError::Network(err.to_string())
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}
