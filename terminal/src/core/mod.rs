//! # Core Abstractions
//!
//! Core traits, configuration and error types shared by every layer of the client.
//!
//! ## Modules
//!
//! - **[`config`]**: Environment configuration (`ClientConfig`)
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: The `JournalApi` trait that controllers depend on
//!
//! ## Dependency Injection
//!
//! Controllers take an `Arc<dyn JournalApi>`, so the HTTP client can be swapped for an in-memory
//! implementation in tests:
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use journal_terminal::core::service::JournalApi;
//!
//! // In production: the HTTP client
//! let api: Arc<dyn JournalApi> = Arc::new(ApiClient::new(&config, store)?);
//!
//! // In tests: a mock implementation
//! let api: Arc<dyn JournalApi> = Arc::new(MockJournalApi::new(Role::Trader));
//! ```

pub mod config;
pub mod error;
pub mod service;

pub use config::ClientConfig;
pub use error::{AppError, Result};
pub use service::JournalApi;
