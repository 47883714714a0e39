//! # Trading Journal Client - Library Root
//!
//! A command-line client for a trading-journal REST API. Traders record positions, close them
//! (the server computes the realized P&L) and review a role-shaped dashboard; admins see
//! platform-wide aggregates instead.
//!
//! This library crate contains all modules used by the binary crate (`main.rs`).
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              journal-terminal (this crate)             │
//! ├────────────────────────────────────────────────────────┤
//! │  cli        - clap commands, output + exit status      │
//! │  ui         - comfy-table renderers                    │
//! │  app        - controllers, navigation, session events  │
//! │  services   - ApiClient, interceptor, credential store │
//! │  core       - config, errors, JournalApi trait         │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ HTTP/JSON, bearer credential
//!          ▼
//! ┌─────────────────┐
//! │  Journal API    │
//! └─────────────────┘
//! ```
//!
//! ## Module Dependency Graph
//!
//! ```text
//! main.rs
//!   │
//!   └── cli
//!       ├── app (App, controllers, Screen guards)
//!       │   └── services::api (HTTP requests)
//!       │       └── services::session (credential store)
//!       └── ui (rendering)
//! ```
//!
//! ## Core Concepts
//!
//! ### Re-fetch after write
//!
//! Summary, chart and rankings are computed server-side. After any successful write the
//! dashboard reloads all of them, and the journal reloads its current page.
//!
//! ### Session events
//!
//! A 401 from any endpoint except login and registration clears the stored credential and
//! publishes `AppEvent::SessionExpired` on an `async_channel`; the app then moves to the login
//! screen.

pub mod app;
pub mod cli;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::{App, AppEvent, Screen};
pub use core::{AppError, Result};
