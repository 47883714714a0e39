//! # Trade Journal Data Transfer Objects
//!
//! This library defines the contract between the journal clients and the remote journal REST API.
//! All DTOs use `serde` for wire (de)serialization.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Registration, login form, tokens and the user profile
//!   - **[`dto::trade`]**: Trades, trade inputs, list queries and pagination
//!   - **[`dto::analytics`]**: Role-shaped dashboard summaries and the P&L chart series
//! - **[`utils`]**: Display formatting for money, percentages and identifiers
//!
//! ## Wire Format
//!
//! - Field names use **snake_case** in Rust and in JSON
//! - Optional input fields are omitted from JSON when `None`
//! - Trade sides and statuses travel as upper-case strings (`"LONG"`, `"OPEN"`)
//! - The login call is the one exception to JSON: it is `application/x-www-form-urlencoded`
//!   (see [`dto::auth::LoginForm`])
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::analytics::DashboardSummary;
//!
//! let raw = r#"{"total_users":3,"total_trades":40,"active_positions":2,"total_platform_pnl":125.5}"#;
//! let summary: DashboardSummary = serde_json::from_str(raw).unwrap();
//! assert!(summary.is_admin());
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: shared is a DTO library where all exports are public API
pub use dto::*;
pub use utils::*;
