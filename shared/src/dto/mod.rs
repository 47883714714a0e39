//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the journal REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Registration, login, bearer tokens and the current user's profile
//! - [`trade`] - Trade entities, create/update/close payloads and paginated listings
//! - [`analytics`] - Dashboard summaries (trader or admin shaped) and cumulative P&L points
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /auth/login
//! Content-Type: application/x-www-form-urlencoded
//!
//! grant_type=password&username=alice%40example.com&password=secret
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "token_type": "bearer"
//! }
//! ```

pub mod analytics;
pub mod auth;
pub mod trade;

pub use analytics::*;
pub use auth::*;
pub use trade::*;
