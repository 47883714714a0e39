//! # Journal API Client Module
//!
//! HTTP client for the journal REST API.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs          - Module exports and documentation
//! ├── client.rs       - ApiClient, request pipeline and JournalApi implementation
//! ├── interceptor.rs  - Bearer credential + 401 session handling
//! ├── auth.rs         - Registration and login
//! ├── users.rs        - Current user profile
//! ├── trades.rs       - Trade listing and mutations
//! └── analytics.rs    - Summary, chart and admin top trades
//! ```
//!
//! ## Endpoints
//!
//! | Operation | Method & Path |
//! |---|---|
//! | Register | `POST /auth/register` |
//! | Login | `POST /auth/login` (form-urlencoded) |
//! | Profile | `GET /users/me` |
//! | Summary | `GET /analytics/summary` |
//! | Chart | `GET /analytics/chart` |
//! | Top trades | `GET /analytics/admin/top-trades` |
//! | List / recent trades | `GET /trades/?skip=&limit=&status=` |
//! | Get trade | `GET /trades/{id}` |
//! | Create trade | `POST /trades/` |
//! | Update trade | `PUT /trades/{id}` |
//! | Close trade | `PATCH /trades/{id}/close` |
//! | Delete trade | `DELETE /trades/{id}` |

pub mod analytics;
pub mod auth;
pub mod client;
pub mod interceptor;
pub mod trades;
pub mod users;

#[cfg(test)]
pub(crate) mod mock_server;

pub use client::ApiClient;
pub use interceptor::{AuthInterceptor, AUTH_EXEMPT_PATHS};
