//! # Terminal Views
//!
//! Renderers turn controller state into printable text. They never fetch; the CLI loads the
//! controllers and prints what these return.
//!
//! - [`dashboard`]: stat block (trader or admin), cumulative P&L chart, top/recent trades
//! - [`trades`]: trade tables, single-trade detail and the paginated journal

pub mod dashboard;
pub mod trades;

pub use dashboard::{render_chart, render_dashboard, render_summary};
pub use trades::{render_journal, render_trade_detail, render_trade_table};

use shared::UserProfile;

/// One-line identity for `whoami`
pub fn render_profile(user: &UserProfile) -> String {
    format!("{} <{}> [{}]", user.username, user.email, user.role)
}
