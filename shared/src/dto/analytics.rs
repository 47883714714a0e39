//! Dashboard analytics: role-shaped summaries and the cumulative P&L series.

use serde::{Deserialize, Serialize};

/// One point of the cumulative P&L chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartPoint {
    pub date: String,
    pub pnl: f64,
    pub cumulative_pnl: f64,
}

/// Envelope of `GET /analytics/chart`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChartResponse {
    #[serde(default)]
    pub data: Vec<ChartPoint>,
}

/// Best performing symbol of a trader
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BestAsset {
    pub symbol: String,
    pub total_pnl: f64,
}

/// A user's realized performance, used for the admin gainer/loser cards
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserPerformance {
    pub username: String,
    pub email: String,
    pub total_pnl: f64,
}

/// Summary served to traders
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TraderSummary {
    pub net_realized_pnl: f64,
    pub profit_factor: f64,
    /// Percentage, 0-100
    pub win_rate: f64,
    pub total_closed_trades: u64,
    pub active_positions: u64,
    pub avg_win: f64,
    pub avg_loss: f64,
    #[serde(default)]
    pub best_asset: Option<BestAsset>,
}

/// Platform-wide summary served to admins
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminSummary {
    pub total_users: u64,
    pub total_trades: u64,
    pub active_positions: u64,
    pub total_platform_pnl: f64,
    #[serde(default)]
    pub top_gainer: Option<UserPerformance>,
    #[serde(default)]
    pub top_loser: Option<UserPerformance>,
}

/// Body of `GET /analytics/summary`.
///
/// The endpoint answers with one of two disjoint shapes depending on the caller's role. The admin
/// shape is recognised by its `total_users` field; anything else is read as a trader summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum DashboardSummary {
    Admin(AdminSummary),
    Trader(TraderSummary),
}

impl DashboardSummary {
    pub fn is_admin(&self) -> bool {
        matches!(self, DashboardSummary::Admin(_))
    }

    pub fn as_admin(&self) -> Option<&AdminSummary> {
        match self {
            DashboardSummary::Admin(summary) => Some(summary),
            DashboardSummary::Trader(_) => None,
        }
    }

    pub fn as_trader(&self) -> Option<&TraderSummary> {
        match self {
            DashboardSummary::Trader(summary) => Some(summary),
            DashboardSummary::Admin(_) => None,
        }
    }

    /// Open positions, present in both shapes
    pub fn active_positions(&self) -> u64 {
        match self {
            DashboardSummary::Admin(summary) => summary.active_positions,
            DashboardSummary::Trader(summary) => summary.active_positions,
        }
    }
}
