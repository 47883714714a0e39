//! # Dashboard Controller
//!
//! Loads everything the dashboard shows and keeps it mutually consistent.
//!
//! ## Load Sequence
//!
//! 1. Profile (the role decides which trade list to fetch)
//! 2. Summary and chart, concurrently
//! 3. Top trades for admins, the five most recent trades otherwise
//!
//! Every successful mutation re-runs the whole sequence. Summary, chart and rankings are computed
//! server-side from the full trade set, so local patching is never attempted.

use crate::app::mutations::TradeMutation;
use crate::core::error::Result;
use crate::core::service::{JournalApi, RECENT_TRADES_LIMIT};
use parking_lot::RwLock;
use shared::{ChartPoint, CloseTrade, CreateTrade, DashboardSummary, Trade, UpdateTrade, UserProfile};
use std::sync::Arc;

/// Generic message for a failed dashboard load
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load dashboard data.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Error(String),
}

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub user: Option<UserProfile>,
    /// Derived once from the profile role
    pub is_admin: bool,
    pub summary: Option<DashboardSummary>,
    pub chart: Vec<ChartPoint>,
    /// Top trades (admin) or recent trades (trader)
    pub trades: Vec<Trade>,
    pub status: LoadStatus,
    /// Inline error of the last failed write action
    pub action_error: Option<String>,
}

impl DashboardState {
    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Error(message) => Some(message),
            _ => None,
        }
    }
}

struct DashboardData {
    summary: DashboardSummary,
    chart: Vec<ChartPoint>,
    trades: Vec<Trade>,
}

pub struct DashboardController {
    api: Arc<dyn JournalApi>,
    state: Arc<RwLock<DashboardState>>,
}

impl DashboardController {
    pub fn new(api: Arc<dyn JournalApi>) -> Self {
        Self {
            api,
            state: Arc::new(RwLock::new(DashboardState::default())),
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> DashboardState {
        self.state.read().clone()
    }

    pub fn clear_action_error(&self) {
        self.state.write().action_error = None;
    }

    /// Run the load sequence. Returns `false` when any step failed.
    ///
    /// A failed profile fetch usually means the credential was rejected; the API client has then
    /// already cleared it and published the session-expired event.
    pub async fn load(&self) -> bool {
        self.state.write().status = LoadStatus::Loading;

        let user = match self.api.get_profile().await {
            Ok(user) => user,
            Err(err) => {
                tracing::warn!(error = %err, "Dashboard profile fetch failed");
                self.fail();
                return false;
            }
        };

        let is_admin = user.is_admin();
        {
            let mut state = self.state.write();
            state.user = Some(user);
            state.is_admin = is_admin;
        }

        match self.fetch_data(is_admin).await {
            Ok(data) => {
                let mut state = self.state.write();
                state.summary = Some(data.summary);
                state.chart = data.chart;
                state.trades = data.trades;
                state.status = LoadStatus::Ready;
                tracing::debug!(is_admin, trades = state.trades.len(), "Dashboard loaded");
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "Dashboard data fetch failed");
                self.fail();
                false
            }
        }
    }

    /// Explicit reload
    pub async fn refresh(&self) -> bool {
        self.load().await
    }

    async fn fetch_data(&self, is_admin: bool) -> Result<DashboardData> {
        let (summary, chart) = tokio::try_join!(self.api.get_summary(), self.api.get_chart())?;

        let trades = if is_admin {
            self.api.get_top_trades().await?
        } else {
            self.api.get_recent_trades(RECENT_TRADES_LIMIT).await?
        };

        Ok(DashboardData {
            summary,
            chart,
            trades,
        })
    }

    fn fail(&self) {
        self.state.write().status = LoadStatus::Error(LOAD_ERROR_MESSAGE.to_string());
    }

    /// Apply a mutation and reload everything on success.
    pub async fn apply(&self, mutation: TradeMutation) -> bool {
        match mutation.apply(self.api.as_ref()).await {
            Ok(()) => {
                tracing::info!(action = mutation.name(), "Trade mutation applied");
                self.clear_action_error();
                self.load().await;
                true
            }
            Err(err) => {
                tracing::warn!(action = mutation.name(), error = %err, "Trade mutation failed");
                self.state.write().action_error =
                    Some(err.user_message(mutation.fallback_message()));
                false
            }
        }
    }

    pub async fn create_trade(&self, trade: CreateTrade) -> bool {
        self.apply(TradeMutation::Create(trade)).await
    }

    pub async fn update_trade(&self, id: impl Into<String>, changes: UpdateTrade) -> bool {
        self.apply(TradeMutation::Update {
            id: id.into(),
            changes,
        })
        .await
    }

    pub async fn close_trade(&self, id: impl Into<String>, close: CloseTrade) -> bool {
        self.apply(TradeMutation::Close {
            id: id.into(),
            close,
        })
        .await
    }

    pub async fn delete_trade(&self, id: impl Into<String>) -> bool {
        self.apply(TradeMutation::Delete { id: id.into() }).await
    }
}
