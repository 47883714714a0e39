//! # Journal Controller
//!
//! Paginated trade list with an ALL/OPEN filter. Mutations refresh the current page only, since the
//! journal shows no aggregates.

use crate::app::mutations::TradeMutation;
use crate::core::service::JournalApi;
use parking_lot::RwLock;
use shared::{CloseTrade, CreateTrade, Trade, TradeQuery, TradeStatus, UpdateTrade};
use std::sync::Arc;

/// Rows per journal page
pub const PAGE_LIMIT: u32 = 20;

pub const FETCH_ERROR_MESSAGE: &str = "Failed to load trades.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TradeFilter {
    #[default]
    All,
    Open,
}

impl TradeFilter {
    /// Status query parameter; `All` sends none.
    pub fn status(&self) -> Option<TradeStatus> {
        match self {
            TradeFilter::All => None,
            TradeFilter::Open => Some(TradeStatus::Open),
        }
    }
}

#[derive(Debug, Clone)]
pub struct JournalState {
    /// 1-based
    pub page: u32,
    pub limit: u32,
    pub filter: TradeFilter,
    pub total: u64,
    pub trades: Vec<Trade>,
    pub loading: bool,
    pub error: Option<String>,
    pub action_error: Option<String>,
}

impl Default for JournalState {
    fn default() -> Self {
        Self {
            page: 1,
            limit: PAGE_LIMIT,
            filter: TradeFilter::All,
            total: 0,
            trades: Vec::new(),
            loading: false,
            error: None,
            action_error: None,
        }
    }
}

impl JournalState {
    pub fn query(&self) -> TradeQuery {
        TradeQuery::page(self.page, self.limit, self.filter.status())
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 1
    }

    pub fn has_next_page(&self) -> bool {
        (self.page as u64) * (self.limit as u64) < self.total
    }

    /// Number of pages for the current total (at least one)
    pub fn page_count(&self) -> u64 {
        let limit = self.limit.max(1) as u64;
        self.total.div_ceil(limit).max(1)
    }
}

pub struct JournalController {
    api: Arc<dyn JournalApi>,
    state: Arc<RwLock<JournalState>>,
}

impl JournalController {
    pub fn new(api: Arc<dyn JournalApi>) -> Self {
        Self {
            api,
            state: Arc::new(RwLock::new(JournalState::default())),
        }
    }

    pub fn state(&self) -> JournalState {
        self.state.read().clone()
    }

    pub fn clear_action_error(&self) {
        self.state.write().action_error = None;
    }

    /// Fetch the current page under the current filter.
    pub async fn fetch(&self) -> bool {
        let query = {
            let mut state = self.state.write();
            state.loading = true;
            state.query()
        };

        let result = self.api.list_trades(&query).await;

        let mut state = self.state.write();
        state.loading = false;
        match result {
            Ok(page) => {
                tracing::debug!(
                    skip = query.skip,
                    limit = query.limit,
                    total = page.total,
                    "Journal page loaded"
                );
                state.total = page.total;
                state.trades = page.data;
                state.error = None;
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "Journal fetch failed");
                state.error = Some(FETCH_ERROR_MESSAGE.to_string());
                false
            }
        }
    }

    /// Change the filter. Always resets to page 1 before fetching.
    pub async fn set_filter(&self, filter: TradeFilter) -> bool {
        {
            let mut state = self.state.write();
            state.filter = filter;
            state.page = 1;
        }
        self.fetch().await
    }

    /// Advance one page. Refused (no request) when `page * limit >= total`.
    pub async fn next_page(&self) -> bool {
        {
            let mut state = self.state.write();
            if !state.has_next_page() {
                return false;
            }
            state.page += 1;
        }
        self.fetch().await
    }

    /// Go back one page. Refused at page 1.
    pub async fn previous_page(&self) -> bool {
        {
            let mut state = self.state.write();
            if !state.has_previous_page() {
                return false;
            }
            state.page -= 1;
        }
        self.fetch().await
    }

    /// Jump to `page` when it exists under the last known total.
    pub async fn go_to_page(&self, page: u32) -> bool {
        {
            let mut state = self.state.write();
            let first_row = (page as u64).saturating_sub(1) * state.limit as u64;
            if page == 0 || first_row >= state.total {
                return false;
            }
            state.page = page;
        }
        self.fetch().await
    }

    /// Refetch the current page, stepping back to the last page when it no longer exists.
    async fn refresh(&self) {
        if !self.fetch().await {
            return;
        }
        {
            let mut state = self.state.write();
            let last = state.page_count().min(u32::MAX as u64) as u32;
            if state.page <= last {
                return;
            }
            tracing::debug!(page = state.page, last, "Journal page emptied, moving back");
            state.page = last;
        }
        self.fetch().await;
    }

    /// Apply a mutation and refresh the current page on success.
    pub async fn apply(&self, mutation: TradeMutation) -> bool {
        match mutation.apply(self.api.as_ref()).await {
            Ok(()) => {
                tracing::info!(action = mutation.name(), "Trade mutation applied");
                self.clear_action_error();
                self.refresh().await;
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
