//! In-memory [`JournalApi`] used by the controller tests.
//!
//! Keeps a trade list, computes P&L on close like the server does, logs every call by operation
//! name and fails selected operations on demand.

use crate::core::error::{AppError, Result};
use crate::core::service::JournalApi;
use async_trait::async_trait;
use parking_lot::Mutex;
use shared::{
    AdminSummary, AuthResponse, BestAsset, ChartPoint, CloseTrade, CreateTrade, DashboardSummary,
    PaginatedResponse, RegisterRequest, Role, Trade, TradeQuery, TradeSide, TradeStatus,
    TraderSummary, UpdateTrade, UserProfile,
};
use std::collections::HashMap;

pub(crate) struct MockJournalApi {
    role: Mutex<Role>,
    trades: Mutex<Vec<Trade>>,
    calls: Mutex<Vec<&'static str>>,
    queries: Mutex<Vec<TradeQuery>>,
    failures: Mutex<HashMap<&'static str, AppError>>,
    next_id: Mutex<u32>,
}

impl MockJournalApi {
    pub fn new(role: Role) -> Self {
        Self {
            role: Mutex::new(role),
            trades: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
            queries: Mutex::new(Vec::new()),
            failures: Mutex::new(HashMap::new()),
            next_id: Mutex::new(1),
        }
    }

    /// Seed `count` open AAPL trades with ids `t1..=tN`.
    pub fn with_open_trades(self, count: u32) -> Self {
        for _ in 0..count {
            let id = self.allocate_id();
            self.trades.lock().push(open_trade(&id));
        }
        self
    }

    pub fn set_role(&self, role: Role) {
        *self.role.lock() = role;
    }

    /// Make the next call to `operation` fail with `error`.
    pub fn fail_next(&self, operation: &'static str, error: AppError) {
        self.failures.lock().insert(operation, error);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().clone()
    }

    pub fn count(&self, operation: &str) -> usize {
        self.calls.lock().iter().filter(|call| **call == operation).count()
    }

    /// Query received by the most recent `list_trades` call
    pub fn last_query(&self) -> Option<TradeQuery> {
        self.queries.lock().last().copied()
    }

    pub fn reset_calls(&self) {
        self.calls.lock().clear();
    }

    pub fn trade(&self, id: &str) -> Option<Trade> {
        self.trades.lock().iter().find(|trade| trade.id == id).cloned()
    }

    fn allocate_id(&self) -> String {
        let mut next = self.next_id.lock();
        let id = format!("t{}", *next);
        *next += 1;
        id
    }

    fn record(&self, operation: &'static str) -> Result<()> {
        self.calls.lock().push(operation);
        match self.failures.lock().remove(operation) {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn not_found() -> AppError {
        AppError::Api {
            status: 404,
            detail: Some("Trade not found".to_string()),
        }
    }
}

fn open_trade(id: &str) -> Trade {
    Trade {
        id: id.to_string(),
        user_id: "u1".to_string(),
        symbol: "AAPL".to_string(),
        side: TradeSide::Long,
        quantity: 10.0,
        entry_price: 100.0,
        entry_date: "2024-03-01T10:00:00".to_string(),
        exit_price: None,
        exit_date: None,
        pnl: None,
        status: TradeStatus::Open,
        owner: None,
    }
}

#[async_trait]
impl JournalApi for MockJournalApi {
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse> {
        self.record("register")?;
        Ok(AuthResponse {
            access_token: format!("token-{}", request.username),
            token_type: "bearer".to_string(),
        })
    }

    async fn login(&self, email: &str, _password: &str) -> Result<AuthResponse> {
        self.record("login")?;
        Ok(AuthResponse {
            access_token: format!("token-{}", email),
            token_type: "bearer".to_string(),
        })
    }

    async fn get_profile(&self) -> Result<UserProfile> {
        self.record("get_profile")?;
        Ok(UserProfile {
            id: "u1".to_string(),
            email: "a@b.com".to_string(),
            username: "alice".to_string(),
            role: *self.role.lock(),
        })
    }

    async fn list_trades(&self, query: &TradeQuery) -> Result<PaginatedResponse<Trade>> {
        self.queries.lock().push(*query);
        self.record("list_trades")?;
        let trades = self.trades.lock();
        let matching: Vec<Trade> = trades
            .iter()
            .filter(|trade| query.status.map_or(true, |status| trade.status == status))
            .cloned()
            .collect();
        let limit = query.limit.max(1);
        Ok(PaginatedResponse {
            total: matching.len() as u64,
            page: query.skip / limit + 1,
            limit: query.limit,
            data: matching
                .into_iter()
                .skip(query.skip as usize)
                .take(query.limit as usize)
                .collect(),
        })
    }

    async fn get_trade(&self, id: &str) -> Result<Trade> {
        self.record("get_trade")?;
        self.trade(id).ok_or_else(Self::not_found)
    }

    async fn get_recent_trades(&self, limit: u32) -> Result<Vec<Trade>> {
        self.record("get_recent_trades")?;
        Ok(self.trades.lock().iter().rev().take(limit as usize).cloned().collect())
    }

    async fn create_trade(&self, trade: &CreateTrade) -> Result<Trade> {
        self.record("create_trade")?;
        let mut created = open_trade(&self.allocate_id());
        created.symbol = trade.symbol.clone();
        created.side = trade.side;
        created.quantity = trade.quantity;
        created.entry_price = trade.entry_price;
        if let Some(entry_date) = &trade.entry_date {
            created.entry_date = entry_date.clone();
        }
        self.trades.lock().push(created.clone());
        Ok(created)
    }

    async fn update_trade(&self, id: &str, changes: &UpdateTrade) -> Result<Trade> {
        self.record("update_trade")?;
        let mut trades = self.trades.lock();
        let trade = trades
            .iter_mut()
            .find(|trade| trade.id == id)
            .ok_or_else(Self::not_found)?;
        if let Some(symbol) = &changes.symbol {
            trade.symbol = symbol.clone();
        }
        if let Some(side) = changes.side {
            trade.side = side;
        }
        if let Some(quantity) = changes.quantity {
            trade.quantity = quantity;
        }
        if let Some(entry_price) = changes.entry_price {
            trade.entry_price = entry_price;
        }
        Ok(trade.clone())
    }

    async fn close_trade(&self, id: &str, close: &CloseTrade) -> Result<Trade> {
        self.record("close_trade")?;
        let mut trades = self.trades.lock();
        let trade = trades
            .iter_mut()
            .find(|trade| trade.id == id)
            .ok_or_else(Self::not_found)?;
        if trade.is_closed() {
            return Err(AppError::Api {
                status: 400,
                detail: Some("Trade is already closed".to_string()),
            });
        }
        let direction = match trade.side {
            TradeSide::Long => 1.0,
            TradeSide::Short => -1.0,
        };
        trade.exit_price = Some(close.exit_price);
        trade.exit_date = Some(
            close
                .exit_date
                .clone()
                .unwrap_or_else(|| "2024-03-05T16:00:00".to_string()),
        );
        trade.pnl = Some((close.exit_price - trade.entry_price) * trade.quantity * direction);
        trade.status = TradeStatus::Closed;
        Ok(trade.clone())
    }

    async fn delete_trade(&self, id: &str) -> Result<()> {
        self.record("delete_trade")?;
        let mut trades = self.trades.lock();
        let before = trades.len();
        trades.retain(|trade| trade.id != id);
        if trades.len() == before {
            return Err(Self::not_found());
        }
        Ok(())
    }

    async fn get_summary(&self) -> Result<DashboardSummary> {
        self.record("get_summary")?;
        let trades = self.trades.lock();
        let active = trades.iter().filter(|trade| !trade.is_closed()).count() as u64;
        let realized: f64 = trades.iter().filter_map(|trade| trade.pnl).sum();

        let summary = match *self.role.lock() {
            Role::Admin => DashboardSummary::Admin(AdminSummary {
                total_users: 1,
                total_trades: trades.len() as u64,
                active_positions: active,
                total_platform_pnl: realized,
                top_gainer: None,
                top_loser: None,
            }),
            Role::Trader => DashboardSummary::Trader(TraderSummary {
                net_realized_pnl: realized,
                profit_factor: 0.0,
                win_rate: 0.0,
                total_closed_trades: trades.iter().filter(|trade| trade.is_closed()).count()
                    as u64,
                active_positions: active,
                avg_win: 0.0,
                avg_loss: 0.0,
                best_asset: trades.first().map(|trade| BestAsset {
                    symbol: trade.symbol.clone(),
                    total_pnl: realized,
                }),
            }),
        };
        Ok(summary)
    }

    async fn get_chart(&self) -> Result<Vec<ChartPoint>> {
        self.record("get_chart")?;
        let mut cumulative = 0.0;
        Ok(self
            .trades
            .lock()
            .iter()
            .filter_map(|trade| Some((trade.exit_date.clone()?, trade.pnl?)))
            .map(|(date, pnl)| {
                cumulative += pnl;
                ChartPoint {
                    date,
                    pnl,
                    cumulative_pnl: cumulative,
                }
            })
            .collect())
    }

    async fn get_top_trades(&self) -> Result<Vec<Trade>> {
        self.record("get_top_trades")?;
        let mut closed: Vec<Trade> = self
            .trades
            .lock()
            .iter()
            .filter(|trade| trade.is_closed())
            .cloned()
            .collect();
        closed.sort_by(|a, b| {
            b.pnl
                .unwrap_or_default()
                .partial_cmp(&a.pnl.unwrap_or_default())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        closed.truncate(5);
        Ok(closed)
    }
}
