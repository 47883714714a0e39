//! # Service Traits
//!
//! The [`JournalApi`] trait is the seam between the Data-Sync controllers and the remote API.
//! [`crate::services::api::ApiClient`] implements it over HTTP; tests implement it in memory.

use crate::core::error::Result;
use async_trait::async_trait;
use shared::{
    AuthResponse, ChartPoint, CloseTrade, CreateTrade, DashboardSummary, PaginatedResponse,
    RegisterRequest, Trade, TradeQuery, UpdateTrade, UserProfile,
};

/// Number of trades on the trader dashboard's recent list
pub const RECENT_TRADES_LIMIT: u32 = 5;

/// Trait for journal API operations
#[async_trait]
pub trait JournalApi: Send + Sync {
    /// Create an account and receive its first credential
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse>;

    /// Exchange email and password for a credential
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse>;

    /// Profile of the authenticated user
    async fn get_profile(&self) -> Result<UserProfile>;

    /// One page of the user's trades (all trades for admins)
    async fn list_trades(&self, query: &TradeQuery) -> Result<PaginatedResponse<Trade>>;

    /// A single trade by id
    async fn get_trade(&self, id: &str) -> Result<Trade>;

    /// The most recent `limit` trades
    async fn get_recent_trades(&self, limit: u32) -> Result<Vec<Trade>>;

    async fn create_trade(&self, trade: &CreateTrade) -> Result<Trade>;

    async fn update_trade(&self, id: &str, changes: &UpdateTrade) -> Result<Trade>;

    /// Close an open position; the server computes the P&L
    async fn close_trade(&self, id: &str, close: &CloseTrade) -> Result<Trade>;

    async fn delete_trade(&self, id: &str) -> Result<()>;

    /// Role-shaped dashboard summary
    async fn get_summary(&self) -> Result<DashboardSummary>;

    /// Cumulative P&L series
    async fn get_chart(&self) -> Result<Vec<ChartPoint>>;

    /// Platform-wide best trades (admin only)
    async fn get_top_trades(&self) -> Result<Vec<Trade>>;
}
