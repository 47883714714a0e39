//! # Trade Endpoints
//!
//! Listing (paginated, optionally filtered by status), lookup, create, partial update, close and
//! delete.

use super::client::ApiClient;
use crate::core::error::{AppError, Result};
use reqwest::Method;
use shared::{CloseTrade, CreateTrade, PaginatedResponse, Trade, TradeQuery, UpdateTrade};

pub const TRADES_PATH: &str = "/trades/";

fn trade_path(id: &str) -> Result<String> {
    let id = id.trim();
    if id.is_empty() {
        return Err(AppError::Validation("Trade id is required".to_string()));
    }
    Ok(format!("/trades/{}", id))
}

/// One page of trades. `status` is only sent when set.
pub async fn list_trades(client: &ApiClient, query: &TradeQuery) -> Result<PaginatedResponse<Trade>> {
    let response = client
        .send(Method::GET, TRADES_PATH, |builder| builder.query(query))
        .await?;
    let page = ApiClient::parse::<PaginatedResponse<Trade>>(response).await?;
    tracing::debug!(
        skip = query.skip,
        limit = query.limit,
        total = page.total,
        rows = page.data.len(),
        "Fetched trades"
    );
    Ok(page)
}

/// The `limit` most recent trades.
pub async fn get_recent_trades(client: &ApiClient, limit: u32) -> Result<Vec<Trade>> {
    let response = client
        .send(Method::GET, TRADES_PATH, |builder| builder.query(&[("limit", limit)]))
        .await?;
    let page = ApiClient::parse::<PaginatedResponse<Trade>>(response).await?;
    Ok(page.data)
}

pub async fn get_trade(client: &ApiClient, id: &str) -> Result<Trade> {
    let path = trade_path(id)?;
    let response = client.send(Method::GET, &path, |builder| builder).await?;
    ApiClient::parse::<Trade>(response).await
}

#[tracing::instrument(skip(client, trade), fields(symbol = %trade.symbol, side = %trade.side))]
pub async fn create_trade(client: &ApiClient, trade: &CreateTrade) -> Result<Trade> {
    let response = client
        .send(Method::POST, TRADES_PATH, |builder| builder.json(trade))
        .await?;
    let created = ApiClient::parse::<Trade>(response).await?;
    tracing::info!(trade_id = %created.id, "Trade created");
    Ok(created)
}

/// Partial update; fields left as `None` are not sent.
#[tracing::instrument(skip(client, changes))]
pub async fn update_trade(client: &ApiClient, id: &str, changes: &UpdateTrade) -> Result<Trade> {
    let path = trade_path(id)?;
    let response = client
        .send(Method::PUT, &path, |builder| builder.json(changes))
        .await?;
    let updated = ApiClient::parse::<Trade>(response).await?;
    tracing::info!("Trade updated");
    Ok(updated)
}

/// Close a position with an exit price (and optional exit date).
#[tracing::instrument(skip(client, close), fields(exit_price = close.exit_price))]
pub async fn close_trade(client: &ApiClient, id: &str, close: &CloseTrade) -> Result<Trade> {
    let path = format!("{}/close", trade_path(id)?);
    let response = client
        .send(Method::PATCH, &path, |builder| builder.json(close))
        .await?;
    let closed = ApiClient::parse::<Trade>(response).await?;
    tracing::info!(pnl = closed.pnl, "Trade closed");
    Ok(closed)
}

#[tracing::instrument(skip(client))]
pub async fn delete_trade(client: &ApiClient, id: &str) -> Result<()> {
    let path = trade_path(id)?;
    client.send(Method::DELETE, &path, |builder| builder).await?;
    tracing::info!("Trade deleted");
    Ok(())
}
