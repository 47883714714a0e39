//! # Analytics Endpoints
//!
//! Dashboard summary (trader or admin shaped), cumulative P&L chart and the admin top-trades list.

use super::client::ApiClient;
use crate::core::error::Result;
use reqwest::Method;
use shared::{ChartPoint, ChartResponse, DashboardSummary, PaginatedResponse, Trade};

pub const SUMMARY_PATH: &str = "/analytics/summary";
pub const CHART_PATH: &str = "/analytics/chart";
pub const TOP_TRADES_PATH: &str = "/analytics/admin/top-trades";

pub async fn get_summary(client: &ApiClient) -> Result<DashboardSummary> {
    let response = client.send(Method::GET, SUMMARY_PATH, |builder| builder).await?;
    let summary = ApiClient::parse::<DashboardSummary>(response).await?;
    tracing::debug!(admin = summary.is_admin(), "Fetched dashboard summary");
    Ok(summary)
}

/// Cumulative P&L series, unwrapped from its `{data: [...]}` envelope.
pub async fn get_chart(client: &ApiClient) -> Result<Vec<ChartPoint>> {
    let response = client.send(Method::GET, CHART_PATH, |builder| builder).await?;
    let chart = ApiClient::parse::<ChartResponse>(response).await?;
    Ok(chart.data)
}

/// Best trades across the platform. Only admins are allowed to call this.
pub async fn get_top_trades(client: &ApiClient) -> Result<Vec<Trade>> {
    let response = client.send(Method::GET, TOP_TRADES_PATH, |builder| builder).await?;
    let page = ApiClient::parse::<PaginatedResponse<Trade>>(response).await?;
    Ok(page.data)
}
