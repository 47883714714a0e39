//! Trade entities and the payloads that create, edit and close them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeSide {
    Long,
    Short,
}

impl TradeSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeSide::Long => "LONG",
            TradeSide::Short => "SHORT",
        }
    }
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TradeSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LONG" => Ok(TradeSide::Long),
            "SHORT" => Ok(TradeSide::Short),
            other => Err(format!("Unknown trade side '{}', expected LONG or SHORT", other)),
        }
    }
}

/// Lifecycle state of a trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeStatus {
    Open,
    Closed,
}

impl TradeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeStatus::Open => "OPEN",
            TradeStatus::Closed => "CLOSED",
        }
    }
}

impl fmt::Display for TradeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owner details attached to trades in admin listings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TradeOwner {
    pub username: String,
    pub email: String,
}

/// A journal entry as returned by the server.
///
/// The server is authoritative: `pnl` is computed remotely when the trade closes and is never
/// derived on the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trade {
    pub id: String,
    pub user_id: String,
    pub symbol: String,
    pub side: TradeSide,
    pub quantity: f64,
    pub entry_price: f64,
    pub entry_date: String,
    #[serde(default)]
    pub exit_price: Option<f64>,
    #[serde(default)]
    pub exit_date: Option<String>,
    #[serde(default)]
    pub pnl: Option<f64>,
    pub status: TradeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<TradeOwner>,
}

impl Trade {
    pub fn is_closed(&self) -> bool {
        self.status == TradeStatus::Closed
    }

    fn has_exit(&self) -> bool {
        self.exit_price.is_some() && self.exit_date.is_some()
    }

    /// `CLOSED` carries both exit fields; `OPEN` carries neither exit field nor a P&L.
    pub fn is_consistent(&self) -> bool {
        match self.status {
            TradeStatus::Closed => self.has_exit(),
            TradeStatus::Open => {
                self.exit_price.is_none() && self.exit_date.is_none() && self.pnl.is_none()
            }
        }
    }

    /// Status to show in views. A trade carrying both exit fields is never shown as open.
    pub fn display_status(&self) -> TradeStatus {
        if self.has_exit() {
            TradeStatus::Closed
        } else {
            self.status
        }
    }
}

/// Body of `POST /trades/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateTrade {
    pub symbol: String,
    pub side: TradeSide,
    pub quantity: f64,
    pub entry_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_date: Option<String>,
}

/// Body of `PUT /trades/{id}`; only the fields that are set are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateTrade {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<TradeSide>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_date: Option<String>,
}

impl UpdateTrade {
    pub fn is_empty(&self) -> bool {
        *self == UpdateTrade::default()
    }
}

/// Body of `PATCH /trades/{id}/close`. The server stamps the current time when `exit_date` is absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CloseTrade {
    pub exit_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_date: Option<String>,
}

/// Query string of `GET /trades/`
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct TradeQuery {
    pub skip: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TradeStatus>,
}

impl TradeQuery {
    /// Query for a 1-based page of `limit` rows.
    pub fn page(page: u32, limit: u32, status: Option<TradeStatus>) -> Self {
        Self {
            skip: page.saturating_sub(1) * limit,
            limit,
            status,
        }
    }
}

/// A window over a server-ordered collection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaginatedResponse<T> {
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub data: Vec<T>,
}
