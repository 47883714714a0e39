//! # Trade Mutations
//!
//! The four write actions shared by the dashboard and the journal. Each performs exactly one
//! resource call; refreshing afterwards is up to the controller that applied it.

use crate::core::error::{AppError, Result};
use crate::core::service::JournalApi;
use crate::utils::validation::{validate_positive, validate_symbol};
use shared::{CloseTrade, CreateTrade, UpdateTrade};

#[derive(Debug, Clone, PartialEq)]
pub enum TradeMutation {
    Create(CreateTrade),
    Update { id: String, changes: UpdateTrade },
    Close { id: String, close: CloseTrade },
    Delete { id: String },
}

impl TradeMutation {
    /// Name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            TradeMutation::Create(_) => "create",
            TradeMutation::Update { .. } => "update",
            TradeMutation::Close { .. } => "close",
            TradeMutation::Delete { .. } => "delete",
        }
    }

    /// Message shown when the server gives no detail
    pub fn fallback_message(&self) -> &'static str {
        match self {
            TradeMutation::Create(_) => "Failed to create trade.",
            TradeMutation::Update { .. } => "Failed to update trade.",
            TradeMutation::Close { .. } => "Failed to close trade.",
            TradeMutation::Delete { .. } => "Failed to delete trade.",
        }
    }

    /// Client-side checks run before any request is sent.
    pub fn validate(&self) -> Result<()> {
        match self {
            TradeMutation::Create(trade) => {
                validate_symbol(&trade.symbol).into_result()?;
                validate_positive("Quantity", trade.quantity).into_result()?;
                validate_positive("Entry price", trade.entry_price).into_result()
            }
            TradeMutation::Update { id, changes } => {
                require_id(id)?;
                if changes.is_empty() {
                    return Err(AppError::Validation("Nothing to update".to_string()));
                }
                if let Some(symbol) = &changes.symbol {
                    validate_symbol(symbol).into_result()?;
                }
                if let Some(quantity) = changes.quantity {
                    validate_positive("Quantity", quantity).into_result()?;
                }
                if let Some(entry_price) = changes.entry_price {
                    validate_positive("Entry price", entry_price).into_result()?;
                }
                if let Some(exit_price) = changes.exit_price {
                    validate_positive("Exit price", exit_price).into_result()?;
                }
                Ok(())
            }
            TradeMutation::Close { id, close } => {
                require_id(id)?;
                validate_positive("Exit price", close.exit_price).into_result()
            }
            TradeMutation::Delete { id } => require_id(id),
        }
    }

    /// Validate, then perform the single matching resource call.
    pub async fn apply(&self, api: &dyn JournalApi) -> Result<()> {
        self.validate()?;
        match self {
            TradeMutation::Create(trade) => api.create_trade(trade).await.map(|_| ()),
            TradeMutation::Update { id, changes } => {
                api.update_trade(id, changes).await.map(|_| ())
            }
            TradeMutation::Close { id, close } => api.close_trade(id, close).await.map(|_| ()),
            TradeMutation::Delete { id } => api.delete_trade(id).await,
        }
    }
}

fn require_id(id: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(AppError::Validation("Trade id is required".to_string()));
    }
    Ok(())
}
