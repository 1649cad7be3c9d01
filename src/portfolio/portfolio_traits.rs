use async_trait::async_trait;

use super::portfolio_model::{PortfolioSummary, TradeHistoryEntry};
use crate::Result;

/// Trait defining the contract for portfolio read models.
///
/// Both operations are pure reads: calling them twice without an intervening
/// trade yields identical results (modulo live quote movement).
#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    async fn current_portfolio(&self, user_id: &str) -> Result<PortfolioSummary>;
    async fn transaction_history(&self, user_id: &str) -> Result<Vec<TradeHistoryEntry>>;
}
