use async_trait::async_trait;

use super::trading_model::TradeRecord;
use crate::Result;

/// Trait defining the contract for trade repository operations.
pub trait TradeRepositoryTrait: Send + Sync {
    fn get_trades_for_user(&self, user_id: &str) -> Result<Vec<TradeRecord>>;
}

/// Trait defining the contract for trade execution.
#[async_trait]
pub trait TradingServiceTrait: Send + Sync {
    async fn buy(&self, user_id: &str, symbol: &str, shares: i64) -> Result<TradeRecord>;
    async fn sell(&self, user_id: &str, symbol: &str, shares: i64) -> Result<TradeRecord>;
}
