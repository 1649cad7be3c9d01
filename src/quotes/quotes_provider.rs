use async_trait::async_trait;

use super::quotes_errors::Result;
use super::quotes_model::Quote;

/// Contract for resolving a ticker symbol to its current price and display name.
///
/// Lookups are case-insensitive on the symbol; an unknown symbol yields
/// `QuoteError::NotFound`.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    async fn lookup(&self, symbol: &str) -> Result<Quote>;
}
