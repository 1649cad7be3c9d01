use async_trait::async_trait;
use futures::future::join_all;
use log::warn;
use rust_decimal::Decimal;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use super::portfolio_model::{PortfolioPosition, PortfolioSummary, TradeHistoryEntry};
use super::portfolio_traits::PortfolioServiceTrait;
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::holdings::HoldingsRepositoryTrait;
use crate::quotes::{Quote, QuoteProvider};
use crate::trading::TradeRepositoryTrait;
use crate::users::UserRepositoryTrait;
use crate::Result;

/// Service deriving portfolio read models from the ledger and live quotes
pub struct PortfolioService {
    user_repository: Arc<dyn UserRepositoryTrait>,
    holdings_repository: Arc<dyn HoldingsRepositoryTrait>,
    trade_repository: Arc<dyn TradeRepositoryTrait>,
    quote_provider: Arc<dyn QuoteProvider>,
}

impl PortfolioService {
    /// Creates a new PortfolioService instance with injected dependencies
    pub fn new(
        user_repository: Arc<dyn UserRepositoryTrait>,
        holdings_repository: Arc<dyn HoldingsRepositoryTrait>,
        trade_repository: Arc<dyn TradeRepositoryTrait>,
        quote_provider: Arc<dyn QuoteProvider>,
    ) -> Self {
        Self {
            user_repository,
            holdings_repository,
            trade_repository,
            quote_provider,
        }
    }

    /// Fetches the latest quote for each distinct symbol; symbols the
    /// provider cannot resolve are simply absent from the map.
    async fn quotes_for_symbols(&self, symbols: &[String]) -> HashMap<String, Quote> {
        let lookups = symbols.iter().map(|s| self.quote_provider.lookup(s));
        let results = join_all(lookups).await;

        symbols
            .iter()
            .zip(results)
            .filter_map(|(symbol, result)| match result {
                Ok(quote) => Some((symbol.clone(), quote)),
                Err(e) => {
                    warn!("Quote lookup failed for {}: {}", symbol, e);
                    None
                }
            })
            .collect()
    }
}

#[async_trait]
impl PortfolioServiceTrait for PortfolioService {
    /// Current holdings valued at live quotes, plus cash and grand total.
    ///
    /// A symbol the provider cannot resolve is valued at zero under its own
    /// name instead of failing the whole view.
    async fn current_portfolio(&self, user_id: &str) -> Result<PortfolioSummary> {
        let user = self.user_repository.get_by_id(user_id)?;
        let holdings = self.holdings_repository.get_open_positions(user_id)?;

        let symbols: Vec<String> = holdings.iter().map(|h| h.symbol.clone()).collect();
        let quotes = self.quotes_for_symbols(&symbols).await;

        let mut positions = Vec::with_capacity(holdings.len());
        let mut stocks_total = Decimal::ZERO;

        for holding in &holdings {
            let (name, price) = match quotes.get(&holding.symbol) {
                Some(quote) => (quote.name.clone(), quote.price),
                None => (holding.symbol.clone(), Decimal::ZERO),
            };
            let total = (price * Decimal::from(holding.shares)).round_dp(DISPLAY_DECIMAL_PRECISION);
            stocks_total += total;
            positions.push(PortfolioPosition {
                symbol: holding.symbol.clone(),
                name,
                shares: holding.shares,
                price,
                total,
            });
        }

        Ok(PortfolioSummary {
            positions,
            cash: user.cash,
            stocks_total,
            grand_total: user.cash + stocks_total,
        })
    }

    /// All trades in chronological order, enriched with the current quote's
    /// display name and a read-time line total. The recorded execution price
    /// is left untouched.
    async fn transaction_history(&self, user_id: &str) -> Result<Vec<TradeHistoryEntry>> {
        let trades = self.trade_repository.get_trades_for_user(user_id)?;

        let symbols: Vec<String> = trades
            .iter()
            .map(|t| t.symbol.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let quotes = self.quotes_for_symbols(&symbols).await;

        let entries = trades
            .into_iter()
            .map(|trade| {
                let (name, price) = match quotes.get(&trade.symbol) {
                    Some(quote) => (quote.name.clone(), quote.price),
                    None => (trade.symbol.clone(), Decimal::ZERO),
                };
                TradeHistoryEntry {
                    id: trade.id,
                    symbol: trade.symbol,
                    name,
                    shares: trade.shares,
                    unit_price: trade.unit_price,
                    action: trade.action,
                    executed_at: trade.executed_at,
                    price,
                    total: (price * Decimal::from(trade.shares))
                        .round_dp(DISPLAY_DECIMAL_PRECISION),
                }
            })
            .collect();

        Ok(entries)
    }
}
