use async_trait::async_trait;
use log::{debug, error};
use rust_decimal::Decimal;
use std::sync::Arc;

use super::trading_errors::TradingError;
use super::trading_model::{NewTrade, TradeAction, TradeRecord};
use super::trading_repository::TradeRepository;
use super::trading_traits::TradingServiceTrait;
use crate::db::{get_connection, DbPool, DbTransactionExecutor};
use crate::holdings::HoldingsRepository;
use crate::quotes::{canonical_symbol, Quote, QuoteError, QuoteProvider};
use crate::users::{UserError, UserRepository};
use crate::{Error, Result};

/// Service executing buy and sell orders against the ledger.
///
/// Every order is validated first and then applied as a single atomic unit:
/// cash debit/credit, holding upsert, and history append commit together or
/// not at all.
pub struct TradingService {
    pool: Arc<DbPool>,
    quote_provider: Arc<dyn QuoteProvider>,
}

impl TradingService {
    /// Creates a new TradingService instance with an injected quote provider
    pub fn new(pool: Arc<DbPool>, quote_provider: Arc<dyn QuoteProvider>) -> Self {
        Self {
            pool,
            quote_provider,
        }
    }

    fn validate_quantity(shares: i64) -> std::result::Result<(), TradingError> {
        if shares <= 0 {
            return Err(TradingError::InvalidQuantity(shares));
        }
        Ok(())
    }

    /// Resolves a symbol through the quote provider, mapping an unknown
    /// symbol to `InvalidSymbol`. Provider outages propagate as quote errors.
    async fn resolve_quote(&self, symbol: &str) -> Result<Quote> {
        let canonical = canonical_symbol(symbol);
        if canonical.is_empty() {
            return Err(TradingError::InvalidSymbol(symbol.to_string()).into());
        }

        match self.quote_provider.lookup(&canonical).await {
            Ok(quote) => Ok(quote),
            Err(QuoteError::NotFound(s)) => Err(TradingError::InvalidSymbol(s).into()),
            Err(e) => Err(e.into()),
        }
    }

    /// Store-level failures inside the atomic scope surface as a single
    /// `TransactionFailed`; domain rejections pass through unchanged.
    fn map_commit_error(err: Error) -> Error {
        match err {
            Error::Database(db_err) => {
                error!("Trade transaction rolled back: {}", db_err);
                Error::Trading(TradingError::TransactionFailed(db_err.to_string()))
            }
            other => other,
        }
    }
}

#[async_trait]
impl TradingServiceTrait for TradingService {
    async fn buy(&self, user_id: &str, symbol: &str, shares: i64) -> Result<TradeRecord> {
        Self::validate_quantity(shares)?;
        let quote = self.resolve_quote(symbol).await?;
        let cost = quote.price * Decimal::from(shares);

        debug!(
            "Buying {} x {} at {} for user {}",
            shares, quote.symbol, quote.price, user_id
        );

        let user_id = user_id.to_string();
        self.pool
            .execute(move |conn| -> Result<TradeRecord> {
                let cash = UserRepository::cash_balance_in_transaction(conn, &user_id)
                    .map_err(|e| match e {
                        UserError::NotFound(u) => Error::Trading(TradingError::UserNotFound(u)),
                        other => other.into(),
                    })?;

                if cost > cash {
                    return Err(TradingError::InsufficientFunds { cost, cash }.into());
                }

                UserRepository::set_cash_in_transaction(conn, &user_id, &(cash - cost))?;
                HoldingsRepository::add_shares_in_transaction(conn, &user_id, &quote.symbol, shares)?;
                TradeRepository::insert_in_transaction(
                    conn,
                    NewTrade {
                        user_id: user_id.clone(),
                        symbol: quote.symbol.clone(),
                        shares,
                        unit_price: quote.price,
                        action: TradeAction::Buy,
                    },
                )
            })
            .map_err(Self::map_commit_error)
    }

    async fn sell(&self, user_id: &str, symbol: &str, shares: i64) -> Result<TradeRecord> {
        Self::validate_quantity(shares)?;

        let canonical = canonical_symbol(symbol);
        if canonical.is_empty() {
            return Err(TradingError::InvalidSymbol(symbol.to_string()).into());
        }

        // Ownership pre-check before touching the quote provider.
        {
            let mut conn = get_connection(&self.pool)?;
            let owned = HoldingsRepository::shares_owned(&mut conn, user_id, &canonical)?;
            if shares > owned {
                return Err(TradingError::InsufficientShares {
                    symbol: canonical,
                    requested: shares,
                    owned,
                }
                .into());
            }
        }

        let quote = self.resolve_quote(&canonical).await?;
        let proceeds = quote.price * Decimal::from(shares);

        debug!(
            "Selling {} x {} at {} for user {}",
            shares, quote.symbol, quote.price, user_id
        );

        let user_id = user_id.to_string();
        self.pool
            .execute(move |conn| -> Result<TradeRecord> {
                // The check is repeated inside the atomic scope so the commit
                // can never drive the holding below zero.
                let owned = HoldingsRepository::shares_owned(conn, &user_id, &quote.symbol)?;
                if shares > owned {
                    return Err(TradingError::InsufficientShares {
                        symbol: quote.symbol.clone(),
                        requested: shares,
                        owned,
                    }
                    .into());
                }

                let cash = UserRepository::cash_balance_in_transaction(conn, &user_id)
                    .map_err(|e| match e {
                        UserError::NotFound(u) => Error::Trading(TradingError::UserNotFound(u)),
                        other => other.into(),
                    })?;

                UserRepository::set_cash_in_transaction(conn, &user_id, &(cash + proceeds))?;
                HoldingsRepository::remove_shares_in_transaction(
                    conn,
                    &user_id,
                    &quote.symbol,
                    shares,
                )?;
                TradeRepository::insert_in_transaction(
                    conn,
                    NewTrade {
                        user_id: user_id.clone(),
                        symbol: quote.symbol.clone(),
                        shares,
                        unit_price: quote.price,
                        action: TradeAction::Sell,
                    },
                )
            })
            .map_err(Self::map_commit_error)
    }
}
