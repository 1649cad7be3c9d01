use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{Error, ValidationError};
use crate::trading::trading_constants::*;

/// Enum representing the two recorded trade actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeAction {
    Buy,
    Sell,
}

impl TradeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeAction::Buy => TRADE_ACTION_BUY,
            TradeAction::Sell => TRADE_ACTION_SELL,
        }
    }
}

impl FromStr for TradeAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            s if s == TRADE_ACTION_BUY => Ok(TradeAction::Buy),
            s if s == TRADE_ACTION_SELL => Ok(TradeAction::Sell),
            _ => Err(format!("Unknown trade action: {}", s)),
        }
    }
}

/// Domain model for an executed trade.
///
/// Records are append-only: the unit price is the quote price at the moment
/// of execution and is never revised by later quotes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    pub id: String,
    pub user_id: String,
    pub symbol: String,
    pub shares: i64,
    pub unit_price: Decimal,
    pub action: TradeAction,
    pub executed_at: DateTime<Utc>,
}

/// Database model for trades
#[derive(Queryable, Selectable, Identifiable, Insertable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::trades)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TradeRecordDB {
    pub id: String,
    pub user_id: String,
    pub symbol: String,
    pub shares: i64,
    pub unit_price: String,
    pub action: String,
    pub executed_at: NaiveDateTime,
}

impl TryFrom<TradeRecordDB> for TradeRecord {
    type Error = Error;

    fn try_from(db: TradeRecordDB) -> Result<TradeRecord, Error> {
        let unit_price = Decimal::from_str(&db.unit_price)
            .map_err(|e| ValidationError::InvalidInput(format!("Corrupt trade price: {}", e)))?;
        let action = TradeAction::from_str(&db.action)
            .map_err(ValidationError::InvalidInput)?;

        Ok(TradeRecord {
            id: db.id,
            user_id: db.user_id,
            symbol: db.symbol,
            shares: db.shares,
            unit_price,
            action,
            executed_at: DateTime::from_naive_utc_and_offset(db.executed_at, Utc),
        })
    }
}

/// Input model for appending a trade to the ledger
#[derive(Debug, Clone)]
pub struct NewTrade {
    pub user_id: String,
    pub symbol: String,
    pub shares: i64,
    pub unit_price: Decimal,
    pub action: TradeAction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trade_action_round_trips_through_text() {
        assert_eq!(TradeAction::Buy.as_str(), "buy");
        assert_eq!(TradeAction::Sell.as_str(), "sell");
        assert_eq!(TradeAction::from_str("buy").unwrap(), TradeAction::Buy);
        assert_eq!(TradeAction::from_str("sell").unwrap(), TradeAction::Sell);
        assert!(TradeAction::from_str("short").is_err());
    }
}
