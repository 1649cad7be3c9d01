use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::trading::TradeAction;

/// One line of the current-portfolio view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioPosition {
    pub symbol: String,
    pub name: String,
    pub shares: i64,
    pub price: Decimal,
    pub total: Decimal,
}

/// Current holdings valuation combined with the cash balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub positions: Vec<PortfolioPosition>,
    pub cash: Decimal,
    pub stocks_total: Decimal,
    pub grand_total: Decimal,
}

/// A trade record enriched for display.
///
/// `unit_price` is the recorded execution price; `price` and `total` derive
/// from the quote at read time and never alter the record itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeHistoryEntry {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub shares: i64,
    pub unit_price: Decimal,
    pub action: TradeAction,
    pub executed_at: DateTime<Utc>,
    pub price: Decimal,
    pub total: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn summary_serializes_with_camel_case_keys() {
        let summary = PortfolioSummary {
            positions: vec![PortfolioPosition {
                symbol: "AAPL".to_string(),
                name: "Apple Inc.".to_string(),
                shares: 10,
                price: dec!(150),
                total: dec!(1500),
            }],
            cash: dec!(8500),
            stocks_total: dec!(1500),
            grand_total: dec!(10000),
        };

        let value = serde_json::to_value(&summary).unwrap();
        assert!(value.get("stocksTotal").is_some());
        assert!(value.get("grandTotal").is_some());
        assert!(value["positions"][0].get("symbol").is_some());
    }
}
