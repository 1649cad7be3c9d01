use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A resolved quote: current price and display name for a ticker symbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub symbol: String,
    pub name: String,
    pub price: Decimal,
}

/// Canonical form of a ticker symbol.
///
/// Holdings and trade records always store this form, so the same logical
/// symbol never fragments into multiple rows due to case differences.
pub fn canonical_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_symbol_uppercases_and_trims() {
        assert_eq!(canonical_symbol(" aapl "), "AAPL");
        assert_eq!(canonical_symbol("MSFT"), "MSFT");
        assert_eq!(canonical_symbol(""), "");
    }
}
