use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::quotes::quotes_errors::{QuoteError, Result};
use crate::quotes::quotes_model::{canonical_symbol, Quote};
use crate::quotes::quotes_provider::QuoteProvider;

/// In-memory quote table for tests, demos, and offline operation.
pub struct StaticQuoteProvider {
    quotes: RwLock<HashMap<String, Quote>>,
}

impl StaticQuoteProvider {
    pub fn new() -> Self {
        StaticQuoteProvider {
            quotes: RwLock::new(HashMap::new()),
        }
    }

    /// Adds or replaces the quote served for a symbol.
    pub fn set_quote(&self, symbol: &str, name: &str, price: Decimal) {
        let symbol = canonical_symbol(symbol);
        let quote = Quote {
            symbol: symbol.clone(),
            name: name.to_string(),
            price,
        };
        self.quotes
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(symbol, quote);
    }

    pub fn with_quote(self, symbol: &str, name: &str, price: Decimal) -> Self {
        self.set_quote(symbol, name, price);
        self
    }

    /// Stops serving a symbol, as when a listing disappears.
    pub fn remove_quote(&self, symbol: &str) {
        self.quotes
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&canonical_symbol(symbol));
    }
}

impl Default for StaticQuoteProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteProvider for StaticQuoteProvider {
    async fn lookup(&self, symbol: &str) -> Result<Quote> {
        let symbol = canonical_symbol(symbol);
        self.quotes
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&symbol)
            .cloned()
            .ok_or(QuoteError::NotFound(symbol))
    }
}
