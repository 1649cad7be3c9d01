use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::time::Duration;

use crate::constants::DEFAULT_QUOTE_API_URL;
use crate::quotes::quotes_errors::{QuoteError, Result};
use crate::quotes::quotes_model::{canonical_symbol, Quote};
use crate::quotes::quotes_provider::QuoteProvider;

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Quote provider backed by the finance quote HTTP API.
///
/// The request carries a timeout so a stalled provider fails the enclosing
/// operation instead of hanging it.
pub struct HttpQuoteProvider {
    client: Client,
    base_url: String,
}

impl HttpQuoteProvider {
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_QUOTE_API_URL)
    }

    /// Points the provider at a non-default endpoint (test servers, proxies).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(QuoteError::NetworkError)?;
        Ok(HttpQuoteProvider {
            client,
            base_url: base_url.into(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct QuotePayload {
    symbol: Option<String>,
    #[serde(rename = "companyName")]
    company_name: Option<String>,
    #[serde(rename = "latestPrice")]
    latest_price: Option<Decimal>,
}

#[async_trait]
impl QuoteProvider for HttpQuoteProvider {
    async fn lookup(&self, symbol: &str) -> Result<Quote> {
        let symbol = canonical_symbol(symbol);
        if symbol.is_empty() {
            return Err(QuoteError::NotFound(symbol));
        }

        let url = reqwest::Url::parse_with_params(&self.base_url, &[("symbol", symbol.as_str())])
            .map_err(|e| QuoteError::ProviderError(format!("Failed to build URL: {}", e)))?;

        let response = self.client.get(url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(QuoteError::NotFound(symbol));
        }
        if !response.status().is_success() {
            return Err(QuoteError::ProviderError(format!(
                "Quote API error: {}",
                response.status()
            )));
        }

        let payload: QuotePayload = response
            .json()
            .await
            .map_err(|e| QuoteError::ParsingError(e.to_string()))?;

        // The API answers 200 with null fields for symbols it does not know.
        let price = payload
            .latest_price
            .ok_or_else(|| QuoteError::NotFound(symbol.clone()))?;

        Ok(Quote {
            name: payload
                .company_name
                .unwrap_or_else(|| symbol.clone()),
            symbol: payload
                .symbol
                .map(|s| canonical_symbol(&s))
                .unwrap_or(symbol),
            price,
        })
    }
}
