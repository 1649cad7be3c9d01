use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuoteError>;

/// Custom error type for quote-provider operations
#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("Symbol not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Parsing error: {0}")]
    ParsingError(String),

    #[error("Provider error: {0}")]
    ProviderError(String),
}
