use rust_decimal::Decimal;
use thiserror::Error;

/// Custom error type for trade execution.
///
/// Every variant except `TransactionFailed` is detected before any mutation;
/// `TransactionFailed` means the atomic commit itself failed and every write
/// in the scope was rolled back. No variant is ever retried automatically.
#[derive(Debug, Error)]
pub enum TradingError {
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    #[error("Share count must be a positive integer, got {0}")]
    InvalidQuantity(i64),

    #[error("Insufficient funds: cost {cost} exceeds cash balance {cash}")]
    InsufficientFunds { cost: Decimal, cash: Decimal },

    #[error("Insufficient shares: asked to sell {requested} of {symbol} but {owned} owned")]
    InsufficientShares {
        symbol: String,
        requested: i64,
        owned: i64,
    },

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Transaction failed: {0}")]
    TransactionFailed(String),
}

/// Result type for trading operations
pub type Result<T> = std::result::Result<T, TradingError>;
