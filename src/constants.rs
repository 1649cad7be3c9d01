use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Cash balance granted to every newly registered user
pub const DEFAULT_STARTING_CASH: Decimal = dec!(10000);

/// Database file name used when DATABASE_URL is not set
pub const DB_FILE_NAME: &str = "ledger.db";

/// Default endpoint for the HTTP quote provider
pub const DEFAULT_QUOTE_API_URL: &str = "https://finance.cs50.io/quote";

/// Decimal precision for display amounts
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
