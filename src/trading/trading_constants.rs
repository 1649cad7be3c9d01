//! Stable text encodings for the append-only trades table.

/// Purchase of shares. Decreases cash and increases the holding.
pub const TRADE_ACTION_BUY: &str = "buy";

/// Disposal of shares. Increases cash and decreases the holding.
pub const TRADE_ACTION_SELL: &str = "sell";
