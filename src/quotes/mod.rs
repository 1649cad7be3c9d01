pub(crate) mod quotes_errors;
pub(crate) mod quotes_model;
pub(crate) mod quotes_provider;

pub mod providers;

pub use providers::{HttpQuoteProvider, StaticQuoteProvider};
pub use quotes_errors::QuoteError;
pub use quotes_model::{canonical_symbol, Quote};
pub use quotes_provider::QuoteProvider;
