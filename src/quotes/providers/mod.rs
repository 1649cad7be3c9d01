pub(crate) mod http_provider;
pub(crate) mod static_provider;

pub use http_provider::HttpQuoteProvider;
pub use static_provider::StaticQuoteProvider;
