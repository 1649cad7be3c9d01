pub(crate) mod portfolio_model;
pub(crate) mod portfolio_service;
pub(crate) mod portfolio_traits;

pub use portfolio_model::{PortfolioPosition, PortfolioSummary, TradeHistoryEntry};
pub use portfolio_service::PortfolioService;
pub use portfolio_traits::PortfolioServiceTrait;
