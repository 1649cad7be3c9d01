pub(crate) mod trading_constants;
pub(crate) mod trading_errors;
pub(crate) mod trading_model;
pub(crate) mod trading_repository;
pub(crate) mod trading_service;
pub(crate) mod trading_traits;

pub use trading_constants::*;
pub use trading_errors::TradingError;
pub use trading_model::{NewTrade, TradeAction, TradeRecord, TradeRecordDB};
pub use trading_repository::TradeRepository;
pub use trading_service::TradingService;
pub use trading_traits::{TradeRepositoryTrait, TradingServiceTrait};
