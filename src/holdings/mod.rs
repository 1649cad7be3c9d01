pub mod holdings_model;
pub mod holdings_repository;

// Re-export the main public entry points and types
pub use holdings_model::{Holding, HoldingDB};
pub use holdings_repository::{HoldingsRepository, HoldingsRepositoryTrait};
