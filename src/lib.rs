pub mod db;

pub mod holdings;
pub mod quotes;
pub mod users;

pub mod constants;
pub mod errors;
pub mod portfolio;
pub mod schema;
pub mod trading;

pub use errors::{Error, Result};
pub use portfolio::*;
pub use trading::*;
