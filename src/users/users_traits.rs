use rust_decimal::Decimal;

use super::users_model::{NewUser, User};
use super::users_errors::Result;

/// Trait defining the contract for user repository operations.
pub trait UserRepositoryTrait: Send + Sync {
    fn create(&self, new_user: NewUser, starting_cash: Decimal) -> Result<User>;
    fn get_by_id(&self, user_id: &str) -> Result<User>;
    fn get_by_username(&self, username: &str) -> Result<User>;
}

/// Trait defining the contract for user service operations.
pub trait UserServiceTrait: Send + Sync {
    fn register(&self, new_user: NewUser) -> Result<User>;
    fn get_user(&self, user_id: &str) -> Result<User>;
    fn get_user_by_username(&self, username: &str) -> Result<User>;
}
