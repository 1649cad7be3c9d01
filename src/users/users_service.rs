use log::debug;
use std::sync::Arc;

use super::users_errors::Result;
use super::users_model::{NewUser, User};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::constants::DEFAULT_STARTING_CASH;

/// Service for managing users
///
/// Credential verification and sessions live in the presentation layer;
/// this service only owns identity rows and their cash balances.
pub struct UserService {
    user_repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    /// Creates a new UserService instance with an injected repository
    pub fn new(user_repository: Arc<dyn UserRepositoryTrait>) -> Self {
        Self { user_repository }
    }
}

impl UserServiceTrait for UserService {
    /// Registers a new user seeded with the default starting cash
    fn register(&self, new_user: NewUser) -> Result<User> {
        debug!("Registering user: {}", new_user.username);
        self.user_repository
            .create(new_user, DEFAULT_STARTING_CASH)
    }

    fn get_user(&self, user_id: &str) -> Result<User> {
        self.user_repository.get_by_id(user_id)
    }

    fn get_user_by_username(&self, username: &str) -> Result<User> {
        self.user_repository.get_by_username(username)
    }
}
