use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use super::users_errors::{Result, UserError};
use super::users_model::{NewUser, User, UserDB};
use super::users_traits::UserRepositoryTrait;
use crate::db::{get_connection, DbPool};
use crate::schema::users;

/// Repository for managing user data in the database
pub struct UserRepository {
    pool: Arc<DbPool>,
}

impl UserRepository {
    /// Creates a new UserRepository instance
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Reads a user's cash balance inside an open transaction scope.
    pub fn cash_balance_in_transaction(
        conn: &mut SqliteConnection,
        user_id: &str,
    ) -> Result<Decimal> {
        let cash_text = users::table
            .find(user_id)
            .select(users::cash)
            .first::<String>(conn)
            .optional()
            .map_err(UserError::from)?
            .ok_or_else(|| UserError::NotFound(user_id.to_string()))?;

        Decimal::from_str(&cash_text)
            .map_err(|e| UserError::InvalidData(format!("Corrupt cash balance: {}", e)))
    }

    /// Overwrites a user's cash balance inside an open transaction scope.
    pub fn set_cash_in_transaction(
        conn: &mut SqliteConnection,
        user_id: &str,
        amount: &Decimal,
    ) -> Result<()> {
        diesel::update(users::table.find(user_id))
            .set((
                users::cash.eq(amount.to_string()),
                users::updated_at.eq(Utc::now().naive_utc()),
            ))
            .execute(conn)
            .map_err(UserError::from)?;
        Ok(())
    }
}

impl UserRepositoryTrait for UserRepository {
    /// Creates a new user with the given starting cash balance
    fn create(&self, new_user: NewUser, starting_cash: Decimal) -> Result<User> {
        new_user.validate()?;

        let mut conn = get_connection(&self.pool)
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        let now = Utc::now().naive_utc();
        let user_db = UserDB {
            id: Uuid::new_v4().to_string(),
            username: new_user.username.trim().to_string(),
            cash: starting_cash.to_string(),
            created_at: now,
            updated_at: now,
        };

        diesel::insert_into(users::table)
            .values(&user_db)
            .execute(&mut conn)
            .map_err(UserError::from)?;

        user_db.try_into()
    }

    /// Retrieves a user by ID
    fn get_by_id(&self, user_id: &str) -> Result<User> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        users::table
            .find(user_id)
            .select(UserDB::as_select())
            .first::<UserDB>(&mut conn)
            .optional()
            .map_err(UserError::from)?
            .ok_or_else(|| UserError::NotFound(user_id.to_string()))?
            .try_into()
    }

    /// Retrieves a user by username
    fn get_by_username(&self, username: &str) -> Result<User> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        users::table
            .filter(users::username.eq(username))
            .select(UserDB::as_select())
            .first::<UserDB>(&mut conn)
            .optional()
            .map_err(UserError::from)?
            .ok_or_else(|| UserError::NotFound(username.to_string()))?
            .try_into()
    }
}
