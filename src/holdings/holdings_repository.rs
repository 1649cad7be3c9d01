use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use super::holdings_model::{Holding, HoldingDB};
use crate::db::{get_connection, DbPool};
use crate::schema::holdings;
use crate::{Error, Result};

pub trait HoldingsRepositoryTrait: Send + Sync {
    fn get_open_positions(&self, user_id: &str) -> Result<Vec<Holding>>;
}

/// Repository for managing holding rows in the database.
///
/// Mutations only happen inside a trade transaction, so they are exposed as
/// transaction-scoped helpers taking the open connection; symbols are expected
/// in canonical uppercase form.
pub struct HoldingsRepository {
    pool: Arc<DbPool>,
}

impl HoldingsRepository {
    /// Creates a new repository instance with the database connection pool.
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Net shares currently owned; zero when no row exists.
    pub fn shares_owned(
        conn: &mut SqliteConnection,
        user_id: &str,
        symbol: &str,
    ) -> Result<i64> {
        let shares = holdings::table
            .filter(holdings::user_id.eq(user_id))
            .filter(holdings::symbol.eq(symbol))
            .select(holdings::shares)
            .first::<i64>(conn)
            .optional()?;

        Ok(shares.unwrap_or(0))
    }

    /// Creates the holding row on first buy, otherwise increments its shares.
    pub fn add_shares_in_transaction(
        conn: &mut SqliteConnection,
        user_id: &str,
        symbol: &str,
        shares: i64,
    ) -> Result<()> {
        let now = Utc::now().naive_utc();
        let holding_db = HoldingDB {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            symbol: symbol.to_string(),
            shares,
            created_at: now,
            updated_at: now,
        };

        diesel::insert_into(holdings::table)
            .values(&holding_db)
            .on_conflict((holdings::user_id, holdings::symbol))
            .do_update()
            .set((
                holdings::shares.eq(holdings::shares + shares),
                holdings::updated_at.eq(now),
            ))
            .execute(conn)?;

        Ok(())
    }

    /// Decrements a holding's shares. The caller has already verified
    /// ownership inside the same transaction scope.
    pub fn remove_shares_in_transaction(
        conn: &mut SqliteConnection,
        user_id: &str,
        symbol: &str,
        shares: i64,
    ) -> Result<()> {
        let updated = diesel::update(
            holdings::table
                .filter(holdings::user_id.eq(user_id))
                .filter(holdings::symbol.eq(symbol)),
        )
        .set((
            holdings::shares.eq(holdings::shares - shares),
            holdings::updated_at.eq(Utc::now().naive_utc()),
        ))
        .execute(conn)?;

        if updated == 0 {
            return Err(Error::from(diesel::result::Error::NotFound));
        }

        Ok(())
    }
}

impl HoldingsRepositoryTrait for HoldingsRepository {
    /// Positions with net shares > 0, ordered by symbol.
    ///
    /// Rows at zero or below are a bookkeeping artifact and never surface.
    fn get_open_positions(&self, user_id: &str) -> Result<Vec<Holding>> {
        let mut conn = get_connection(&self.pool)?;

        let results = holdings::table
            .filter(holdings::user_id.eq(user_id))
            .filter(holdings::shares.gt(0))
            .select(HoldingDB::as_select())
            .order(holdings::symbol.asc())
            .load::<HoldingDB>(&mut conn)?;

        Ok(results.into_iter().map(Holding::from).collect())
    }
}
