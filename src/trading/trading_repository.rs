use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use super::trading_model::{NewTrade, TradeRecord, TradeRecordDB};
use super::trading_traits::TradeRepositoryTrait;
use crate::db::{get_connection, DbPool};
use crate::schema::trades;
use crate::Result;

/// Repository for the append-only trade history
pub struct TradeRepository {
    pool: Arc<DbPool>,
}

impl TradeRepository {
    /// Creates a new TradeRepository instance
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Appends a trade record inside an open transaction scope.
    pub fn insert_in_transaction(
        conn: &mut SqliteConnection,
        new_trade: NewTrade,
    ) -> Result<TradeRecord> {
        let trade_db = TradeRecordDB {
            id: Uuid::new_v4().to_string(),
            user_id: new_trade.user_id,
            symbol: new_trade.symbol,
            shares: new_trade.shares,
            unit_price: new_trade.unit_price.to_string(),
            action: new_trade.action.as_str().to_string(),
            executed_at: Utc::now().naive_utc(),
        };

        diesel::insert_into(trades::table)
            .values(&trade_db)
            .execute(conn)?;

        trade_db.try_into()
    }
}

impl TradeRepositoryTrait for TradeRepository {
    /// All trades for a user in insertion (chronological) order
    fn get_trades_for_user(&self, user_id: &str) -> Result<Vec<TradeRecord>> {
        let mut conn = get_connection(&self.pool)?;

        let results = trades::table
            .filter(trades::user_id.eq(user_id))
            .select(TradeRecordDB::as_select())
            .order(trades::executed_at.asc())
            .load::<TradeRecordDB>(&mut conn)?;

        results.into_iter().map(TradeRecord::try_from).collect()
    }
}
