use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

use papertrade_core::db::{self, DbPool};
use papertrade_core::holdings::{Holding, HoldingsRepository, HoldingsRepositoryTrait};
use papertrade_core::portfolio::PortfolioService;
use papertrade_core::quotes::StaticQuoteProvider;
use papertrade_core::trading::{TradeRecord, TradeRepository, TradeRepositoryTrait, TradingService};
use papertrade_core::users::{
    NewUser, User, UserRepository, UserRepositoryTrait, UserService, UserServiceTrait,
};

/// Everything a scenario needs: an isolated database with migrations applied,
/// a controllable quote provider, and the wired-up services.
pub struct TestContext {
    pub pool: Arc<DbPool>,
    pub provider: Arc<StaticQuoteProvider>,
    pub trading: TradingService,
    pub portfolio: PortfolioService,
    pub users: UserService,
    _data_dir: tempfile::TempDir,
}

pub fn setup() -> TestContext {
    let data_dir = tempfile::tempdir().expect("create temp dir");
    let db_path = db::init(data_dir.path().to_str().unwrap()).expect("init database");
    let pool = db::create_pool(&db_path).expect("create pool");
    db::run_migrations(&pool).expect("run migrations");

    let provider = Arc::new(
        StaticQuoteProvider::new()
            .with_quote("AAPL", "Apple Inc.", dec!(150))
            .with_quote("NFLX", "Netflix Inc.", dec!(85.50)),
    );

    let user_repository = Arc::new(UserRepository::new(pool.clone()));
    let trading = TradingService::new(pool.clone(), provider.clone());
    let portfolio = PortfolioService::new(
        user_repository.clone(),
        Arc::new(HoldingsRepository::new(pool.clone())),
        Arc::new(TradeRepository::new(pool.clone())),
        provider.clone(),
    );
    let users = UserService::new(user_repository);

    TestContext {
        pool,
        provider,
        trading,
        portfolio,
        users,
        _data_dir: data_dir,
    }
}

pub fn register(ctx: &TestContext, username: &str) -> User {
    ctx.users
        .register(NewUser {
            username: username.to_string(),
        })
        .expect("register user")
}

pub fn cash_of(ctx: &TestContext, user_id: &str) -> Decimal {
    UserRepository::new(ctx.pool.clone())
        .get_by_id(user_id)
        .expect("load user")
        .cash
}

pub fn open_positions(ctx: &TestContext, user_id: &str) -> Vec<Holding> {
    HoldingsRepository::new(ctx.pool.clone())
        .get_open_positions(user_id)
        .expect("load holdings")
}

pub fn trades_of(ctx: &TestContext, user_id: &str) -> Vec<TradeRecord> {
    TradeRepository::new(ctx.pool.clone())
        .get_trades_for_user(user_id)
        .expect("load trades")
}
