mod common;

use rust_decimal_macros::dec;

use papertrade_core::trading::{TradeAction, TradingError, TradingServiceTrait};
use papertrade_core::Error;

#[tokio::test]
async fn buy_debits_cash_and_records_the_trade() {
    let ctx = common::setup();
    let user = common::register(&ctx, "alice");

    let record = ctx.trading.buy(&user.id, "AAPL", 10).await.unwrap();
    assert_eq!(record.symbol, "AAPL");
    assert_eq!(record.shares, 10);
    assert_eq!(record.unit_price, dec!(150));
    assert_eq!(record.action, TradeAction::Buy);

    assert_eq!(common::cash_of(&ctx, &user.id), dec!(8500));

    let positions = common::open_positions(&ctx, &user.id);
    assert_eq!(positions.len(), 1);
    assert_eq!(positions[0].symbol, "AAPL");
    assert_eq!(positions[0].shares, 10);

    let trades = common::trades_of(&ctx, &user.id);
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].action, TradeAction::Buy);
    assert_eq!(trades[0].unit_price, dec!(150));
}

#[tokio::test]
async fn buy_rejects_unknown_and_blank_symbols() {
    let ctx = common::setup();
    let user = common::register(&ctx, "alice");

    let err = ctx.trading.buy(&user.id, "ZZZZ", 1).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Trading(TradingError::InvalidSymbol(_))
    ));

    let err = ctx.trading.buy(&user.id, "   ", 1).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Trading(TradingError::InvalidSymbol(_))
    ));

    assert_eq!(common::cash_of(&ctx, &user.id), dec!(10000));
    assert!(common::trades_of(&ctx, &user.id).is_empty());
}

#[tokio::test]
async fn non_positive_share_counts_are_rejected() {
    let ctx = common::setup();
    let user = common::register(&ctx, "alice");

    for shares in [0, -1, -100] {
        let err = ctx.trading.buy(&user.id, "AAPL", shares).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Trading(TradingError::InvalidQuantity(_))
        ));

        let err = ctx.trading.sell(&user.id, "AAPL", shares).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Trading(TradingError::InvalidQuantity(_))
        ));
    }

    assert_eq!(common::cash_of(&ctx, &user.id), dec!(10000));
    assert!(common::open_positions(&ctx, &user.id).is_empty());
    assert!(common::trades_of(&ctx, &user.id).is_empty());
}

#[tokio::test]
async fn buy_rejects_insufficient_funds_without_touching_state() {
    let ctx = common::setup();
    let user = common::register(&ctx, "alice");

    // 100 x 150 = 15,000 against a 10,000 balance
    let err = ctx.trading.buy(&user.id, "AAPL", 100).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Trading(TradingError::InsufficientFunds { .. })
    ));

    assert_eq!(common::cash_of(&ctx, &user.id), dec!(10000));
    assert!(common::open_positions(&ctx, &user.id).is_empty());
    assert!(common::trades_of(&ctx, &user.id).is_empty());
}

#[tokio::test]
async fn buy_rejects_unknown_user() {
    let ctx = common::setup();

    let err = ctx.trading.buy("no-such-user", "AAPL", 1).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Trading(TradingError::UserNotFound(_))
    ));
}

#[tokio::test]
async fn oversell_fails_and_leaves_state_unchanged() {
    let ctx = common::setup();
    let user = common::register(&ctx, "alice");

    ctx.trading.buy(&user.id, "AAPL", 10).await.unwrap();

    let err = ctx.trading.sell(&user.id, "AAPL", 15).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Trading(TradingError::InsufficientShares {
            requested: 15,
            owned: 10,
            ..
        })
    ));

    assert_eq!(common::cash_of(&ctx, &user.id), dec!(8500));
    let positions = common::open_positions(&ctx, &user.id);
    assert_eq!(positions.len(), 1);
    assert_eq!(positions[0].shares, 10);
    assert_eq!(common::trades_of(&ctx, &user.id).len(), 1);
}

#[tokio::test]
async fn selling_with_no_position_is_insufficient_shares() {
    let ctx = common::setup();
    let user = common::register(&ctx, "alice");

    let err = ctx.trading.sell(&user.id, "AAPL", 1).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Trading(TradingError::InsufficientShares { owned: 0, .. })
    ));
}

#[tokio::test]
async fn sell_credits_cash_and_reduces_the_holding() {
    let ctx = common::setup();
    let user = common::register(&ctx, "alice");

    ctx.trading.buy(&user.id, "AAPL", 10).await.unwrap();
    let record = ctx.trading.sell(&user.id, "AAPL", 4).await.unwrap();
    assert_eq!(record.action, TradeAction::Sell);
    assert_eq!(record.shares, 4);

    // 10,000 - 1,500 + 600
    assert_eq!(common::cash_of(&ctx, &user.id), dec!(9100));
    assert_eq!(common::open_positions(&ctx, &user.id)[0].shares, 6);
    assert_eq!(common::trades_of(&ctx, &user.id).len(), 2);
}

#[tokio::test]
async fn buy_sell_round_trip_restores_cash_at_constant_price() {
    let ctx = common::setup();
    let user = common::register(&ctx, "alice");

    ctx.trading.buy(&user.id, "NFLX", 7).await.unwrap();
    ctx.trading.sell(&user.id, "NFLX", 7).await.unwrap();

    assert_eq!(common::cash_of(&ctx, &user.id), dec!(10000));
    // The emptied position never surfaces again.
    assert!(common::open_positions(&ctx, &user.id).is_empty());
    assert_eq!(common::trades_of(&ctx, &user.id).len(), 2);
}

#[tokio::test]
async fn symbol_case_never_fragments_a_holding() {
    let ctx = common::setup();
    let user = common::register(&ctx, "alice");

    ctx.trading.buy(&user.id, "aapl", 10).await.unwrap();
    ctx.trading.buy(&user.id, "AaPl", 5).await.unwrap();

    let positions = common::open_positions(&ctx, &user.id);
    assert_eq!(positions.len(), 1);
    assert_eq!(positions[0].symbol, "AAPL");
    assert_eq!(positions[0].shares, 15);

    ctx.trading.sell(&user.id, "AAPL", 15).await.unwrap();
    assert!(common::open_positions(&ctx, &user.id).is_empty());
}

#[tokio::test]
async fn sell_fails_when_the_symbol_no_longer_resolves() {
    let ctx = common::setup();
    let user = common::register(&ctx, "alice");

    ctx.trading.buy(&user.id, "AAPL", 10).await.unwrap();
    ctx.provider.remove_quote("AAPL");

    let err = ctx.trading.sell(&user.id, "AAPL", 5).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Trading(TradingError::InvalidSymbol(_))
    ));

    // Nothing moved.
    assert_eq!(common::cash_of(&ctx, &user.id), dec!(8500));
    assert_eq!(common::open_positions(&ctx, &user.id)[0].shares, 10);
}

#[tokio::test]
async fn trade_records_keep_the_price_at_execution_time() {
    let ctx = common::setup();
    let user = common::register(&ctx, "alice");

    ctx.trading.buy(&user.id, "AAPL", 10).await.unwrap();
    ctx.provider.set_quote("AAPL", "Apple Inc.", dec!(160));
    ctx.trading.sell(&user.id, "AAPL", 10).await.unwrap();

    let trades = common::trades_of(&ctx, &user.id);
    assert_eq!(trades[0].unit_price, dec!(150));
    assert_eq!(trades[1].unit_price, dec!(160));

    // 10,000 - 1,500 + 1,600
    assert_eq!(common::cash_of(&ctx, &user.id), dec!(10100));
}
