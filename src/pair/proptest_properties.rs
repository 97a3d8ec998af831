//! Property-based tests for pair custody and accounting.
//!
//! 1. **Custody**: after any sequence of sells, buys and withdrawals the
//!    inventory snapshot is exactly the set of items the pair holds, for
//!    both inventory strategies, and native value is conserved.
//! 2. **At rest**: an NFT pool never keeps native value from a buy and a
//!    Token pool never keeps an item from a sell.
//! 3. **Fee accounting**: the buyer pays exactly the quote, the protocol
//!    receives exactly the quoted protocol fee, and the pair keeps exactly
//!    the quoted proceeds.

#![allow(clippy::panic)]

use proptest::prelude::*;

use super::test_support::*;
use super::Pair;
use crate::domain::{has_duplicates, Amount, CurveKind, Fraction, ItemId, PoolType};
use crate::error::AmmError;
use crate::traits::NativeBank;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum Op {
    Sell(u64),
    BuyAny(usize),
    BuyPick(usize),
    Withdraw(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1u64..=3).prop_map(Op::Sell),
        (1usize..=3).prop_map(Op::BuyAny),
        (0usize..8).prop_map(Op::BuyPick),
        (0usize..8).prop_map(Op::Withdraw),
    ]
}

fn kind_strategy() -> impl Strategy<Value = CurveKind> {
    prop_oneof![
        Just(CurveKind::Linear),
        Just(CurveKind::Exponential),
        Just(CurveKind::ConstantProduct),
    ]
}

fn sorted(mut v: Vec<ItemId>) -> Vec<ItemId> {
    v.sort_unstable();
    v
}

/// Applies `op` as the stranger (swaps) or the owner (withdrawals).
/// Failures are expected and must leave no trace.
fn apply(w: &mut World, pair: &mut Pair, op: &Op, next_id: &mut u64) -> Result<(), AmmError> {
    let budget = Amount::units(100);
    match *op {
        Op::Sell(k) => {
            let fresh: Vec<u64> = (*next_id..*next_id + k).collect();
            *next_id += k;
            w.give(&stranger(), &fresh);
            pair.swap_items_for_token(&mut w.ctx(stranger()), &ids(&fresh), Amount::ZERO, stranger())
                .map(|_| ())
        }
        Op::BuyAny(k) => pair
            .swap_token_for_any_items(
                &mut w.ctx(stranger()).with_value(budget),
                k,
                budget,
                stranger(),
            )
            .map(|_| ()),
        Op::BuyPick(i) => {
            let Some(id) = pair.nft_ids(&w.collection).get(i).copied() else {
                return Ok(());
            };
            pair.swap_token_for_items(
                &mut w.ctx(stranger()).with_value(budget),
                &[id],
                budget,
                stranger(),
            )
            .map(|_| ())
        }
        Op::Withdraw(i) => {
            let Some(id) = pair.nft_ids(&w.collection).get(i).copied() else {
                return Ok(());
            };
            pair.withdraw_items(&mut w.ctx(owner()), &[id])
        }
    }
}

fn check_custody(w: &World, pair: &Pair) -> Result<(), TestCaseError> {
    let snapshot = pair.nft_ids(&w.collection);
    prop_assert!(!has_duplicates(&snapshot));
    prop_assert_eq!(
        sorted(snapshot),
        sorted(w.collection.items_of(&pair.address()))
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// 1. Custody
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn snapshot_matches_custody(
        enumerable in any::<bool>(),
        kind in kind_strategy(),
        ops in prop::collection::vec(op_strategy(), 1..24),
    ) {
        let mut w = World::new(enumerable);
        let mut pair = w.pair(PoolType::Trade, kind, &[1, 2, 3, 4], Amount::units(50));
        let supply = w.bank.total_supply();
        let mut next_id = 1_000;

        for op in &ops {
            let spot = pair.spot_price();
            let held = sorted(pair.nft_ids(&w.collection));
            let balance = pair.balance(&w.bank);
            if apply(&mut w, &mut pair, op, &mut next_id).is_err() {
                prop_assert_eq!(pair.spot_price(), spot);
                prop_assert_eq!(sorted(pair.nft_ids(&w.collection)), held);
                prop_assert_eq!(pair.balance(&w.bank), balance);
            }
            check_custody(&w, &pair)?;
            prop_assert_eq!(w.bank.total_supply(), supply);
            prop_assert_eq!(pair.assets_recipient(), pair.address());
        }
    }
}

// ---------------------------------------------------------------------------
// 2. At rest
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn nft_pool_holds_no_value(
        kind in kind_strategy(),
        ops in prop::collection::vec(op_strategy(), 1..16),
    ) {
        let mut w = World::new(false);
        let mut pair = w.pair(PoolType::Nft, kind, &[1, 2, 3, 4, 5, 6], Amount::ZERO);
        let mut next_id = 1_000;
        for op in &ops {
            let _ = apply(&mut w, &mut pair, op, &mut next_id);
            prop_assert_eq!(pair.balance(&w.bank), Amount::ZERO);
            check_custody(&w, &pair)?;
        }
    }

    #[test]
    fn token_pool_holds_no_items(
        kind in kind_strategy(),
        ops in prop::collection::vec(op_strategy(), 1..16),
    ) {
        let mut w = World::new(true);
        let mut pair = w.pair(PoolType::Token, kind, &[], Amount::units(50));
        let mut next_id = 1_000;
        for op in &ops {
            let _ = apply(&mut w, &mut pair, op, &mut next_id);
            prop_assert_eq!(pair.held_count(&w.collection), 0);
        }
    }
}

// ---------------------------------------------------------------------------
// 3. Fee accounting
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn buy_and_sell_move_exact_quotes(
        kind in kind_strategy(),
        n in 1u32..=3,
        trade_pct in 0u128..=50,
        protocol_pct in 0u128..=10,
    ) {
        let mut w = World::new(false);
        let Ok(()) = w.protocol.set_fee(Fraction::percent(protocol_pct)) else {
            panic!("fee within bounds");
        };
        let config = w
            .config(PoolType::Trade, kind)
            .with_trade_fee(Fraction::percent(trade_pct))
            .with_items(ids(&[1, 2, 3, 4, 5]));
        let mut pair = w.pair_from(&config, Amount::units(500));
        let budget = Amount::units(100);

        let Ok(quote) = pair.quote_buy(n) else {
            return Ok(());
        };
        let buyer = w.bank.balance_of(&stranger());
        let protocol = w.bank.balance_of(&fee_recipient());
        let reserve = pair.balance(&w.bank);
        let Ok(record) = pair.swap_token_for_any_items(
            &mut w.ctx(stranger()).with_value(budget),
            n as usize,
            budget,
            stranger(),
        ) else {
            panic!("buy within budget");
        };
        prop_assert_eq!(record.amount_in, quote.value());
        prop_assert_eq!(buyer.saturating_sub(&w.bank.balance_of(&stranger())), quote.value());
        prop_assert_eq!(
            w.bank.balance_of(&fee_recipient()).saturating_sub(&protocol),
            quote.protocol_fee()
        );
        let kept = quote.notional().checked_add(&quote.trade_fee());
        prop_assert_eq!(Some(pair.balance(&w.bank).saturating_sub(&reserve)), kept);

        let Ok(quote) = pair.quote_sell(n) else {
            return Ok(());
        };
        let fresh: Vec<u64> = (100..100 + u64::from(n)).collect();
        w.give(&stranger(), &fresh);
        let seller = w.bank.balance_of(&stranger());
        let protocol = w.bank.balance_of(&fee_recipient());
        let reserve = pair.balance(&w.bank);
        let Ok(record) =
            pair.swap_items_for_token(&mut w.ctx(stranger()), &ids(&fresh), Amount::ZERO, stranger())
        else {
            panic!("sell against funded pair");
        };
        prop_assert_eq!(record.amount_out, quote.value());
        prop_assert_eq!(w.bank.balance_of(&stranger()).saturating_sub(&seller), quote.value());
        prop_assert_eq!(
            w.bank.balance_of(&fee_recipient()).saturating_sub(&protocol),
            quote.protocol_fee()
        );
        let paid = quote.value().checked_add(&quote.protocol_fee());
        prop_assert_eq!(Some(reserve.saturating_sub(&pair.balance(&w.bank))), paid);
    }
}
