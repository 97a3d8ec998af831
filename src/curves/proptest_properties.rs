//! Property-based tests for the curve family.
//!
//! 1. **No free round trip**: buying `n` then selling `n` at the new spot
//!    never returns more than was paid, with or without fees.
//! 2. **Price direction**: buys never lower the spot price, sells never
//!    raise it.
//! 3. **Fee accounting**: fee amounts are exactly `notional * fraction`
//!    (floor) and `value` is `notional` plus or minus both fees.
//! 4. **Size monotonicity**: buying more items never costs less.
//! 5. **Valid post-trade spot**: every successful quote leaves a spot price
//!    the curve itself accepts.

use proptest::prelude::*;

use super::{CurveBox, MIN_PRICE};
use crate::domain::{Amount, CurveKind, FeeSchedule, Fraction, Rounding};
use crate::math::{mul_div, WAD};
use crate::traits::Curve;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn curve(kind: CurveKind) -> CurveBox {
    let Ok(c) = CurveBox::from_kind(kind) else {
        panic!("compiled curve");
    };
    c
}

/// Spot prices between 1 gwei and 1000 units.
fn spot_strategy() -> impl Strategy<Value = Amount> {
    (MIN_PRICE.get()..=1_000 * WAD).prop_map(Amount::new)
}

/// Delta valid for `kind`, in a range that keeps quotes representable.
fn delta_strategy(kind: CurveKind) -> BoxedStrategy<Amount> {
    match kind {
        CurveKind::Linear => (0u128..=10 * WAD).prop_map(Amount::new).boxed(),
        CurveKind::Exponential => (WAD + WAD / 1_000..=2 * WAD)
            .prop_map(Amount::new)
            .boxed(),
        CurveKind::ConstantProduct => (WAD..=1_000 * WAD).prop_map(Amount::new).boxed(),
    }
}

fn kind_strategy() -> impl Strategy<Value = CurveKind> {
    prop_oneof![
        Just(CurveKind::Linear),
        Just(CurveKind::Exponential),
        Just(CurveKind::ConstantProduct),
    ]
}

fn case_strategy() -> impl Strategy<Value = (CurveKind, Amount, Amount, u32)> {
    kind_strategy().prop_flat_map(|kind| (Just(kind), spot_strategy(), delta_strategy(kind), 1u32..=20))
}

/// Trade fee up to 50 %, protocol fee up to 10 %.
fn fee_strategy() -> impl Strategy<Value = FeeSchedule> {
    (0u128..=50, 0u128..=10)
        .prop_map(|(t, p)| FeeSchedule::new(Fraction::percent(t), Fraction::percent(p)))
}

// ---------------------------------------------------------------------------
// Property 1: No free round trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_round_trip_never_profits(
        (kind, spot, delta, n) in case_strategy(),
        fees in fee_strategy(),
    ) {
        let c = curve(kind);
        let Ok(buy) = c.buy_info(spot, delta, n, &fees) else {
            return Ok(());
        };
        let Ok(sell) = c.sell_info(buy.new_spot_price(), delta, n, &fees) else {
            return Ok(());
        };
        prop_assert!(
            sell.value() <= buy.value(),
            "{kind}: sold for {} after buying for {}",
            sell.value(), buy.value()
        );
        prop_assert!(sell.notional() <= buy.notional());
    }
}

// ---------------------------------------------------------------------------
// Property 2: Price direction
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_buy_raises_sell_lowers(
        (kind, spot, delta, n) in case_strategy(),
    ) {
        let c = curve(kind);
        if let Ok(buy) = c.buy_info(spot, delta, n, &FeeSchedule::NONE) {
            prop_assert!(buy.new_spot_price() >= spot);
        }
        if let Ok(sell) = c.sell_info(spot, delta, n, &FeeSchedule::NONE) {
            prop_assert!(sell.new_spot_price() <= spot);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Fee accounting
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_fees_are_exact_fractions(
        (kind, spot, delta, n) in case_strategy(),
        fees in fee_strategy(),
    ) {
        let c = curve(kind);
        let expected = |notional: Amount, fraction: Fraction| {
            mul_div(notional.get(), fraction.get(), WAD, Rounding::Down).map(Amount::new)
        };
        if let Ok(q) = c.buy_info(spot, delta, n, &fees) {
            prop_assert_eq!(Some(q.protocol_fee()), expected(q.notional(), fees.protocol_fee));
            prop_assert_eq!(Some(q.trade_fee()), expected(q.notional(), fees.trade_fee));
            prop_assert_eq!(
                q.value().get(),
                q.notional().get() + q.trade_fee().get() + q.protocol_fee().get()
            );
        }
        if let Ok(q) = c.sell_info(spot, delta, n, &fees) {
            prop_assert_eq!(Some(q.protocol_fee()), expected(q.notional(), fees.protocol_fee));
            prop_assert_eq!(Some(q.trade_fee()), expected(q.notional(), fees.trade_fee));
            prop_assert_eq!(
                q.value().get() + q.trade_fee().get() + q.protocol_fee().get(),
                q.notional().get()
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: Size monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_more_items_cost_more(
        (kind, spot, delta, n) in case_strategy(),
    ) {
        let c = curve(kind);
        let (Ok(small), Ok(large)) = (
            c.buy_info(spot, delta, n, &FeeSchedule::NONE),
            c.buy_info(spot, delta, n + 1, &FeeSchedule::NONE),
        ) else {
            return Ok(());
        };
        prop_assert!(large.value() >= small.value());
    }
}

// ---------------------------------------------------------------------------
// Property 5: Valid post-trade spot
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_new_spot_passes_validation(
        (kind, spot, delta, n) in case_strategy(),
        low_spot in MIN_PRICE.get()..=10 * MIN_PRICE.get(),
    ) {
        let c = curve(kind);
        for start in [spot, Amount::new(low_spot)] {
            if let Ok(buy) = c.buy_info(start, delta, n, &FeeSchedule::NONE) {
                prop_assert!(c.validate_spot_price(buy.new_spot_price()));
            }
            if let Ok(sell) = c.sell_info(start, delta, n, &FeeSchedule::NONE) {
                prop_assert!(
                    c.validate_spot_price(sell.new_spot_price()),
                    "{kind}: sell of {n} from {start} left spot {}",
                    sell.new_spot_price()
                );
            }
        }
    }
}
