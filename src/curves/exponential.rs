//! Exponential bonding curve.
//!
//! `delta` is a WAD-scaled multiplier strictly greater than one.  Each item
//! bought multiplies the spot price by `delta`; each item sold divides it.
//!
//! ```text
//! buy  n:  input  = s·d·(dⁿ − 1)/(d − 1)      new spot = s·dⁿ
//! sell n:  output = s·(1 − d⁻ⁿ)/(1 − d⁻¹)     new spot = max(s·d⁻ⁿ, MIN_PRICE)
//! ```
//!
//! Powers are computed with rounding in the pool's favour on both sides,
//! so a buy followed by a sell of the same size never pays out more than
//! it took in.

use tracing::debug;

use crate::domain::{Amount, CurveKind, Rounding};
use crate::error::AmmError;
use crate::math::{mul_div, wad_div, wad_pow, CheckedArithmetic, WAD};
use crate::traits::{Curve, Pricing};

use super::MIN_PRICE;

/// Highest spot price accepted by the exponential curve.
pub const MAX_SPOT_PRICE: Amount = Amount::new(1_000_000_000_000_000_000_000_000_000_000_000_000);

/// Multiplicative-step curve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExponentialCurve;

impl ExponentialCurve {
    /// Creates the curve.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn range_error() -> AmmError {
    AmmError::CurveError("price out of representable range")
}

impl Curve for ExponentialCurve {
    fn kind(&self) -> CurveKind {
        CurveKind::Exponential
    }

    fn validate_spot_price(&self, value: Amount) -> bool {
        value >= MIN_PRICE && value <= MAX_SPOT_PRICE
    }

    fn validate_delta(&self, value: Amount) -> bool {
        value.get() > WAD
    }

    fn price_buy(
        &self,
        spot_price: Amount,
        delta: Amount,
        num_items: u32,
    ) -> Result<Pricing, AmmError> {
        if !self.validate_delta(delta) {
            return Err(AmmError::CurveError("delta must exceed one"));
        }
        let d = delta.get();
        let pow_up = wad_pow(d, num_items, Rounding::Up).ok_or_else(range_error)?;
        let pow_down = wad_pow(d, num_items, Rounding::Down).ok_or_else(range_error)?;

        let new_spot_price = spot_price.safe_mul_div(pow_down, WAD, Rounding::Down)?;
        if new_spot_price > MAX_SPOT_PRICE {
            debug!(%spot_price, %delta, num_items, "exponential buy exceeds max spot price");
            return Err(AmmError::CurveError("spot price overflow"));
        }
        let buy_spot = spot_price.safe_mul_div(d, WAD, Rounding::Up)?;
        let notional = buy_spot.safe_mul_div(pow_up - WAD, d - WAD, Rounding::Up)?;
        Ok(Pricing {
            new_spot_price,
            notional,
        })
    }

    fn price_sell(
        &self,
        spot_price: Amount,
        delta: Amount,
        num_items: u32,
    ) -> Result<Pricing, AmmError> {
        if !self.validate_delta(delta) {
            return Err(AmmError::CurveError("delta must exceed one"));
        }
        let d = delta.get();
        let inv_down = wad_div(WAD, d, Rounding::Down).ok_or_else(range_error)?;
        let inv_up = wad_div(WAD, d, Rounding::Up).ok_or_else(range_error)?;
        let inv_pow_down = wad_pow(inv_down, num_items, Rounding::Down).ok_or_else(range_error)?;
        let inv_pow_up = wad_pow(inv_up, num_items, Rounding::Up).ok_or_else(range_error)?;

        let decayed = mul_div(spot_price.get(), inv_pow_down, WAD, Rounding::Down)
            .map(Amount::new)
            .ok_or_else(range_error)?;
        let new_spot_price = decayed.max(MIN_PRICE);

        let numerator = WAD.saturating_sub(inv_pow_up);
        let notional = spot_price.safe_mul_div(numerator, WAD - inv_down, Rounding::Down)?;
        Ok(Pricing {
            new_spot_price,
            notional,
        })
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{FeeSchedule, Fraction};

    fn one_and_half() -> Amount {
        Amount::ratio(3, 2)
    }

    #[test]
    fn validation_bounds() {
        let c = ExponentialCurve::new();
        assert!(!c.validate_spot_price(Amount::new(10_000_000)));
        assert!(c.validate_spot_price(MIN_PRICE));
        assert!(c.validate_spot_price(MAX_SPOT_PRICE));
        assert!(!c.validate_spot_price(Amount::new(MAX_SPOT_PRICE.get() + 1)));
        assert!(!c.validate_delta(Amount::ONE_UNIT));
        assert!(!c.validate_delta(Amount::new(10_000_000)));
        assert!(c.validate_delta(Amount::new(WAD + 1)));
    }

    #[test]
    fn buy_one_item() {
        let Ok(p) = ExponentialCurve.price_buy(Amount::units(1), one_and_half(), 1) else {
            panic!("price");
        };
        assert_eq!(p.notional, one_and_half());
        assert_eq!(p.new_spot_price, one_and_half());
    }

    #[test]
    fn buy_one_item_with_protocol_fee() {
        let fees = FeeSchedule::new(Fraction::ZERO, Fraction::percent(1));
        let Ok(q) = ExponentialCurve.buy_info(Amount::units(1), one_and_half(), 1, &fees) else {
            panic!("quote");
        };
        assert_eq!(q.value(), Amount::ratio(1515, 1000));
    }

    #[test]
    fn buy_two_items_is_geometric_series() {
        // 2 + 4 at delta 2
        let Ok(p) = ExponentialCurve.price_buy(Amount::units(1), Amount::units(2), 2) else {
            panic!("price");
        };
        assert_eq!(p.notional, Amount::units(6));
        assert_eq!(p.new_spot_price, Amount::units(4));
    }

    #[test]
    fn sell_two_items() {
        // 4 + 2 at delta 2
        let Ok(p) = ExponentialCurve.price_sell(Amount::units(4), Amount::units(2), 2) else {
            panic!("price");
        };
        assert_eq!(p.notional, Amount::units(6));
        assert_eq!(p.new_spot_price, Amount::units(1));
    }

    #[test]
    fn sell_clamps_spot_at_min_price() {
        let Ok(p) = ExponentialCurve.price_sell(MIN_PRICE, Amount::units(2), 3) else {
            panic!("price");
        };
        assert_eq!(p.new_spot_price, MIN_PRICE);
    }

    #[test]
    fn buy_beyond_max_spot_is_curve_error() {
        let result =
            ExponentialCurve.buy_info(MAX_SPOT_PRICE, Amount::units(2), 1, &FeeSchedule::NONE);
        assert!(matches!(result, Err(AmmError::CurveError(_))));
    }

    #[test]
    fn round_trip_never_profits() {
        let Ok(buy) = ExponentialCurve.price_buy(Amount::units(1), Amount::ratio(11, 10), 5) else {
            panic!("buy");
        };
        let Ok(sell) = ExponentialCurve.price_sell(buy.new_spot_price, Amount::ratio(11, 10), 5)
        else {
            panic!("sell");
        };
        assert!(sell.notional <= buy.notional);
    }
}
