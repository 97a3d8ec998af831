//! Priced trades produced by curves.

use serde::{Deserialize, Serialize};

use super::{Amount, Fraction, Rounding};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;

/// Fee fractions applied on top of a curve's notional price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FeeSchedule {
    /// Pool-specific fee, retained by Trade pools.
    pub trade_fee: Fraction,
    /// Factory-wide fee, paid to the protocol fee recipient.
    pub protocol_fee: Fraction,
}

impl FeeSchedule {
    /// No fees at all.
    pub const NONE: Self = Self {
        trade_fee: Fraction::ZERO,
        protocol_fee: Fraction::ZERO,
    };

    /// Creates a fee schedule.
    #[must_use]
    pub const fn new(trade_fee: Fraction, protocol_fee: Fraction) -> Self {
        Self {
            trade_fee,
            protocol_fee,
        }
    }
}

/// The priced outcome of buying or selling a number of items against a
/// curve.
///
/// `notional` is the curve price before fees.  `value` is what crosses the
/// pool boundary: for buys the buyer pays
/// `value = notional + trade_fee + protocol_fee`, for sells the seller
/// receives `value = notional - trade_fee - protocol_fee`.
///
/// # Invariants
///
/// - `value > 0`.
/// - Fee amounts are `notional * fraction`, rounded down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurveQuote {
    new_spot_price: Amount,
    notional: Amount,
    value: Amount,
    trade_fee: Amount,
    protocol_fee: Amount,
}

impl CurveQuote {
    /// Builds a buy-side quote by adding fees to `notional`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::CurveError`] if the notional is zero or the
    /// total does not fit in an [`Amount`].
    pub fn buy(
        new_spot_price: Amount,
        notional: Amount,
        fees: &FeeSchedule,
    ) -> crate::error::Result<Self> {
        if notional.is_zero() {
            return Err(AmmError::CurveError("zero buy price"));
        }
        let (trade_fee, protocol_fee) = fee_amounts(notional, fees)?;
        let value = notional
            .safe_add(&trade_fee)
            .and_then(|v| v.safe_add(&protocol_fee))
            .map_err(|_| AmmError::CurveError("buy value overflow"))?;
        Ok(Self {
            new_spot_price,
            notional,
            value,
            trade_fee,
            protocol_fee,
        })
    }

    /// Builds a sell-side quote by removing fees from `notional`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::CurveError`] if fees consume the whole notional.
    pub fn sell(
        new_spot_price: Amount,
        notional: Amount,
        fees: &FeeSchedule,
    ) -> crate::error::Result<Self> {
        let (trade_fee, protocol_fee) = fee_amounts(notional, fees)?;
        let value = notional
            .safe_sub(&trade_fee)
            .and_then(|v| v.safe_sub(&protocol_fee))
            .map_err(|_| AmmError::CurveError("fees exceed sell price"))?;
        if value.is_zero() {
            return Err(AmmError::CurveError("zero sell output"));
        }
        Ok(Self {
            new_spot_price,
            notional,
            value,
            trade_fee,
            protocol_fee,
        })
    }

    /// Spot price after the trade.
    #[must_use]
    pub const fn new_spot_price(&self) -> Amount {
        self.new_spot_price
    }

    /// Curve price before fees.
    #[must_use]
    pub const fn notional(&self) -> Amount {
        self.notional
    }

    /// Amount paid by the buyer or received by the seller.
    #[must_use]
    pub const fn value(&self) -> Amount {
        self.value
    }

    /// Trade-fee amount.
    #[must_use]
    pub const fn trade_fee(&self) -> Amount {
        self.trade_fee
    }

    /// Protocol-fee amount.
    #[must_use]
    pub const fn protocol_fee(&self) -> Amount {
        self.protocol_fee
    }
}

fn fee_amounts(notional: Amount, fees: &FeeSchedule) -> crate::error::Result<(Amount, Amount)> {
    let trade = fees
        .trade_fee
        .apply(notional, Rounding::Down)
        .map_err(|_| AmmError::CurveError("trade fee overflow"))?;
    let protocol = fees
        .protocol_fee
        .apply(notional, Rounding::Down)
        .map_err(|_| AmmError::CurveError("protocol fee overflow"))?;
    Ok((trade, protocol))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn fees(trade: u128, protocol: u128) -> FeeSchedule {
        FeeSchedule::new(Fraction::percent(trade), Fraction::percent(protocol))
    }

    #[test]
    fn buy_adds_fees() {
        let Ok(q) = CurveQuote::buy(Amount::units(2), Amount::units(1), &fees(10, 1)) else {
            panic!("buy quote");
        };
        assert_eq!(q.trade_fee(), Amount::ratio(1, 10));
        assert_eq!(q.protocol_fee(), Amount::ratio(1, 100));
        assert_eq!(q.value(), Amount::ratio(111, 100));
        assert_eq!(q.new_spot_price(), Amount::units(2));
        assert_eq!(q.notional(), Amount::units(1));
    }

    #[test]
    fn sell_removes_fees() {
        let Ok(q) = CurveQuote::sell(Amount::ZERO, Amount::units(1), &fees(0, 1)) else {
            panic!("sell quote");
        };
        assert_eq!(q.value(), Amount::ratio(99, 100));
    }

    #[test]
    fn zero_notional_rejected() {
        assert!(matches!(
            CurveQuote::buy(Amount::ZERO, Amount::ZERO, &FeeSchedule::NONE),
            Err(AmmError::CurveError(_))
        ));
        assert!(matches!(
            CurveQuote::sell(Amount::ZERO, Amount::ZERO, &FeeSchedule::NONE),
            Err(AmmError::CurveError(_))
        ));
    }

    #[test]
    fn fees_consuming_output_rejected() {
        assert!(matches!(
            CurveQuote::sell(Amount::ZERO, Amount::units(1), &fees(95, 10)),
            Err(AmmError::CurveError(_))
        ));
    }

    #[test]
    fn buy_overflow_is_curve_error() {
        assert!(matches!(
            CurveQuote::buy(Amount::ZERO, Amount::MAX, &fees(1, 0)),
            Err(AmmError::CurveError(_))
        ));
    }
}
