//! Pricing-curve abstraction.
//!
//! A [`Curve`] is a pure function of `(spot_price, delta, num_items)`.  It
//! holds no state and has no side effects; the pair stores the parameters
//! and feeds them back on every call.
//!
//! Implementors provide the notional pricing ([`Curve::price_buy`],
//! [`Curve::price_sell`]) and parameter validation.  Fee application and
//! the shared error policy live in the provided [`Curve::buy_info`] and
//! [`Curve::sell_info`], so every strategy quotes fees identically:
//!
//! ```text
//! buy  value = notional + trade_fee + protocol_fee
//! sell value = notional - trade_fee - protocol_fee
//! fee        = notional * fraction / 10^18   (rounded down)
//! ```
//!
//! # Monotonicity
//!
//! Buying never lowers the spot price and selling never raises it.  A buy
//! followed by a sell of the same quantity at the new spot price never pays
//! out more than was paid in.

use crate::domain::{Amount, CurveKind, CurveQuote, FeeSchedule};
use crate::error::AmmError;

/// Notional outcome of a trade before fees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pricing {
    /// Spot price after the trade.
    pub new_spot_price: Amount,
    /// Price of the items, fees excluded.
    pub notional: Amount,
}

/// A bonding curve.
///
/// # Errors
///
/// Pricing methods fail with [`AmmError::CurveError`] when the request
/// cannot be priced: zero items, insufficient virtual reserves, or
/// arithmetic outside the representable range.
pub trait Curve {
    /// Identity of this strategy.
    fn kind(&self) -> CurveKind;

    /// Returns `true` if `value` is a usable spot price.
    fn validate_spot_price(&self, value: Amount) -> bool;

    /// Returns `true` if `value` is a usable delta.
    fn validate_delta(&self, value: Amount) -> bool;

    /// Prices buying `num_items` (> 0) from the pool.
    ///
    /// # Errors
    ///
    /// See the trait-level documentation.
    fn price_buy(
        &self,
        spot_price: Amount,
        delta: Amount,
        num_items: u32,
    ) -> Result<Pricing, AmmError>;

    /// Prices selling `num_items` (> 0) to the pool.
    ///
    /// # Errors
    ///
    /// See the trait-level documentation.
    fn price_sell(
        &self,
        spot_price: Amount,
        delta: Amount,
        num_items: u32,
    ) -> Result<Pricing, AmmError>;

    /// Quotes a buy of `num_items`, fees included.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::CurveError`] if `num_items` is zero, the curve
    /// cannot price the request, or the quoted value is zero.
    fn buy_info(
        &self,
        spot_price: Amount,
        delta: Amount,
        num_items: u32,
        fees: &FeeSchedule,
    ) -> Result<CurveQuote, AmmError> {
        if num_items == 0 {
            return Err(AmmError::CurveError("zero items requested"));
        }
        let pricing = self
            .price_buy(spot_price, delta, num_items)
            .map_err(as_curve_error)?;
        CurveQuote::buy(pricing.new_spot_price, pricing.notional, fees)
    }

    /// Quotes a sell of `num_items`, fees included.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::CurveError`] if `num_items` is zero, the curve
    /// cannot price the request, or the quoted value is zero.
    fn sell_info(
        &self,
        spot_price: Amount,
        delta: Amount,
        num_items: u32,
        fees: &FeeSchedule,
    ) -> Result<CurveQuote, AmmError> {
        if num_items == 0 {
            return Err(AmmError::CurveError("zero items requested"));
        }
        let pricing = self
            .price_sell(spot_price, delta, num_items)
            .map_err(as_curve_error)?;
        CurveQuote::sell(pricing.new_spot_price, pricing.notional, fees)
    }
}

/// Folds arithmetic failures into [`AmmError::CurveError`].
fn as_curve_error(err: AmmError) -> AmmError {
    if err.is_arithmetic() {
        AmmError::CurveError("price out of representable range")
    } else {
        err
    }
}
