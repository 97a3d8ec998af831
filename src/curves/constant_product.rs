//! Constant-product curve over virtual reserves.
//!
//! The spot price is the virtual native-value reserve `x` and `delta` is
//! the virtual item reserve `y`, WAD-scaled (ten items = `10·10^18`).
//! Trades keep `x·y` constant on the value side:
//!
//! ```text
//! buy  n:  input  = ⌈x·n / (y − n)⌉      new spot = x + input
//! sell n:  output = ⌊x·n / (y + n)⌋      new spot = x − output
//! ```
//!
//! The item reserve is a parameter, not swap state: only the owner moves it
//! through `set_delta`.  Buying `n` requires `n < y`; a sale that would
//! leave `x` below [`MIN_PRICE`] is rejected.

use tracing::debug;

use crate::domain::{Amount, CurveKind, Rounding};
use crate::error::AmmError;
use crate::math::{CheckedArithmetic, WAD};
use crate::traits::{Curve, Pricing};

use super::MIN_PRICE;

/// Virtual-reserve `x·y = k` curve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstantProductCurve;

impl ConstantProductCurve {
    /// Creates the curve.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn scaled_items(num_items: u32) -> u128 {
    u128::from(num_items) * WAD
}

impl Curve for ConstantProductCurve {
    fn kind(&self) -> CurveKind {
        CurveKind::ConstantProduct
    }

    fn validate_spot_price(&self, value: Amount) -> bool {
        value >= MIN_PRICE
    }

    fn validate_delta(&self, value: Amount) -> bool {
        !value.is_zero()
    }

    fn price_buy(
        &self,
        spot_price: Amount,
        delta: Amount,
        num_items: u32,
    ) -> Result<Pricing, AmmError> {
        let items = scaled_items(num_items);
        if items >= delta.get() {
            return Err(AmmError::CurveError("not enough virtual items"));
        }
        let notional = spot_price.safe_mul_div(items, delta.get() - items, Rounding::Up)?;
        let new_spot_price = spot_price.safe_add(&notional)?;
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
        let items = scaled_items(num_items);
        let reserve_after = delta
            .get()
            .checked_add(items)
            .ok_or(AmmError::Overflow("item reserve overflow"))?;
        let notional = spot_price.safe_mul_div(items, reserve_after, Rounding::Down)?;
        let new_spot_price = spot_price.safe_sub(&notional)?;
        if new_spot_price < MIN_PRICE {
            debug!(%spot_price, %delta, num_items, "constant product sell below min price");
            return Err(AmmError::CurveError("spot price would fall below minimum"));
        }
        Ok(Pricing {
            new_spot_price,
            notional,
        })
    }
}
