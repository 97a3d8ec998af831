//! Linear bonding curve.
//!
//! Each item moves the spot price by a fixed additive `delta`:
//!
//! ```text
//! buy  n:  input  = n·s + n(n+1)/2·d      new spot = s + n·d
//! sell n:  output = n·s − n(n−1)/2·d      new spot = s − n·d
//! ```
//!
//! The first item bought costs `s + d`; the first item sold pays `s`.  A
//! sale must leave a positive spot price, so `n·d < s`.

use tracing::debug;

use crate::domain::{Amount, CurveKind};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;
use crate::traits::{Curve, Pricing};

/// Additive-step curve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearCurve;

impl LinearCurve {
    /// Creates the curve.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// `n(n+1)/2` for the buy side and `n(n−1)/2` for the sell side.
const fn triangular(n: u32, shift_up: bool) -> u128 {
    let n = n as u128;
    if shift_up {
        n * (n + 1) / 2
    } else {
        n * n.saturating_sub(1) / 2
    }
}

impl Curve for LinearCurve {
    fn kind(&self) -> CurveKind {
        CurveKind::Linear
    }

    fn validate_spot_price(&self, value: Amount) -> bool {
        !value.is_zero()
    }

    fn validate_delta(&self, _value: Amount) -> bool {
        true
    }

    fn price_buy(
        &self,
        spot_price: Amount,
        delta: Amount,
        num_items: u32,
    ) -> Result<Pricing, AmmError> {
        let n = u128::from(num_items);
        let new_spot_price = spot_price.safe_add(&delta.safe_mul_u128(n)?)?;
        let notional = spot_price
            .safe_mul_u128(n)?
            .safe_add(&delta.safe_mul_u128(triangular(num_items, true))?)?;
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
        let n = u128::from(num_items);
        let drop = delta
            .safe_mul_u128(n)
            .map_err(|_| AmmError::CurveError("spot price too low for sale size"))?;
        if drop >= spot_price {
            debug!(%spot_price, %delta, num_items, "linear sell would leave a zero spot price");
            return Err(AmmError::CurveError("spot price too low for sale size"));
        }
        let new_spot_price = spot_price.safe_sub(&drop)?;
        let notional = spot_price
            .safe_mul_u128(n)?
            .safe_sub(&delta.safe_mul_u128(triangular(num_items, false))?)?;
        Ok(Pricing {
            new_spot_price,
            notional,
        })
    }
}
