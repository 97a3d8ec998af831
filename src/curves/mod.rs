//! Feature-gated pricing curves and the [`CurveBox`] dispatch enum.
//!
//! | Feature | Curve | Delta meaning |
//! |---------|-------|---------------|
//! | `linear` | [`LinearCurve`] | Additive step in wei |
//! | `exponential` | [`ExponentialCurve`] | WAD multiplier, `> 1.0` |
//! | `constant-product` | [`ConstantProductCurve`] | WAD-scaled virtual item reserve |

use crate::domain::Amount;

#[cfg(feature = "constant-product")]
pub mod constant_product;
#[cfg(feature = "exponential")]
pub mod exponential;
#[cfg(feature = "linear")]
pub mod linear;

mod curve_box;

#[cfg(all(test, feature = "all-curves"))]
mod proptest_properties;

#[cfg(feature = "constant-product")]
pub use constant_product::ConstantProductCurve;
pub use curve_box::CurveBox;
#[cfg(feature = "exponential")]
pub use exponential::{ExponentialCurve, MAX_SPOT_PRICE};
#[cfg(feature = "linear")]
pub use linear::LinearCurve;

/// Price floor (1 gwei) for curves whose math degenerates near zero.
pub const MIN_PRICE: Amount = Amount::new(1_000_000_000);
