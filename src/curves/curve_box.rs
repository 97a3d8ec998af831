//! Enum dispatch over the compiled curves.

#[cfg(feature = "constant-product")]
use super::constant_product::ConstantProductCurve;
#[cfg(feature = "exponential")]
use super::exponential::ExponentialCurve;
#[cfg(feature = "linear")]
use super::linear::LinearCurve;

use crate::domain::{Amount, CurveKind};
use crate::error::AmmError;
use crate::traits::{Curve, Pricing};

/// Static-dispatch wrapper around every compiled curve.
///
/// A pair stores a `CurveBox` chosen at creation and never branches on its
/// variant.  Each variant is feature-gated like its curve module.
///
/// ```
/// use nft_amm::curves::CurveBox;
/// use nft_amm::domain::CurveKind;
/// use nft_amm::traits::Curve;
///
/// let curve = CurveBox::from_kind(CurveKind::Linear);
/// assert_eq!(curve.map(|c| c.kind()), Ok(CurveKind::Linear));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveBox {
    /// Additive step.
    #[cfg(feature = "linear")]
    Linear(LinearCurve),

    /// Multiplicative step.
    #[cfg(feature = "exponential")]
    Exponential(ExponentialCurve),

    /// Virtual reserves.
    #[cfg(feature = "constant-product")]
    ConstantProduct(ConstantProductCurve),
}

impl CurveBox {
    /// Instantiates the curve named by `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::CurveNotApproved`] if the crate was built
    /// without that curve's feature.
    pub fn from_kind(kind: CurveKind) -> Result<Self, AmmError> {
        match kind {
            #[cfg(feature = "linear")]
            CurveKind::Linear => Ok(Self::Linear(LinearCurve::new())),
            #[cfg(feature = "exponential")]
            CurveKind::Exponential => Ok(Self::Exponential(ExponentialCurve::new())),
            #[cfg(feature = "constant-product")]
            CurveKind::ConstantProduct => Ok(Self::ConstantProduct(ConstantProductCurve::new())),
            #[allow(unreachable_patterns)]
            _ => Err(AmmError::CurveNotApproved),
        }
    }
}

macro_rules! delegate {
    ($self:ident, $method:ident ( $($arg:expr),* )) => {
        match $self {
            #[cfg(feature = "linear")]
            CurveBox::Linear(c) => c.$method($($arg),*),
            #[cfg(feature = "exponential")]
            CurveBox::Exponential(c) => c.$method($($arg),*),
            #[cfg(feature = "constant-product")]
            CurveBox::ConstantProduct(c) => c.$method($($arg),*),
        }
    };
}

impl Curve for CurveBox {
    fn kind(&self) -> CurveKind {
        delegate!(self, kind())
    }

    fn validate_spot_price(&self, value: Amount) -> bool {
        delegate!(self, validate_spot_price(value))
    }

    fn validate_delta(&self, value: Amount) -> bool {
        delegate!(self, validate_delta(value))
    }

    fn price_buy(
        &self,
        spot_price: Amount,
        delta: Amount,
        num_items: u32,
    ) -> Result<Pricing, AmmError> {
        delegate!(self, price_buy(spot_price, delta, num_items))
    }

    fn price_sell(
        &self,
        spot_price: Amount,
        delta: Amount,
        num_items: u32,
    ) -> Result<Pricing, AmmError> {
        delegate!(self, price_sell(spot_price, delta, num_items))
    }
}

#[cfg(all(test, feature = "all-curves"))]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::FeeSchedule;

    #[test]
    fn from_kind_round_trips_identity() {
        for kind in CurveKind::ALL {
            let Ok(curve) = CurveBox::from_kind(kind) else {
                panic!("compiled curve");
            };
            assert_eq!(curve.kind(), kind);
        }
    }

    #[test]
    fn delegates_validation() {
        let Ok(exp) = CurveBox::from_kind(CurveKind::Exponential) else {
            panic!("exponential");
        };
        assert!(!exp.validate_delta(Amount::ONE_UNIT));
        let Ok(lin) = CurveBox::from_kind(CurveKind::Linear) else {
            panic!("linear");
        };
        assert!(lin.validate_delta(Amount::ONE_UNIT));
    }

    #[test]
    fn delegates_quotes() {
        let Ok(cp) = CurveBox::from_kind(CurveKind::ConstantProduct) else {
            panic!("constant product");
        };
        let Ok(q) = cp.buy_info(Amount::units(11), Amount::units(10), 2, &FeeSchedule::NONE)
        else {
            panic!("quote");
        };
        assert_eq!(q.value(), Amount::ratio(275, 100));
    }
}
