//! Identity of a pricing curve.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Names one of the pricing strategies.
///
/// The factory's allow-list and [`PairConfig`](crate::config::PairConfig)
/// refer to curves by kind; the behaviour lives in
/// [`CurveBox`](crate::curves::CurveBox).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveKind {
    /// Additive price step per item.
    Linear,
    /// Multiplicative price step per item.
    Exponential,
    /// Virtual-reserve `x * y = k` pricing.
    ConstantProduct,
}

impl CurveKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 3] = [Self::Linear, Self::Exponential, Self::ConstantProduct];

    /// Returns `true` if the crate was compiled with this curve.
    #[must_use]
    pub const fn is_compiled(&self) -> bool {
        match self {
            Self::Linear => cfg!(feature = "linear"),
            Self::Exponential => cfg!(feature = "exponential"),
            Self::ConstantProduct => cfg!(feature = "constant-product"),
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Linear => "linear",
            Self::Exponential => "exponential",
            Self::ConstantProduct => "constant_product",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_serde() {
        for kind in CurveKind::ALL {
            let json = serde_json::to_string(&kind).unwrap_or_default();
            assert_eq!(json, format!("\"{kind}\""));
        }
    }

    #[cfg(feature = "all-curves")]
    #[test]
    fn all_compiled_by_default() {
        assert!(CurveKind::ALL.iter().all(CurveKind::is_compiled));
    }
}
