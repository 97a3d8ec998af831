//! WAD-scaled fraction used for fee rates.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Amount, Rounding};
use crate::error::AmmError;
use crate::math::{mul_div, WAD};

/// A fraction expressed with 18 decimals (`10^18` = 100 %).
///
/// Trade fees and the protocol fee are `Fraction`s.  The value is
/// unbounded; callers decide which range is meaningful (see
/// [`is_below`](Self::is_below)).
///
/// Serialized as a decimal string so it survives formats without 128-bit
/// integers (TOML).
///
/// # Examples
///
/// ```
/// use nft_amm::domain::{Amount, Fraction, Rounding};
///
/// let one_percent = Fraction::percent(1);
/// let fee = one_percent.apply(Amount::units(2), Rounding::Down);
/// assert_eq!(fee.ok(), Some(Amount::ratio(2, 100)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fraction(u128);

impl Fraction {
    /// Zero (0 %).
    pub const ZERO: Self = Self(0);

    /// One (100 %).
    pub const ONE: Self = Self(WAD);

    /// Creates a fraction from its raw WAD-scaled value.
    #[must_use]
    pub const fn from_wad(value: u128) -> Self {
        Self(value)
    }

    /// Creates a whole-percent fraction (`percent(1)` = 1 %).
    #[must_use]
    pub const fn percent(value: u128) -> Self {
        Self(value.saturating_mul(WAD / 100))
    }

    /// Returns the raw WAD-scaled value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the fraction is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if `self < bound`.
    #[must_use]
    pub const fn is_below(&self, bound: Self) -> bool {
        self.0 < bound.0
    }

    /// Checked sum of two fractions.
    #[must_use]
    pub const fn checked_add(&self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Computes `amount * self / 10^18` with explicit rounding.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result does not fit in an
    /// [`Amount`].
    pub fn apply(&self, amount: Amount, rounding: Rounding) -> crate::error::Result<Amount> {
        if self.0 == 0 || amount.is_zero() {
            return Ok(Amount::ZERO);
        }
        mul_div(amount.get(), self.0, WAD, rounding)
            .map(Amount::new)
            .ok_or(AmmError::Overflow("fraction apply overflow"))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / WAD;
        let frac = self.0 % WAD;
        if frac == 0 {
            return write!(f, "{whole}");
        }
        let digits = format!("{frac:018}");
        write!(f, "{whole}.{}", digits.trim_end_matches('0'))
    }
}

impl FromStr for Fraction {
    type Err = AmmError;

    /// Parses the raw WAD-scaled integer (`"10000000000000000"` = 1 %).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u128>()
            .map(Self)
            .map_err(|_| AmmError::InvalidConfiguration("fraction must be a WAD-scaled integer"))
    }
}

impl Serialize for Fraction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Fraction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
