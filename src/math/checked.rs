//! Fallible arithmetic on [`Amount`] reporting [`AmmError`] variants.
//!
//! Curves and the pair settlement chain many operations; this trait lets
//! them use `?` instead of mapping every `Option` by hand.
//!
//! ```
//! use nft_amm::domain::{Amount, Rounding};
//! use nft_amm::math::CheckedArithmetic;
//!
//! let total = Amount::new(100).safe_add(&Amount::new(200));
//! assert_eq!(total, Ok(Amount::new(300)));
//! let scaled = Amount::MAX.safe_mul_div(3, 4, Rounding::Down);
//! assert!(scaled.is_ok());
//! ```

use super::{mul_div, Rounding};
use crate::domain::Amount;
use crate::error::AmmError;

/// Fallible arithmetic for value types.
///
/// All methods return a specific [`AmmError`] so callers can tell overflow
/// from underflow from division by zero.  Nothing saturates.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] on overflow.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked multiplication by a raw scalar.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] on overflow.
    fn safe_mul_u128(&self, factor: u128) -> Result<Self, AmmError>;

    /// Computes `self * numerator / denominator` through a 256-bit
    /// intermediate.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `denominator` is zero and
    /// [`AmmError::Overflow`] if the result does not fit.
    fn safe_mul_div(
        &self,
        numerator: u128,
        denominator: u128,
        rounding: Rounding,
    ) -> Result<Self, AmmError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("amount subtraction underflow"))
    }

    #[inline]
    fn safe_mul_u128(&self, factor: u128) -> Result<Self, AmmError> {
        self.get()
            .checked_mul(factor)
            .map(Amount::new)
            .ok_or(AmmError::Overflow("amount multiplication overflow"))
    }

    fn safe_mul_div(
        &self,
        numerator: u128,
        denominator: u128,
        rounding: Rounding,
    ) -> Result<Self, AmmError> {
        if denominator == 0 {
            return Err(AmmError::DivisionByZero);
        }
        mul_div(self.get(), numerator, denominator, rounding)
            .map(Amount::new)
            .ok_or(AmmError::Overflow("amount mul-div overflow"))
    }
}
