//! Rounding direction and rounding integer division.
//!
//! # Convention
//!
//! Rounding always favours the pool:
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Buy input | [`Rounding::Up`] |
//! | Sell output | [`Rounding::Down`] |
//! | Fee amount | [`Rounding::Down`] |
//!
//! Fees round down so that a quoted value is always
//! `notional ± fees` exactly, with the dust staying on the notional side.

/// Rounding direction for division.
///
/// ```
/// use nft_amm::domain::Rounding;
/// use nft_amm::math::div_round;
///
/// assert_eq!(div_round(10, 3, Rounding::Down), Some(3));
/// assert_eq!(div_round(10, 3, Rounding::Up), Some(4));
/// assert_eq!(div_round(10, 0, Rounding::Down), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Towards positive infinity (ceiling).
    Up,
    /// Towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }
}

/// Integer division of `u128` values with an explicit rounding direction.
///
/// Returns [`None`] if `denominator` is zero.
#[must_use]
pub const fn div_round(numerator: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    let q = numerator / denominator;
    match rounding {
        Rounding::Down => Some(q),
        // q + 1 cannot overflow: a remainder implies denominator > 1.
        Rounding::Up if numerator % denominator != 0 => Some(q + 1),
        Rounding::Up => Some(q),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn div_by_zero_returns_none() {
        assert_eq!(div_round(100, 0, Rounding::Down), None);
        assert_eq!(div_round(0, 0, Rounding::Up), None);
    }

    #[test]
    fn zero_numerator() {
        assert_eq!(div_round(0, 5, Rounding::Down), Some(0));
        assert_eq!(div_round(0, 5, Rounding::Up), Some(0));
    }

    #[test]
    fn exact_division_agrees() {
        assert_eq!(div_round(100, 10, Rounding::Down), Some(10));
        assert_eq!(div_round(100, 10, Rounding::Up), Some(10));
    }

    #[test]
    fn remainder_splits_directions() {
        assert_eq!(div_round(7, 2, Rounding::Down), Some(3));
        assert_eq!(div_round(7, 2, Rounding::Up), Some(4));
    }

    #[test]
    fn max_numerator_does_not_overflow() {
        assert_eq!(div_round(u128::MAX, 1, Rounding::Up), Some(u128::MAX));
        assert_eq!(
            div_round(u128::MAX, 2, Rounding::Up),
            Some(u128::MAX / 2 + 1)
        );
    }

    #[test]
    fn is_up() {
        assert!(Rounding::Up.is_up());
        assert!(!Rounding::Down.is_up());
    }
}
