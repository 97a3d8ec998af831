//! WAD (`10^18`) fixed-point helpers over a 256-bit intermediate.
//!
//! Curve pricing multiplies two `u128` quantities before dividing, which
//! overflows `u128` for realistic prices.  Every helper widens to [`U256`],
//! divides with an explicit [`Rounding`], and narrows back, returning
//! [`None`] when the result does not fit in `u128` or the divisor is zero.

use uint::construct_uint;

use super::Rounding;

construct_uint! {
    /// 256-bit unsigned integer for intermediate products.
    pub struct U256(4);
}

/// One whole unit in fixed-point representation.
pub const WAD: u128 = 1_000_000_000_000_000_000;

/// Computes `a * b / denominator` with an explicit rounding direction.
///
/// ```
/// use nft_amm::domain::Rounding;
/// use nft_amm::math::mul_div;
///
/// assert_eq!(mul_div(u128::MAX, 2, 4, Rounding::Down), Some(u128::MAX / 2));
/// assert_eq!(mul_div(1, 1, 0, Rounding::Down), None);
/// ```
#[must_use]
pub fn mul_div(a: u128, b: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    let product = U256::from(a).checked_mul(U256::from(b))?;
    let denominator = U256::from(denominator);
    let (mut quotient, remainder) = product.div_mod(denominator);
    if rounding.is_up() && !remainder.is_zero() {
        quotient = quotient.checked_add(U256::one())?;
    }
    narrow(quotient)
}

/// `a * b / WAD`.
#[must_use]
pub fn wad_mul(a: u128, b: u128, rounding: Rounding) -> Option<u128> {
    mul_div(a, b, WAD, rounding)
}

/// `a * WAD / b`.
#[must_use]
pub fn wad_div(a: u128, b: u128, rounding: Rounding) -> Option<u128> {
    mul_div(a, WAD, b, rounding)
}

/// Raises a WAD-scaled `base` to the integer power `exponent`.
///
/// Uses square-and-multiply; every intermediate product is rounded in the
/// same direction, so `Rounding::Down` yields a lower bound and
/// `Rounding::Up` an upper bound of the exact power.
///
/// ```
/// use nft_amm::domain::Rounding;
/// use nft_amm::math::{wad_pow, WAD};
///
/// let one_and_half = WAD + WAD / 2;
/// assert_eq!(wad_pow(one_and_half, 2, Rounding::Down), Some(2_250_000_000_000_000_000));
/// assert_eq!(wad_pow(one_and_half, 0, Rounding::Down), Some(WAD));
/// ```
#[must_use]
pub fn wad_pow(base: u128, exponent: u32, rounding: Rounding) -> Option<u128> {
    let mut result = WAD;
    let mut square = base;
    let mut remaining = exponent;
    while remaining > 0 {
        if remaining & 1 == 1 {
            result = wad_mul(result, square, rounding)?;
        }
        remaining >>= 1;
        if remaining > 0 {
            square = wad_mul(square, square, rounding)?;
        }
    }
    Some(result)
}

fn narrow(value: U256) -> Option<u128> {
    if value > U256::from(u128::MAX) {
        return None;
    }
    Some(value.low_u128())
}
