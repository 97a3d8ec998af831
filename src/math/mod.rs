//! Arithmetic utilities for curve pricing.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`Rounding`], [`div_round`] | Explicit rounding for `u128` division |
//! | [`WAD`], [`mul_div`], [`wad_mul`], [`wad_div`], [`wad_pow`] | 18-decimal fixed point over a [`U256`] intermediate |
//! | [`CheckedArithmetic`] | `Result`-returning arithmetic on [`Amount`](crate::domain::Amount) |

mod checked;
mod rounding;
mod wad;

pub use checked::CheckedArithmetic;
pub use rounding::{div_round, Rounding};
pub use wad::{mul_div, wad_div, wad_mul, wad_pow, U256, WAD};
