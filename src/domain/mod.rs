//! Value types shared by curves, pairs and the factory.
//!
//! All quantities are newtypes so that a spot price cannot be confused with
//! an item identifier or a fee fraction.

mod address;
mod amount;
mod curve_kind;
mod fraction;
mod item_id;
mod pool_type;
mod quote;
mod records;

pub use address::Address;
pub use amount::Amount;
pub use curve_kind::CurveKind;
pub use fraction::Fraction;
pub use item_id::{has_duplicates, ItemId};
pub use pool_type::PoolType;
pub use quote::{CurveQuote, FeeSchedule};
pub use records::{BuyRecord, PairCreated, SellRecord};

pub use crate::math::Rounding;
