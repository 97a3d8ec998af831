//! Seams between the pair and its collaborators.
//!
//! | Trait | Role |
//! |-------|------|
//! | [`Curve`] | Pure pricing strategy |
//! | [`ItemCollection`], [`ItemEnumeration`] | Item custody |
//! | [`NativeBank`] | Native-value balances and transfers |
//! | [`Inventory`] | Pair-side record of held items |

mod bank;
mod collection;
mod curve;
mod inventory;

pub use bank::NativeBank;
pub use collection::{ItemCollection, ItemEnumeration};
pub use curve::{Curve, Pricing};
pub use inventory::Inventory;
