//! Item-custody collaborator.
//!
//! The pair never owns item bookkeeping itself; it asks an
//! [`ItemCollection`] who holds what and requests transfers.  Collections
//! that can list the items of a holder additionally expose
//! [`ItemEnumeration`], which selects the enumerable inventory strategy.

use crate::domain::{Address, ItemId};
use crate::error::AmmError;

/// A collection of non-fungible items with single-item transfers.
pub trait ItemCollection {
    /// Address identifying the collection.
    fn address(&self) -> Address;

    /// Number of items held by `holder`.
    fn balance_of(&self, holder: &Address) -> usize;

    /// Current holder of `id`, or `None` if the item does not exist.
    fn owner_of(&self, id: ItemId) -> Option<Address>;

    /// Moves `id` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::TransferFailed`] if `from` does not hold `id`.
    fn transfer(&mut self, from: &Address, to: &Address, id: ItemId) -> Result<(), AmmError>;

    /// Enumeration capability, if the collection has one.
    fn enumeration(&self) -> Option<&dyn ItemEnumeration> {
        None
    }
}

/// Index-based listing of a holder's items.
pub trait ItemEnumeration {
    /// The `index`-th item held by `holder`, for `index < balance_of(holder)`.
    fn item_of_owner_by_index(&self, holder: &Address, index: usize) -> Option<ItemId>;
}
