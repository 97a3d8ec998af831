//! Inventory tracking strategies.
//!
//! A pair keeps one [`InventoryTracker`], chosen once at initialization:
//!
//! | Collection capability | Strategy | Source of truth |
//! |---|---|---|
//! | exposes [`ItemEnumeration`](crate::traits::ItemEnumeration) | [`EnumerableInventory`] | live collection queries |
//! | no enumeration | [`RegistryInventory`] | pair-side ordered registry |
//!
//! Swap logic only sees the [`Inventory`] contract.

mod enumerable;
mod registry;

pub use enumerable::EnumerableInventory;
pub use registry::RegistryInventory;

use crate::domain::{Address, ItemId};
use crate::traits::{Inventory, ItemCollection};

/// Strategy enum resolved from the collection's capabilities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryTracker {
    /// Delegates to the collection's enumeration.
    Enumerable(EnumerableInventory),
    /// Keeps its own registry.
    Registry(RegistryInventory),
}

impl InventoryTracker {
    /// Picks the strategy for `collection`, tracking items held by
    /// `holder`.
    #[must_use]
    pub fn for_collection(collection: &dyn ItemCollection, holder: Address) -> Self {
        if collection.enumeration().is_some() {
            Self::Enumerable(EnumerableInventory::new(holder))
        } else {
            Self::Registry(RegistryInventory::new())
        }
    }

    /// Returns `true` for the enumerable strategy.
    #[must_use]
    pub const fn is_enumerable(&self) -> bool {
        matches!(self, Self::Enumerable(_))
    }
}

impl Inventory for InventoryTracker {
    fn add(&mut self, id: ItemId) {
        match self {
            Self::Enumerable(inner) => inner.add(id),
            Self::Registry(inner) => inner.add(id),
        }
    }

    fn remove(&mut self, id: ItemId) -> bool {
        match self {
            Self::Enumerable(inner) => inner.remove(id),
            Self::Registry(inner) => inner.remove(id),
        }
    }

    fn contains(&self, collection: &dyn ItemCollection, id: ItemId) -> bool {
        match self {
            Self::Enumerable(inner) => inner.contains(collection, id),
            Self::Registry(inner) => inner.contains(collection, id),
        }
    }

    fn snapshot(&self, collection: &dyn ItemCollection) -> Vec<ItemId> {
        match self {
            Self::Enumerable(inner) => inner.snapshot(collection),
            Self::Registry(inner) => inner.snapshot(collection),
        }
    }

    fn len(&self, collection: &dyn ItemCollection) -> usize {
        match self {
            Self::Enumerable(inner) => inner.len(collection),
            Self::Registry(inner) => inner.len(collection),
        }
    }
}
