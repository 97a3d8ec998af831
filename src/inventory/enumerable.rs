use crate::domain::{Address, ItemId};
use crate::traits::{Inventory, ItemCollection};

/// Inventory backed by the collection's own enumeration.
///
/// Holds no identifiers: `add` and `remove` are bookkeeping no-ops and
/// every query goes to the collection.  Snapshot order is the
/// collection's index order for the holder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerableInventory {
    holder: Address,
}

impl EnumerableInventory {
    /// Tracks items held by `holder`.
    #[must_use]
    pub const fn new(holder: Address) -> Self {
        Self { holder }
    }
}

impl Inventory for EnumerableInventory {
    fn add(&mut self, _id: ItemId) {}

    fn remove(&mut self, _id: ItemId) -> bool {
        true
    }

    fn contains(&self, collection: &dyn ItemCollection, id: ItemId) -> bool {
        collection.owner_of(id) == Some(self.holder)
    }

    fn snapshot(&self, collection: &dyn ItemCollection) -> Vec<ItemId> {
        let Some(enumeration) = collection.enumeration() else {
            return Vec::new();
        };
        (0..collection.balance_of(&self.holder))
            .filter_map(|index| enumeration.item_of_owner_by_index(&self.holder, index))
            .collect()
    }

    fn len(&self, collection: &dyn ItemCollection) -> usize {
        collection.balance_of(&self.holder)
    }
}
