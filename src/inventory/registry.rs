use std::collections::HashMap;

use crate::domain::ItemId;
use crate::traits::{Inventory, ItemCollection};

/// Pair-maintained registry for collections that cannot enumerate.
///
/// Identifiers are appended on receipt and removed by swap-and-pop, so
/// removal is O(1) and the order after a removal moves the last entry into
/// the vacated slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryInventory {
    ids: Vec<ItemId>,
    positions: HashMap<ItemId, usize>,
}

impl RegistryInventory {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Inventory for RegistryInventory {
    fn add(&mut self, id: ItemId) {
        if self.positions.contains_key(&id) {
            return;
        }
        self.positions.insert(id, self.ids.len());
        self.ids.push(id);
    }

    fn remove(&mut self, id: ItemId) -> bool {
        let Some(position) = self.positions.remove(&id) else {
            return false;
        };
        self.ids.swap_remove(position);
        if let Some(moved) = self.ids.get(position) {
            self.positions.insert(*moved, position);
        }
        true
    }

    fn contains(&self, _collection: &dyn ItemCollection, id: ItemId) -> bool {
        self.positions.contains_key(&id)
    }

    fn snapshot(&self, _collection: &dyn ItemCollection) -> Vec<ItemId> {
        self.ids.clone()
    }

    fn len(&self, _collection: &dyn ItemCollection) -> usize {
        self.ids.len()
    }
}
