use std::collections::{HashMap, HashSet};

use crate::domain::{Address, ItemId};
use crate::error::AmmError;
use crate::traits::{ItemCollection, ItemEnumeration};

/// In-memory item collection.
///
/// Per-holder item lists use swap-and-pop removal, so enumeration order
/// matches what an enumerable on-chain collection reports.  Whether that
/// enumeration is exposed is chosen at construction.
#[derive(Debug, Clone)]
pub struct MemoryCollection {
    address: Address,
    enumerable: bool,
    owners: HashMap<ItemId, Address>,
    holdings: HashMap<Address, Vec<ItemId>>,
    refusing: HashSet<Address>,
}

impl MemoryCollection {
    /// A collection without enumeration.
    #[must_use]
    pub fn new(address: Address) -> Self {
        Self {
            address,
            enumerable: false,
            owners: HashMap::new(),
            holdings: HashMap::new(),
            refusing: HashSet::new(),
        }
    }

    /// A collection exposing [`ItemEnumeration`].
    #[must_use]
    pub fn enumerable(address: Address) -> Self {
        Self {
            enumerable: true,
            ..Self::new(address)
        }
    }

    /// Creates `id` owned by `to`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidParameter`] if `id` already exists.
    pub fn mint(&mut self, to: &Address, id: ItemId) -> Result<(), AmmError> {
        if self.owners.contains_key(&id) {
            return Err(AmmError::InvalidParameter("item already minted"));
        }
        self.owners.insert(id, *to);
        self.holdings.entry(*to).or_default().push(id);
        Ok(())
    }

    /// Mints every id in `ids` to `to`.
    ///
    /// # Errors
    ///
    /// Fails like [`mint`](Self::mint) on the first duplicate.
    pub fn mint_many(
        &mut self,
        to: &Address,
        ids: impl IntoIterator<Item = ItemId>,
    ) -> Result<(), AmmError> {
        ids.into_iter().try_for_each(|id| self.mint(to, id))
    }

    /// Items held by `holder`, in enumeration order, whether or not the
    /// collection exposes enumeration.
    #[must_use]
    pub fn items_of(&self, holder: &Address) -> Vec<ItemId> {
        self.holdings.get(holder).cloned().unwrap_or_default()
    }

    /// Makes every later transfer *to* `holder` fail.
    pub fn refuse_incoming(&mut self, holder: Address) {
        self.refusing.insert(holder);
    }

    fn detach(&mut self, holder: &Address, id: ItemId) {
        if let Some(items) = self.holdings.get_mut(holder) {
            if let Some(position) = items.iter().position(|held| *held == id) {
                items.swap_remove(position);
            }
            if items.is_empty() {
                self.holdings.remove(holder);
            }
        }
    }
}

impl ItemCollection for MemoryCollection {
    fn address(&self) -> Address {
        self.address
    }

    fn balance_of(&self, holder: &Address) -> usize {
        self.holdings.get(holder).map_or(0, Vec::len)
    }

    fn owner_of(&self, id: ItemId) -> Option<Address> {
        self.owners.get(&id).copied()
    }

    fn transfer(&mut self, from: &Address, to: &Address, id: ItemId) -> Result<(), AmmError> {
        if self.owner_of(id) != Some(*from) {
            return Err(AmmError::TransferFailed("sender does not own item"));
        }
        if self.refusing.contains(to) {
            return Err(AmmError::TransferFailed("recipient refused item"));
        }
        if from == to {
            return Ok(());
        }
        self.detach(from, id);
        self.owners.insert(id, *to);
        self.holdings.entry(*to).or_default().push(id);
        Ok(())
    }

    fn enumeration(&self) -> Option<&dyn ItemEnumeration> {
        if self.enumerable {
            Some(self)
        } else {
            None
        }
    }
}

impl ItemEnumeration for MemoryCollection {
    fn item_of_owner_by_index(&self, holder: &Address, index: usize) -> Option<ItemId> {
        self.holdings.get(holder)?.get(index).copied()
    }
}
