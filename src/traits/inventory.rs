//! Inventory-tracker contract.

use crate::domain::ItemId;
use crate::traits::ItemCollection;

/// Records which items a pair holds.
///
/// Calls to [`add`](Self::add) and [`remove`](Self::remove) mirror
/// transfers into and out of the pair.  [`contains`](Self::contains) and
/// [`snapshot`](Self::snapshot) must agree with the collection's custody at
/// every point a caller can observe.
pub trait Inventory {
    /// Records that `id` entered custody.
    fn add(&mut self, id: ItemId);

    /// Records that `id` left custody.  Returns `false` if it was not held.
    fn remove(&mut self, id: ItemId) -> bool;

    /// Returns `true` if `id` is held.
    fn contains(&self, collection: &dyn ItemCollection, id: ItemId) -> bool;

    /// Held identifiers in a deterministic order.
    fn snapshot(&self, collection: &dyn ItemCollection) -> Vec<ItemId>;

    /// Number of held identifiers.
    fn len(&self, collection: &dyn ItemCollection) -> usize {
        self.snapshot(collection).len()
    }
}
