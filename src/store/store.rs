//! ItemStore - abstract storage for catalog items.

use super::StoreError;
use crate::item::{Item, ItemId};

/// Abstract storage for catalog items.
///
/// Lookups are by identifier; identifiers are unique so at most one item
/// matches. Implementations must keep id assignment and mutation
/// consistent when shared across threads.
pub trait ItemStore: Send + Sync {
    /// Insert an item. Writes the assigned `id` and `created_at` back into
    /// `item`.
    fn add(&self, item: &mut Item) -> Result<(), StoreError>;

    /// Snapshot of every item in insertion order.
    fn get_all(&self) -> Result<Vec<Item>, StoreError>;

    /// Get an item by ID. Returns None if not found.
    fn get_by_id(&self, id: ItemId) -> Result<Option<Item>, StoreError>;

    /// Overwrite the mutable fields of the item with `item.id`.
    /// Returns false if no such item exists.
    fn update(&self, item: &Item) -> Result<bool, StoreError>;

    /// Delete an item by ID. Returns true if it existed.
    fn delete(&self, id: ItemId) -> Result<bool, StoreError>;

    /// The identifier the next `add` will assign.
    fn next_id(&self) -> Result<ItemId, StoreError>;

    /// Remove every item and reset the identifier counter to 1.
    fn clear(&self) -> Result<(), StoreError>;

    fn len(&self) -> Result<usize, StoreError> {
        Ok(self.get_all()?.len())
    }

    fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}
