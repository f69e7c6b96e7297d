//! InMemoryItemStore - Vec-backed item store.

use std::sync::{Arc, RwLock};

use chrono::Utc;

use super::{seed_items, ItemStore, StoreError};
use crate::item::{Item, ItemId};

/// The collection and the id counter live under one lock so that id
/// assignment and lookups never interleave.
struct Inner {
    items: Vec<Item>,
    next_id: ItemId,
}

impl Inner {
    fn new() -> Self {
        Inner {
            items: Vec::new(),
            next_id: 1,
        }
    }

    fn insert(&mut self, item: &mut Item) {
        item.id = self.next_id;
        item.created_at = Utc::now();
        self.next_id += 1;
        self.items.push(item.clone());
    }

    fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

/// In-memory item store backed by a `Vec`.
///
/// Clone-friendly via Arc: clones share the same collection.
#[derive(Clone)]
pub struct InMemoryItemStore {
    inner: Arc<RwLock<Inner>>,
}

impl Default for InMemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryItemStore {
    /// Create a store pre-populated with the sample catalog.
    pub fn new() -> Self {
        let mut inner = Inner::new();
        for mut item in seed_items() {
            inner.insert(&mut item);
        }
        tracing::debug!(items = inner.items.len(), "seeded item store");
        Self {
            inner: Arc::new(RwLock::new(inner)),
        }
    }

    /// Create a store with no items.
    pub fn empty() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner::new())),
        }
    }
}

impl ItemStore for InMemoryItemStore {
    fn add(&self, item: &mut Item) -> Result<(), StoreError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::LockPoisoned("add"))?;
        inner.insert(item);
        Ok(())
    }

    fn get_all(&self) -> Result<Vec<Item>, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::LockPoisoned("get_all"))?;
        Ok(inner.items.clone())
    }

    fn get_by_id(&self, id: ItemId) -> Result<Option<Item>, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::LockPoisoned("get_by_id"))?;
        Ok(inner.items.iter().find(|item| item.id == id).cloned())
    }

    fn update(&self, item: &Item) -> Result<bool, StoreError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::LockPoisoned("update"))?;

        match inner.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => {
                existing.overwrite_from(item);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete(&self, id: ItemId) -> Result<bool, StoreError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::LockPoisoned("delete"))?;

        match inner.position(id) {
            Some(index) => {
                inner.items.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn next_id(&self) -> Result<ItemId, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::LockPoisoned("next_id"))?;
        Ok(inner.next_id)
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::LockPoisoned("clear"))?;
        inner.items.clear();
        inner.next_id = 1;
        Ok(())
    }

    fn len(&self) -> Result<usize, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::LockPoisoned("len"))?;
        Ok(inner.items.len())
    }
}
