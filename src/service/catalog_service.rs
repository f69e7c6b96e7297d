//! Catalog service - business rules on top of an `ItemStore`.
//!
//! A `CatalogService<S>` owns its store. It is constructed once at start-up
//! and shared (typically behind an `Arc`) by every request handler.
//!
//! ## Example
//!
//! ```ignore
//! use item_catalog::{CatalogService, Category, Decimal, InMemoryItemStore, Rarity};
//!
//! let service = CatalogService::new(InMemoryItemStore::empty());
//! service.create_item("Needle", Category::Weapon, 20, Decimal::from(3000), Rarity::Rare)?;
//! service.generate_random_items(5)?;
//! let analytics = service.analytics()?;
//! assert_eq!(analytics.total_items, 6);
//! ```

use rand::Rng;
use rust_decimal::Decimal;

use super::analytics::Analytics;
use super::error::ServiceError;
use super::generator;
use crate::item::{Category, Item, ItemId, Rarity};
use crate::store::ItemStore;

/// Catalog operations over a store of type `S`.
pub struct CatalogService<S> {
    store: S,
    max_generate: Option<usize>,
}

impl<S: ItemStore> CatalogService<S> {
    /// Create a new service with the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            max_generate: None,
        }
    }

    /// Set the largest `count` accepted by `generate_random_items`.
    /// Without this, generation is unbounded.
    ///
    /// Uses builder pattern - returns `self` for chaining.
    pub fn with_max_generate(mut self, max_generate: usize) -> Self {
        self.max_generate = Some(max_generate.max(1));
        self
    }

    pub fn max_generate(&self) -> Option<usize> {
        self.max_generate
    }

    /// Create an item. The store assigns the id; callers re-query to see it.
    pub fn create_item(
        &self,
        name: &str,
        category: Category,
        level_requirement: i32,
        price: Decimal,
        rarity: Rarity,
    ) -> Result<(), ServiceError> {
        validate_fields(name, price)?;
        let mut item = Item::new(name, category, level_requirement, price, rarity);
        self.store.add(&mut item)?;
        tracing::info!(id = item.id, name = %item.name, "created item");
        Ok(())
    }

    pub fn get_all_items(&self) -> Result<Vec<Item>, ServiceError> {
        Ok(self.store.get_all()?)
    }

    pub fn get_item_by_id(&self, id: ItemId) -> Result<Option<Item>, ServiceError> {
        Ok(self.store.get_by_id(id)?)
    }

    /// Replace every mutable field of item `id`.
    ///
    /// Returns false if no such item exists.
    pub fn update_item(
        &self,
        id: ItemId,
        name: &str,
        category: Category,
        level_requirement: i32,
        price: Decimal,
        rarity: Rarity,
    ) -> Result<bool, ServiceError> {
        validate_fields(name, price)?;
        let item = Item::new(name, category, level_requirement, price, rarity).with_id(id);
        let updated = self.store.update(&item)?;
        if updated {
            tracing::info!(id, "updated item");
        } else {
            tracing::debug!(id, "update skipped, item not found");
        }
        Ok(updated)
    }

    /// Delete item `id`. Returns false if no such item exists.
    pub fn delete_item(&self, id: ItemId) -> Result<bool, ServiceError> {
        let deleted = self.store.delete(id)?;
        if deleted {
            tracing::info!(id, "deleted item");
        } else {
            tracing::debug!(id, "delete skipped, item not found");
        }
        Ok(deleted)
    }

    /// Create `count` random items using the thread-local generator.
    ///
    /// A zero or negative `count` creates nothing and succeeds.
    pub fn generate_random_items(&self, count: i64) -> Result<(), ServiceError> {
        self.generate_random_items_with(count, &mut rand::rng())
    }

    /// Create `count` random items drawn from `rng`.
    pub fn generate_random_items_with<R: Rng + ?Sized>(
        &self,
        count: i64,
        rng: &mut R,
    ) -> Result<(), ServiceError> {
        let Ok(count) = usize::try_from(count) else {
            tracing::debug!(count, "non-positive generate count, nothing to do");
            return Ok(());
        };
        if let Some(max) = self.max_generate {
            if count > max {
                return Err(ServiceError::Validation(format!(
                    "count must be at most {}, got {}",
                    max, count
                )));
            }
        }

        for _ in 0..count {
            let item = generator::random_item(rng);
            self.create_item(
                &item.name,
                item.category,
                item.level_requirement,
                item.price,
                item.rarity,
            )?;
        }
        tracing::info!(count, "generated random items");
        Ok(())
    }

    pub fn analytics(&self) -> Result<Analytics, ServiceError> {
        let items = self.store.get_all()?;
        Ok(Analytics::compute(&items))
    }

    pub fn categories(&self) -> Vec<&'static str> {
        Category::names()
    }

    pub fn rarities(&self) -> Vec<&'static str> {
        Rarity::names()
    }

    /// Get a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

fn validate_fields(name: &str, price: Decimal) -> Result<(), ServiceError> {
    if name.trim().is_empty() {
        return Err(ServiceError::Validation("name must not be empty".into()));
    }
    if price < Decimal::ZERO {
        return Err(ServiceError::Validation(format!(
            "price must be a non-negative number, got {}",
            price
        )));
    }
    Ok(())
}
