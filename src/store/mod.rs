//! Item stores - the persistence contract for catalog records.
//!
//! `ItemStore` is the stable contract; `InMemoryItemStore` is the provided
//! implementation. Stores assign identifiers (1, 2, 3, ...) and creation
//! timestamps on insertion, and never reuse an identifier after deletion
//! until the store is cleared.
//!
//! ## Example
//!
//! ```ignore
//! use item_catalog::{Category, Decimal, InMemoryItemStore, Item, ItemStore, Rarity};
//!
//! let store = InMemoryItemStore::empty();
//! let mut item = Item::new("Needle", Category::Weapon, 20, Decimal::from(3000), Rarity::Rare);
//! store.add(&mut item)?;
//! assert_eq!(item.id, 1);
//! assert_eq!(store.next_id()?, 2);
//! ```

mod error;
mod in_memory;
mod seed;
mod store;

pub use error::StoreError;
pub use in_memory::InMemoryItemStore;
pub use seed::seed_items;
pub use store::ItemStore;
