//! Item - the catalog record and its closed enumerations.
//!
//! An `Item` is created unsaved (id 0) and receives its identity and
//! creation timestamp from an `ItemStore` on insertion.
//!
//! ## Example
//!
//! ```ignore
//! use item_catalog::{Category, Item, Rarity};
//!
//! let item = Item::new("Longclaw", Category::ValyrianSteel, 75, 45000.0, Rarity::Legendary);
//! assert_eq!(item.id, 0);
//! ```

mod category;
mod item;
mod rarity;

pub use category::Category;
pub use item::{format_currency, Item, ItemId};
pub use rarity::Rarity;

use std::fmt;

/// Error returned when parsing a `Category` or `Rarity` from text fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {}", self.kind, self.value)
    }
}

impl std::error::Error for ParseEnumError {}
