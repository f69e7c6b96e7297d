//! Game item catalog.
//!
//! An in-memory store of catalog items, a service layer adding random item
//! generation and analytics, and (with the `http` feature) a JSON API.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use item_catalog::{http, CatalogService, InMemoryItemStore};
//!
//! let service = Arc::new(CatalogService::new(InMemoryItemStore::new()));
//! http::serve(service, &http::HttpOptions::default(), "127.0.0.1:5000").await?;
//! ```

pub mod config;
mod item;
pub mod logging;
pub mod service;
mod store;

#[cfg(feature = "http")]
pub mod http;

pub use config::CatalogConfig;
pub use item::{format_currency, Category, Item, ItemId, ParseEnumError, Rarity};

// Prices and averages are exact decimals.
pub use rust_decimal::Decimal;
pub use service::{Analytics, CatalogService, RarityBand, ServiceError};
pub use store::{seed_items, InMemoryItemStore, ItemStore, StoreError};
