//! Catalog service - CRUD, random generation and analytics.

mod analytics;
mod catalog_service;
mod error;
pub mod generator;

pub use analytics::Analytics;
pub use catalog_service::CatalogService;
pub use error::ServiceError;
pub use generator::RarityBand;
