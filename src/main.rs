//! `item-catalog` binary: configuration, logging, store and HTTP server.

use std::sync::Arc;

use anyhow::{Context, Result};
use item_catalog::http::{self, HttpOptions};
use item_catalog::{logging, CatalogConfig, CatalogService, InMemoryItemStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    logging::init_logging();
    let config = CatalogConfig::from_env();

    let store = if config.seed {
        InMemoryItemStore::new()
    } else {
        InMemoryItemStore::empty()
    };
    let mut service = CatalogService::new(store);
    if let Some(max) = config.max_generate {
        service = service.with_max_generate(max);
    }
    let service = Arc::new(service);

    if !config.static_dir.is_dir() {
        tracing::warn!(
            "Static UI directory not found at {}, serving API only",
            config.static_dir.display()
        );
    }
    let options = HttpOptions {
        static_dir: Some(config.static_dir.clone()),
    };

    tracing::info!(
        seed = config.seed,
        max_generate = ?config.max_generate,
        "Starting item catalog"
    );

    http::serve(service, &options, &config.bind_addr)
        .await
        .with_context(|| format!("serving on {}", config.bind_addr))
}
