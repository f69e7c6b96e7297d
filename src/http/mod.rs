//! HTTP transport - maps the catalog API onto axum routes.
//!
//! Requires the `http` feature.
//!
//! ## Routes
//!
//! - `GET /items` - every item
//! - `GET /items/:id` - one item, 404 if unknown
//! - `POST /items` - create from `{name, category, levelRequirement, price, rarity}`
//! - `PUT /items/:id` - replace the mutable fields, 404 if unknown
//! - `DELETE /items/:id` - remove, 404 if unknown
//! - `GET /items/analytics` - aggregate view
//! - `POST /items/generate` - create `{count}` random items
//! - `GET /items/categories`, `GET /items/rarities` - enumeration names
//!
//! Any other `GET` is answered from the static UI directory, if one is
//! configured. Every response carries permissive CORS headers.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use item_catalog::{http, CatalogService, InMemoryItemStore};
//!
//! let service = Arc::new(CatalogService::new(InMemoryItemStore::new()));
//!
//! // Get the router to compose with other axum routes
//! let app = http::router(service.clone(), &http::HttpOptions::default());
//!
//! // Or serve directly
//! http::serve(service, &http::HttpOptions::default(), "127.0.0.1:5000").await?;
//! ```

mod handlers;
mod middleware;
mod requests;
mod static_files;

use std::path::PathBuf;
use std::sync::Arc;

use axum::http::{Method, Uri};
use axum::routing::get;
use axum::Router;

use crate::service::CatalogService;
use crate::store::ItemStore;

pub use requests::{GenerateItemsRequest, ItemRequest, MessageResponse};

/// Options for the HTTP transport that are not part of the catalog itself.
#[derive(Clone, Debug, Default)]
pub struct HttpOptions {
    /// Directory served for unmatched `GET` requests. `None` disables it.
    pub static_dir: Option<PathBuf>,
}

/// Build an axum `Router` exposing the catalog API.
pub fn router<S: ItemStore + 'static>(
    service: Arc<CatalogService<S>>,
    options: &HttpOptions,
) -> Router {
    let static_dir = options.static_dir.clone().map(Arc::new);

    Router::new()
        .route(
            "/items",
            get(handlers::list_items::<S>).post(handlers::create_item::<S>),
        )
        .route("/items/analytics", get(handlers::analytics::<S>))
        .route("/items/categories", get(handlers::categories::<S>))
        .route("/items/rarities", get(handlers::rarities::<S>))
        .route(
            "/items/generate",
            axum::routing::post(handlers::generate_items::<S>),
        )
        .route(
            "/items/:id",
            get(handlers::get_item::<S>)
                .put(handlers::update_item::<S>)
                .delete(handlers::delete_item::<S>),
        )
        .with_state::<()>(service)
        .fallback(move |method: Method, uri: Uri| {
            let static_dir = static_dir.clone();
            async move {
                let dir = static_dir.as_deref().map(|dir| dir.as_path());
                static_files::serve_static(dir, &method, &uri).await
            }
        })
        .layer(axum::middleware::from_fn(middleware::cors))
        .layer(axum::middleware::from_fn(middleware::log_requests))
}

/// Serve the catalog over HTTP at the given address (e.g. `"127.0.0.1:5000"`).
///
/// Runs until the process receives Ctrl-C.
pub async fn serve<S: ItemStore + 'static>(
    service: Arc<CatalogService<S>>,
    options: &HttpOptions,
    addr: &str,
) -> Result<(), std::io::Error> {
    let app = router(service, options);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "catalog listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
