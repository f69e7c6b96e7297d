//! Route handlers. Each performs exactly one service call.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use super::requests::{GenerateItemsRequest, ItemRequest, MessageResponse};
use crate::item::{Item, ItemId};
use crate::service::{Analytics, CatalogService, ServiceError};
use crate::store::ItemStore;

type Catalog<S> = State<Arc<CatalogService<S>>>;

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        match self {
            // Not-found carries no body beyond the status.
            ServiceError::NotFound(_) => status.into_response(),
            ServiceError::Store(ref e) => {
                tracing::error!(error = %e, "store failure");
                (status, Json(json!({ "error": self.to_string() }))).into_response()
            }
            ServiceError::Validation(_) => {
                (status, Json(json!({ "error": self.to_string() }))).into_response()
            }
        }
    }
}

/// `GET /items`
pub async fn list_items<S: ItemStore>(
    State(service): Catalog<S>,
) -> Result<Json<Vec<Item>>, ServiceError> {
    service.get_all_items().map(Json)
}

/// `GET /items/:id`
pub async fn get_item<S: ItemStore>(
    State(service): Catalog<S>,
    Path(id): Path<ItemId>,
) -> Result<Json<Item>, ServiceError> {
    service
        .get_item_by_id(id)?
        .map(Json)
        .ok_or(ServiceError::NotFound(id))
}

/// `POST /items`
pub async fn create_item<S: ItemStore>(
    State(service): Catalog<S>,
    Json(req): Json<ItemRequest>,
) -> Result<Json<MessageResponse>, ServiceError> {
    service.create_item(
        &req.name,
        req.category,
        req.level_requirement,
        req.price,
        req.rarity,
    )?;
    Ok(Json(MessageResponse::new("Item created successfully")))
}

/// `PUT /items/:id`
pub async fn update_item<S: ItemStore>(
    State(service): Catalog<S>,
    Path(id): Path<ItemId>,
    Json(req): Json<ItemRequest>,
) -> Result<Json<MessageResponse>, ServiceError> {
    let updated = service.update_item(
        id,
        &req.name,
        req.category,
        req.level_requirement,
        req.price,
        req.rarity,
    )?;
    if !updated {
        return Err(ServiceError::NotFound(id));
    }
    Ok(Json(MessageResponse::new("Item updated successfully")))
}

/// `DELETE /items/:id`
pub async fn delete_item<S: ItemStore>(
    State(service): Catalog<S>,
    Path(id): Path<ItemId>,
) -> Result<Json<MessageResponse>, ServiceError> {
    if !service.delete_item(id)? {
        return Err(ServiceError::NotFound(id));
    }
    Ok(Json(MessageResponse::new("Item deleted successfully")))
}

/// `GET /items/analytics`
pub async fn analytics<S: ItemStore>(
    State(service): Catalog<S>,
) -> Result<Json<Analytics>, ServiceError> {
    service.analytics().map(Json)
}

/// `POST /items/generate`
pub async fn generate_items<S: ItemStore>(
    State(service): Catalog<S>,
    Json(req): Json<GenerateItemsRequest>,
) -> Result<Json<MessageResponse>, ServiceError> {
    service.generate_random_items(req.count)?;
    Ok(Json(MessageResponse::new(format!(
        "Generated {} items successfully",
        req.count
    ))))
}

/// `GET /items/categories`
pub async fn categories<S: ItemStore>(State(service): Catalog<S>) -> Json<Vec<&'static str>> {
    Json(service.categories())
}

/// `GET /items/rarities`
pub async fn rarities<S: ItemStore>(State(service): Catalog<S>) -> Json<Vec<&'static str>> {
    Json(service.rarities())
}
