//! JSON request and response bodies.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::item::{Category, Rarity};

/// Body of `POST /items` and `PUT /items/:id`. The id never comes from the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequest {
    pub name: String,
    pub category: Category,
    pub level_requirement: i32,
    pub price: Decimal,
    pub rarity: Rarity,
}

/// Body of `POST /items/generate`. Zero or negative counts are a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateItemsRequest {
    pub count: i64,
}

/// Success body for commands that return no data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
