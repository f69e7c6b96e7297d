//! Error types for catalog service operations.

use std::error::Error;
use std::fmt;

use crate::item::ItemId;
use crate::store::StoreError;

/// Error type for catalog service operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// No item with this identifier.
    NotFound(ItemId),
    /// Request rejected by input validation.
    Validation(String),
    /// Store error.
    Store(StoreError),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::NotFound(id) => write!(f, "item not found: {}", id),
            ServiceError::Validation(msg) => write!(f, "validation failed: {}", msg),
            ServiceError::Store(e) => write!(f, "store error: {}", e),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ServiceError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        ServiceError::Store(err)
    }
}

impl ServiceError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::NotFound(_) => 404,
            ServiceError::Validation(_) => 400,
            ServiceError::Store(_) => 500,
        }
    }
}
