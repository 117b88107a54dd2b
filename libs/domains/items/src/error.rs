use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

use crate::models::ItemId;

/// Detail returned to clients for every missing-item lookup
pub const ITEM_NOT_FOUND: &str = "Item not found";

#[derive(Debug, Error, PartialEq)]
pub enum ItemError {
    #[error("Item not found: {0}")]
    NotFound(ItemId),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::NotFound(_) => AppError::NotFound(ITEM_NOT_FOUND.to_string()),
            ItemError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
