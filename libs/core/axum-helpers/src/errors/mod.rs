pub mod codes;
pub mod handlers;
pub mod messages;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Client error body.
///
/// ```json
/// { "detail": "Item not found" }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct DetailResponse {
    /// Human-readable description of what was wrong with the request
    pub detail: String,
}

/// Server error body. The message is always generic.
///
/// ```json
/// { "message": "Internal Server Error" }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Application error type that can be converted to HTTP responses.
///
/// Client errors (`NotFound`, `UnprocessableEntity`, JSON rejections) carry
/// their detail into the response body. Server errors are logged with full
/// detail and answered with a generic message.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON serialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Unprocessable Entity: {0}")]
    UnprocessableEntity(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::JsonExtractorRejection(_) | AppError::UnprocessableEntity(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::SerdeJson(_) | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            AppError::NotFound(detail) => {
                tracing::debug!(error_code = ErrorCode::NotFound.code(), %detail, "Not found");
                detail_response(status, detail)
            }
            AppError::JsonExtractorRejection(e) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Request body rejected: {}",
                    e.body_text()
                );
                detail_response(status, e.body_text())
            }
            AppError::UnprocessableEntity(detail) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    %detail,
                    "Unprocessable entity"
                );
                detail_response(status, detail)
            }
            AppError::SerdeJson(e) => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    "Unhandled error: JSON serialization failed: {:?}",
                    e
                );
                internal_error_response()
            }
            AppError::InternalServerError(detail) => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    "Unhandled error: {}",
                    detail
                );
                internal_error_response()
            }
        }
    }
}

fn detail_response(status: StatusCode, detail: String) -> Response {
    (status, Json(DetailResponse { detail })).into_response()
}

/// The generic 500 response. Never carries error detail.
pub fn internal_error_response() -> Response {
    let body = Json(MessageResponse {
        message: messages::INTERNAL_SERVER_ERROR.to_string(),
    });

    (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
}
