//! Integer path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Extractor for a single integer `{id}` path parameter.
///
/// Any value that does not parse as `i64` is rejected with
/// `422 Unprocessable Entity`. Zero and negative values are accepted; whether
/// they exist is the handler's concern.
///
/// # Example
/// ```ignore
/// use axum::{Router, routing::get};
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_item(IdPath(id): IdPath) -> String {
///     format!("Item ID: {}", id)
/// }
///
/// let app: Router = Router::new().route("/items/{id}", get(get_item));
/// ```
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::UnprocessableEntity(e.body_text()).into_response())?;

        raw.parse::<i64>().map(IdPath).map_err(|_| {
            AppError::UnprocessableEntity(format!(
                "Invalid path parameter `id`: expected an integer, got '{}'",
                raw
            ))
            .into_response()
        })
    }
}
