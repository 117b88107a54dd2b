//! JSON body extractor that reports every rejection as 422.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// JSON extractor whose rejections are uniformly `422 Unprocessable Entity`.
///
/// Plain `axum::Json` answers 400 for syntax errors and 415 for a missing
/// content type. Here a missing field, a wrong type, a syntax error and a
/// missing `content-type` header all yield 422 with the rejection text as
/// `detail`. The schema itself is whatever `T`'s `Deserialize` impl accepts.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::ValidatedJson;
///
/// async fn create(ValidatedJson(input): ValidatedJson<Item>) -> String {
///     input.name
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::from(rejection).into_response())?;

        Ok(ValidatedJson(data))
    }
}
