//! Pretty-printed JSON responder.

use crate::errors::AppError;
use axum::{
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

const INDENT: &[u8] = b"    ";

/// Like `axum::Json`, but serializes with four-space indentation.
///
/// Non-ASCII characters are written as UTF-8, not escaped. If serialization
/// fails the response is the generic 500.
///
/// # Example
/// ```ignore
/// use axum_helpers::PrettyJson;
///
/// async fn handler() -> PrettyJson<serde_json::Value> {
///     PrettyJson(serde_json::json!({ "status": "Healthy" }))
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PrettyJson<T>(pub T);

/// Serializes `value` with four-space indentation.
pub fn to_vec_pretty<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::with_capacity(128);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    Ok(buf)
}

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        match to_vec_pretty(&self.0) {
            Ok(buf) => (
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                )],
                buf,
            )
                .into_response(),
            Err(e) => AppError::from(e).into_response(),
        }
    }
}
