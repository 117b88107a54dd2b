//! Custom extractors for Axum handlers.
//!
//! Both extractors reject with `422 Unprocessable Entity` and a `detail`
//! body, so malformed input never reaches a handler.

pub mod id_path;
pub mod validated_json;

pub use id_path::IdPath;
pub use validated_json::ValidatedJson;
