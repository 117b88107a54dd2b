//! Reusable OpenAPI response types for consistent API documentation.

use super::{DetailResponse, MessageResponse};
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({ "message": "Internal Server Error" })
)]
pub struct InternalServerErrorResponse(pub MessageResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({ "detail": "Item not found" })
)]
pub struct NotFoundResponse(pub DetailResponse);

#[derive(ToResponse)]
#[response(
    description = "Unprocessable Entity - request body or path failed validation",
    content_type = "application/json",
    example = json!({ "detail": "Failed to deserialize the JSON body into the target type: missing field `price` at line 1 column 34" })
)]
pub struct UnprocessableEntityResponse(pub DetailResponse);
