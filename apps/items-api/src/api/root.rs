//! Plain-text endpoint guide served at `/`

use axum::{Router, routing::get};

const HELP_TEXT: &str = r#"Welcome to the CRUD API! Interactive docs at /redoc, OpenAPI document at /openapi.json
================================

Available Endpoints:
-------------------
1. Health Check
   GET /health
   Returns the health status of the API with timestamp.

2. Create Item
   POST /items/
   JSON Body Example:
   {
       "name": "Sample Item",
       "description": "A description",
       "price": 10.5,
       "quantity": 2
   }

3. List All Items
   GET /items/
   Returns a list of all items.

4. Get Item by ID
   GET /items/{item_id}
   Replace {item_id} with the integer ID of the item.

5. Update Item by ID
   PUT /items/{item_id}
   JSON Body Example:
   {
       "name": "Updated Item",
       "description": "Updated description",
       "price": 15.0,
       "quantity": 3
   }

6. Delete Item by ID
   DELETE /items/{item_id}
   Replace {item_id} with the integer ID of the item."#;

/// Endpoint guide
#[utoipa::path(
    get,
    path = "/",
    tag = "Meta",
    responses(
        (status = 200, description = "Plain-text list of endpoints", body = String, content_type = "text/plain")
    )
)]
pub async fn root() -> &'static str {
    HELP_TEXT
}

pub fn router() -> Router {
    Router::new().route("/", get(root))
}
