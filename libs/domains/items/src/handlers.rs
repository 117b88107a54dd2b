use axum::{
    Router,
    extract::State,
    http::Uri,
    response::Redirect,
    routing::{any, get},
};
use axum_helpers::{
    IdPath, PrettyJson, ValidatedJson,
    errors::responses::{InternalServerErrorResponse, NotFoundResponse, UnprocessableEntityResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ItemResult;
use crate::models::{DeleteResponse, Item, StoredItem};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_items, create_item, get_item, update_item, delete_item),
    components(
        schemas(Item, StoredItem, DeleteResponse),
        responses(
            NotFoundResponse,
            UnprocessableEntityResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Items", description = "In-memory item CRUD endpoints")
    )
)]
pub struct ApiDoc;

/// Create the items router with all HTTP endpoints
///
/// Paths are absolute (`/items/`, `/items/{id}`), so the router is merged
/// into the application rather than nested. `/items` without the trailing
/// slash redirects to the collection.
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/items", any(redirect_to_collection))
        .route("/items/", get(list_items).post(create_item))
        .route(
            "/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .with_state(shared_service)
}

/// 307 to `/items/`, keeping the method, body and query string
async fn redirect_to_collection(uri: Uri) -> Redirect {
    match uri.query() {
        Some(query) => Redirect::temporary(&format!("/items/?{}", query)),
        None => Redirect::temporary("/items/"),
    }
}

/// List all items in ascending id order
#[utoipa::path(
    get,
    path = "/items/",
    tag = "Items",
    responses(
        (status = 200, description = "All stored items", body = Vec<StoredItem>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> ItemResult<PrettyJson<Vec<StoredItem>>> {
    let items = service.list_items().await?;
    Ok(PrettyJson(items))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "/items/",
    tag = "Items",
    request_body = Item,
    responses(
        (status = 200, description = "Item created", body = StoredItem),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ValidatedJson(item): ValidatedJson<Item>,
) -> ItemResult<PrettyJson<StoredItem>> {
    let stored = service.create_item(item).await?;
    Ok(PrettyJson(stored))
}

/// Get an item by ID
#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "Items",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = StoredItem),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
) -> ItemResult<PrettyJson<StoredItem>> {
    let stored = service.get_item(id).await?;
    Ok(PrettyJson(stored))
}

/// Replace all fields of an item
#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "Items",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    request_body = Item,
    responses(
        (status = 200, description = "Item updated", body = StoredItem),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(item): ValidatedJson<Item>,
) -> ItemResult<PrettyJson<StoredItem>> {
    let stored = service.update_item(id, item).await?;
    Ok(PrettyJson(stored))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "Items",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item deleted", body = DeleteResponse),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
) -> ItemResult<PrettyJson<DeleteResponse>> {
    service.delete_item(id).await?;
    Ok(PrettyJson(DeleteResponse::for_item(id)))
}
