//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Documentation for the endpoints defined by this app itself
#[derive(OpenApi)]
#[openapi(
    info(
        title = "CRUD API",
        version = "1.1",
        description = "Create, read, update and delete items held in memory"
    ),
    paths(crate::api::root::root, crate::api::health::health),
    components(schemas(crate::api::health::HealthResponse)),
    tags(
        (name = "Meta", description = "Service help and health endpoints")
    )
)]
pub struct ApiDoc;

/// Full document: app endpoints plus the item endpoints
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.merge(domain_items::ApiDoc::openapi());
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_doc_contains_all_paths() {
        let doc = api_doc();
        for path in ["/", "/health", "/items/", "/items/{id}"] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
