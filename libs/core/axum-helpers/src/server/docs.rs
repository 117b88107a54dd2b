use axum::{Json, Router, routing::get};
use utoipa_redoc::{Redoc, Servable};

/// Serves `spec` at `/openapi.json` and a ReDoc UI for it at `/redoc`.
pub fn docs_router(spec: utoipa::openapi::OpenApi) -> Router {
    Router::new()
        .merge(Redoc::with_url("/redoc", spec.clone()))
        .route(
            "/openapi.json",
            get(move || {
                let spec = spec.clone();
                async move { Json(spec) }
            }),
        )
}
