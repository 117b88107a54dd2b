//! API routes module

pub mod health;
pub mod items;
pub mod root;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(root::router())
        .merge(health::router())
        .merge(items::router(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{body::Body, http::Request, http::StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        let config = temp_env::with_vars_unset(["PORT", "LOG_FORMAT", "SHUTDOWN_TIMEOUT_SECS"], || {
            Config::from_env().unwrap()
        });
        axum_helpers::create_router(routes(&AppState::new(config)))
    }

    async fn call(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, String) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_item_lifecycle_through_full_router() {
        let app = app();

        let (status, created) = call(
            &app,
            "POST",
            "/items/",
            Some(r#"{"name":"Test Item","price":10.5,"quantity":5}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let created: serde_json::Value = serde_json::from_str(&created).unwrap();
        assert_eq!(created["id"], 1);
        assert_eq!(created["name"], "Test Item");

        let (status, _) = call(&app, "DELETE", "/items/1", None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = call(&app, "GET", "/items/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, r#"{"detail":"Item not found"}"#);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (status, _) = call(&app(), "GET", "/nothing-here", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_wrong_method_on_items_is_405() {
        let (status, _) = call(&app(), "PATCH", "/items/1", None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }
}
