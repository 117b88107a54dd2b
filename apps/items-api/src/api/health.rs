//! Health check endpoint

use axum::{Router, routing::get};
use axum_helpers::PrettyJson;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always "Healthy" while the process is serving
    #[schema(example = "Healthy")]
    pub status: &'static str,
    /// Current UTC time, RFC 3339
    #[schema(example = "2024-05-01T12:00:00.000000Z")]
    pub timestamp: String,
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/health",
    tag = "Meta",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    )
)]
pub async fn health() -> PrettyJson<HealthResponse> {
    tracing::info!("Health check requested");

    PrettyJson(HealthResponse {
        status: "Healthy",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
    })
}

pub fn router() -> Router {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use chrono::DateTime;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_returns_healthy_with_timestamp() {
        let response = router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], "Healthy");

        let timestamp = json["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
        assert!(timestamp.ends_with('Z'));
    }
}
