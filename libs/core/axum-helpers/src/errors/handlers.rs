use std::any::Any;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::{DetailResponse, ErrorCode, MessageResponse, messages};

/// Handler for 404 Not Found errors.
///
/// This can be used as a fallback handler in your router.
pub async fn not_found() -> Response {
    let body = Json(DetailResponse {
        detail: messages::NOT_FOUND.to_string(),
    });

    (StatusCode::NOT_FOUND, body).into_response()
}

/// Handler for 405 Method Not Allowed errors.
pub async fn method_not_allowed() -> Response {
    let body = Json(DetailResponse {
        detail: messages::METHOD_NOT_ALLOWED.to_string(),
    });

    (StatusCode::METHOD_NOT_ALLOWED, body).into_response()
}

/// Converts a caught handler panic into the generic 500 response.
///
/// Used with `tower_http::catch_panic::CatchPanicLayer::custom`. The panic
/// message is logged and never sent to the caller.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };

    tracing::error!(
        error_code = ErrorCode::HandlerPanic.code(),
        panic = %detail,
        "Unhandled error"
    );

    let body = Json(MessageResponse {
        message: messages::INTERNAL_SERVER_ERROR.to_string(),
    });

    (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_fallback_body() {
        let response = not_found().await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "detail": "Not Found" })
        );
    }

    #[tokio::test]
    async fn test_handle_panic_hides_payload() {
        let response = handle_panic(Box::new(String::from("secret stack detail")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!({ "message": "Internal Server Error" }));
    }

    #[tokio::test]
    async fn test_handle_panic_accepts_static_str_payload() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
