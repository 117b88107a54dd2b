use super::shutdown::{ShutdownCoordinator, shutdown_signal};
use crate::errors::handlers::{handle_panic, method_not_allowed, not_found};
use axum::Router;
use core_config::server::ServerConfig;
use std::future::{Future, IntoFuture};
use std::io;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};

/// Wraps application routes with the cross-cutting layers every service gets.
///
/// This function sets up:
/// - `404 {"detail": "Not Found"}` for unknown paths
/// - `405 {"detail": "Method Not Allowed"}` for known paths with the wrong method
/// - Panic catching: a panicking handler produces `500 {"message": "Internal Server Error"}`
///   and an error log event carrying the panic message
/// - Request/response tracing at INFO level
///
/// Routes must already have their state applied.
pub fn create_router(apis: Router) -> Router {
    apis.fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Binds the configured address and serves until SIGINT or SIGTERM.
///
/// In-flight requests get `shutdown_timeout` to finish after the signal.
///
/// # Errors
/// Returns an error if:
/// - The TCP listener fails to bind to the configured address
/// - The server encounters an error during operation
pub async fn create_app(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
) -> io::Result<()> {
    let listener = TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    serve(listener, router, shutdown_signal(), shutdown_timeout).await
}

/// Serves `router` on an already bound listener until `signal` completes,
/// then drains connections for at most `shutdown_timeout`.
pub async fn serve<F>(
    listener: TcpListener,
    router: Router,
    signal: F,
    shutdown_timeout: Duration,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (coordinator, mut rx) = ShutdownCoordinator::new();

    let server = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            let _ = rx.recv().await;
        })
        .into_future();
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => {
            return result.inspect_err(|e| {
                tracing::error!("Server encountered an error: {:?}", e);
            });
        }
        _ = signal => coordinator.shutdown(),
    }

    match tokio::time::timeout(shutdown_timeout, server).await {
        Ok(result) => {
            info!("Server stopped");
            result
        }
        Err(_) => {
            warn!(
                "Graceful shutdown exceeded timeout of {:?}, dropping remaining connections",
                shutdown_timeout
            );
            Ok(())
        }
    }
}
