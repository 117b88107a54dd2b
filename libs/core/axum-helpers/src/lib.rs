//! # Axum Helpers
//!
//! Shared building blocks for the HTTP services in this workspace.
//!
//! ## Modules
//!
//! - **[`server`]**: Router assembly, OpenAPI docs routes, graceful shutdown
//! - **[`errors`]**: `AppError` and its mapping to status codes and JSON bodies
//! - **[`extractors`]**: Request extractors that reject malformed input with 422
//! - **[`response`]**: Pretty-printed JSON responder
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::server::ServerConfig;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let router = create_router(axum::Router::new());
//!     create_app(router, &ServerConfig::default(), Duration::from_secs(30)).await
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod response;
pub mod server;

// Re-export server types
pub use server::{
    ShutdownCoordinator, create_app, create_router, docs_router, serve, shutdown_signal,
};

// Re-export error types
pub use errors::{AppError, DetailResponse, ErrorCode, MessageResponse};

// Re-export extractors
pub use extractors::{IdPath, ValidatedJson};

pub use response::PrettyJson;
