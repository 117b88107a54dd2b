//! Server infrastructure module.
//!
//! This module provides:
//! - Router assembly with request tracing, panic catching and JSON fallbacks
//! - Serving with graceful shutdown bounded by a timeout
//! - OpenAPI document and ReDoc UI routes
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::server::ServerConfig;
//! use std::time::Duration;
//!
//! let app = create_router(api_routes);
//! create_app(app, &ServerConfig::default(), Duration::from_secs(30)).await?;
//! ```

pub mod app;
pub mod docs;
pub mod shutdown;

pub use app::{create_app, create_router, serve};
pub use docs::docs_router;
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
