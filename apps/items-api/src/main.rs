//! Items API - in-memory item CRUD over HTTP

use axum_helpers::server::{create_app, create_router, docs_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment, config.log_format);

    let state = AppState::new(config);

    let app = create_router(api::routes(&state).merge(docs_router(openapi::api_doc())));

    info!(
        "Starting {} v{} on {}",
        state.config.app.name,
        state.config.app.version,
        state.config.server.address()
    );

    create_app(app, &state.config.server, state.config.shutdown_timeout)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Items API shutdown complete");
    Ok(())
}
