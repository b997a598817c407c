use axum_helpers::server::{create_router, serve};
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
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    let state = AppState::new(config);
    info!(
        seeded = state.config.seed_items.len(),
        "Initialized in-memory item store"
    );

    // Build router with API routes and OpenAPI docs
    let api_routes = api::routes(&state);
    let router = create_router::<openapi::ApiDoc>(api_routes, &state.config.server)?;

    info!(
        "Starting {} v{} (shutdown timeout {:?})",
        state.config.app.name, state.config.app.version, state.config.server.shutdown_timeout
    );

    let server_config = state.config.server.clone();
    serve(router, &server_config, async move {
        let remaining = state.items.count().await.unwrap_or_default();
        info!(remaining, "Shutting down: dropping in-memory item store");
        drop(state);
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Strings API shutdown complete");
    Ok(())
}
