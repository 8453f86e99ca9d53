use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

const CLEANUP_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let state = connect(config).await?;
    api::events::init_indexes(&state.db).await?;

    let app = axum_helpers::create_router::<openapi::ApiDoc>(api::routes(&state))
        .await?
        .merge(health_router(state.config.app));

    info!(
        "Starting {} v{} on {}",
        state.config.app.name,
        state.config.app.version,
        state.config.server.address()
    );

    create_production_app(app, &state.config.server, CLEANUP_TIMEOUT, async move {
        info!("Closing MongoDB connection");
        drop(state.mongo_client);
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Shutdown complete");
    Ok(())
}

/// Open the MongoDB connection (with retry) and assemble shared state.
async fn connect(config: Config) -> eyre::Result<AppState> {
    info!("Connecting to MongoDB at {}", config.mongodb.url());

    let mongo_client =
        database::mongodb::connect_from_config_with_retry(&config.mongodb, None).await?;
    let db = mongo_client.database(config.mongodb.database());

    info!("Using MongoDB database '{}'", config.mongodb.database());

    Ok(AppState {
        config,
        mongo_client,
        db,
    })
}
