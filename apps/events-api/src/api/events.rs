//! Events domain wiring: MongoDB-backed repository behind the
//! domain's router.

use crate::state::AppState;
use axum::Router;
use domain_events::{EventService, MongoEventRepository, handlers};
use tracing::info;

pub fn router(state: &AppState) -> Router {
    let repository = MongoEventRepository::new(state.db.clone());
    handlers::router(EventService::new(repository))
}

/// Ensure the schedule index exists before serving traffic.
pub async fn init_indexes(db: &mongodb::Database) -> eyre::Result<()> {
    let service = EventService::new(MongoEventRepository::new(db.clone()));
    service
        .init_indexes()
        .await
        .map_err(|e| eyre::eyre!("Failed to create event indexes: {}", e))?;

    info!("Event collection indexes created");
    Ok(())
}
