//! Shared application state.
//!
//! Handlers receive clones of this struct; the MongoDB client and
//! database handles are cheap Arc-backed clones over one connection
//! pool, opened once at startup.

use mongodb::{Client, Database};

#[derive(Clone)]
pub struct AppState {
    /// Configuration loaded from environment variables at startup
    pub config: crate::config::Config,
    /// MongoDB client, shared by the readiness check
    pub mongo_client: Client,
    /// Handle to the configured events database
    pub db: Database,
}
