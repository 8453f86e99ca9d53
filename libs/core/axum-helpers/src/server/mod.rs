//! Server lifecycle: router assembly with OpenAPI docs, health
//! endpoints, and graceful shutdown with bounded cleanup.

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_app, create_production_app, create_router};
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
