//! Shared building blocks for the workspace's Axum services.
//!
//! - [`errors`] — structured JSON error responses with stable codes
//! - [`http`] — middleware (security headers)
//! - [`server`] — router assembly, health endpoints, graceful shutdown
//!
//! A service wires these together like so:
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::app_info;
//!
//! let router = create_router::<ApiDoc>(api_routes).await?;
//! let app = router.merge(health_router(app_info!()));
//! create_production_app(app, &config.server, timeout, cleanup).await?;
//! ```

pub mod errors;
pub mod http;
pub mod server;

pub use errors::{AppError, ErrorCode, ErrorResponse};
pub use http::security_headers;
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_app, create_production_app,
    create_router, health_router, run_health_checks, shutdown_signal,
};
