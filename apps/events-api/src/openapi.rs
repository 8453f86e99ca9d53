//! Combined OpenAPI document, served by the doc UIs that
//! `axum_helpers::create_router` mounts.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Events API",
        version = "0.1.0",
        description = "REST API for managing scheduled events, backed by MongoDB",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/v3/app/events", api = domain_events::ApiDoc)
    )
)]
pub struct ApiDoc;
