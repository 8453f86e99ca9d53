//! HTTP route assembly.
//!
//! Everything here ends up nested under `/api` by
//! `axum_helpers::create_router`, so the events router below serves
//! `/api/v3/app/events` and readiness serves `/api/ready`.

pub mod events;
pub mod health;

use axum::Router;

use crate::state::AppState;

pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/v3/app/events", events::router(state))
        .merge(health::router(state.clone()))
}
