use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::{
    AppError,
    errors::responses::{BadRequestResponse, InternalServerErrorResponse, NotFoundResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{CreatedEvent, Event, EventInput, ListEventsQuery, OperationMessage};
use crate::repository::EventRepository;
use crate::service::EventService;

/// OpenAPI documentation for Events API
#[derive(OpenApi)]
#[openapi(
    paths(query_events, create_event, update_event, delete_event),
    components(
        schemas(Event, EventInput, CreatedEvent, OperationMessage),
        responses(NotFoundResponse, BadRequestResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Events", description = "Event management endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Create the events router with all HTTP endpoints
pub fn router<R: EventRepository + 'static>(service: EventService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(query_events).post(create_event))
        .route("/{id}", axum::routing::put(update_event).delete(delete_event))
        .with_state(shared_service)
}

/// Query events: single lookup or latest listing
///
/// Dispatches on the query string: `?id=<uuid>` returns one event,
/// otherwise `?type=latest&limit=&page=` returns a page of events
/// ordered by schedule, newest first.
#[utoipa::path(
    get,
    path = "",
    tag = "Events",
    params(ListEventsQuery),
    responses(
        (status = 200, description = "Event or page of events", body = Vec<Event>),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn query_events<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    Query(query): Query<ListEventsQuery>,
) -> Result<Response, AppError> {
    if let Some(ref id) = query.id {
        let event = service.get_event(id).await?;
        return Ok(Json(event).into_response());
    }

    let events = service
        .list_latest(query.event_type.as_deref(), query.limit, query.page)
        .await?;
    Ok(Json(events).into_response())
}

/// Create a new event
#[utoipa::path(
    post,
    path = "",
    tag = "Events",
    request_body = EventInput,
    responses(
        (status = 200, description = "Event created successfully", body = CreatedEvent),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    payload: Result<Json<EventInput>, JsonRejection>,
) -> Result<Json<CreatedEvent>, AppError> {
    let Json(input) = payload?;
    let id = service.create_event(input).await?;
    Ok(Json(CreatedEvent { id }))
}

/// Update an event
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Events",
    params(
        ("id" = String, Path, description = "Event ID")
    ),
    request_body = EventInput,
    responses(
        (status = 200, description = "Event updated successfully", body = OperationMessage),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    Path(id): Path<String>,
    payload: Result<Json<EventInput>, JsonRejection>,
) -> Result<Json<OperationMessage>, AppError> {
    let Json(input) = payload?;
    service.update_event(&id, input).await?;
    Ok(Json(OperationMessage::new("Event updated successfully")))
}

/// Delete an event
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Events",
    params(
        ("id" = String, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event deleted successfully", body = OperationMessage),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_event<R: EventRepository>(
    State(service): State<Arc<EventService<R>>>,
    Path(id): Path<String>,
) -> Result<Json<OperationMessage>, AppError> {
    service.delete_event(&id).await?;
    Ok(Json(OperationMessage::new("Event deleted successfully")))
}
