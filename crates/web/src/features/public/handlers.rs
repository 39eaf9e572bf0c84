use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use storage::{Database, dto::report::EventResultsResponse, models::Event};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::WebError;

use super::services;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "public"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

#[utoipa::path(
    get,
    path = "/api/events",
    operation_id = "list_public_events",
    responses(
        (status = 200, description = "All events, most recent event date first", body = Vec<Event>)
    ),
    tag = "public"
)]
pub async fn list_events(State(db): State<Database>) -> Result<Json<Vec<Event>>, WebError> {
    let events = services::list_events(db.pool()).await?;

    Ok(Json(events))
}

#[utoipa::path(
    get,
    path = "/api/events/active",
    responses(
        (status = 200, description = "Results of the active event", body = EventResultsResponse),
        (status = 404, description = "No event is active")
    ),
    tag = "public"
)]
pub async fn get_active_event(State(db): State<Database>) -> Result<Response, WebError> {
    let results = services::get_active_event_results(db.pool()).await?;

    Ok(Json(results).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{event_id}",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event with anonymized judges, numbered contestants and rankings", body = EventResultsResponse),
        (status = 404, description = "Event not found")
    ),
    tag = "public"
)]
pub async fn get_event_results(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let results = services::get_event_results(db.pool(), event_id).await?;

    Ok(Json(results).into_response())
}
