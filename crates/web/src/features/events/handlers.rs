use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::event::{CreateEventRequest, EventSummary, UpdateEventRequest},
    models::Event,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/admin/events",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "All events with contestant, judge and category counts", body = Vec<EventSummary>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin"
)]
pub async fn list_events(State(db): State<Database>) -> Result<Json<Vec<EventSummary>>, WebError> {
    let events = services::list_events(db.pool()).await?;

    Ok(Json(events))
}

#[utoipa::path(
    get,
    path = "/api/admin/events/{event_id}",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Event found", body = Event),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Event not found")
    ),
    tag = "admin"
)]
pub async fn get_event(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let event = services::get_event(db.pool(), event_id).await?;

    Ok(Json(event).into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/events",
    request_body = CreateEventRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Event created and activated", body = Event),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin"
)]
pub async fn create_event(
    State(db): State<Database>,
    Json(req): Json<CreateEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let event = services::create_event(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(event)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/admin/events/{event_id}",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    request_body = UpdateEventRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Event updated successfully", body = Event),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Event not found")
    ),
    tag = "admin"
)]
pub async fn update_event(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
    Json(update_req): Json<UpdateEventRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_event(db.pool(), event_id, &update_req).await?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/events/{event_id}/activate",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Event is now the only active event", body = Event),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Event not found")
    ),
    tag = "admin"
)]
pub async fn activate_event(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let event = services::activate_event(db.pool(), event_id).await?;

    Ok(Json(event).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/admin/events/{event_id}",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Event and all of its data deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Event not found")
    ),
    tag = "admin"
)]
pub async fn delete_event(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_event(db.pool(), event_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
