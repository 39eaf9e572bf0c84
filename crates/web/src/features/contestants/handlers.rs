use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::contestant::{CreateContestantRequest, NumberedContestant, UpdateContestantRequest},
    models::Contestant,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/admin/events/{event_id}/contestants",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Contestants in candidate-number order", body = Vec<NumberedContestant>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Event not found")
    ),
    tag = "admin"
)]
pub async fn list_contestants(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<Vec<NumberedContestant>>, WebError> {
    let contestants = services::list_contestants(db.pool(), event_id).await?;

    Ok(Json(contestants))
}

#[utoipa::path(
    get,
    path = "/api/admin/events/{event_id}/contestants/{contestant_id}",
    params(
        ("event_id" = Uuid, Path, description = "Event ID"),
        ("contestant_id" = Uuid, Path, description = "Contestant ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Contestant found", body = Contestant),
        (status = 400, description = "Contestant does not belong to this event"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Contestant not found")
    ),
    tag = "admin"
)]
pub async fn get_contestant(
    State(db): State<Database>,
    Path((event_id, contestant_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, WebError> {
    let contestant = services::get_contestant(db.pool(), event_id, contestant_id).await?;

    Ok(Json(contestant).into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/events/{event_id}/contestants",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    request_body = CreateContestantRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Contestant registered", body = Contestant),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Event not found")
    ),
    tag = "admin"
)]
pub async fn create_contestant(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
    Json(req): Json<CreateContestantRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let contestant = services::create_contestant(db.pool(), event_id, &req).await?;

    Ok((StatusCode::CREATED, Json(contestant)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/admin/events/{event_id}/contestants/{contestant_id}",
    params(
        ("event_id" = Uuid, Path, description = "Event ID"),
        ("contestant_id" = Uuid, Path, description = "Contestant ID")
    ),
    request_body = UpdateContestantRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Contestant updated successfully", body = Contestant),
        (status = 400, description = "Validation error or contestant from another event"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Contestant not found")
    ),
    tag = "admin"
)]
pub async fn update_contestant(
    State(db): State<Database>,
    Path((event_id, contestant_id)): Path<(Uuid, Uuid)>,
    Json(update_req): Json<UpdateContestantRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated =
        services::update_contestant(db.pool(), event_id, contestant_id, &update_req).await?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/admin/events/{event_id}/contestants/{contestant_id}",
    params(
        ("event_id" = Uuid, Path, description = "Event ID"),
        ("contestant_id" = Uuid, Path, description = "Contestant ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Contestant and their scores deleted"),
        (status = 400, description = "Contestant does not belong to this event"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Contestant not found")
    ),
    tag = "admin"
)]
pub async fn delete_contestant(
    State(db): State<Database>,
    Path((event_id, contestant_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, WebError> {
    services::delete_contestant(db.pool(), event_id, contestant_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
