use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::judge::{CreateJudgeRequest, JudgeResponse, UpdateJudgeRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/admin/events/{event_id}/judges",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Judging panel of the event", body = Vec<JudgeResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Event not found")
    ),
    tag = "admin"
)]
pub async fn list_judges(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<Vec<JudgeResponse>>, WebError> {
    let judges = services::list_judges(db.pool(), event_id).await?;

    Ok(Json(judges))
}

#[utoipa::path(
    get,
    path = "/api/admin/events/{event_id}/judges/{judge_id}",
    params(
        ("event_id" = Uuid, Path, description = "Event ID"),
        ("judge_id" = Uuid, Path, description = "Judge ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Judge found", body = JudgeResponse),
        (status = 400, description = "Judge does not belong to this event"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Judge not found")
    ),
    tag = "admin"
)]
pub async fn get_judge(
    State(db): State<Database>,
    Path((event_id, judge_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, WebError> {
    let judge = services::get_judge(db.pool(), event_id, judge_id).await?;

    Ok(Json(judge).into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/events/{event_id}/judges",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    request_body = CreateJudgeRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Judge added to the panel", body = JudgeResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Event not found"),
        (status = 409, description = "Access key already in use")
    ),
    tag = "admin"
)]
pub async fn create_judge(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
    Json(req): Json<CreateJudgeRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let judge = services::create_judge(db.pool(), event_id, &req).await?;

    Ok((StatusCode::CREATED, Json(judge)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/admin/events/{event_id}/judges/{judge_id}",
    params(
        ("event_id" = Uuid, Path, description = "Event ID"),
        ("judge_id" = Uuid, Path, description = "Judge ID")
    ),
    request_body = UpdateJudgeRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Judge updated successfully", body = JudgeResponse),
        (status = 400, description = "Validation error or judge from another event"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Judge not found"),
        (status = 409, description = "Access key already in use")
    ),
    tag = "admin"
)]
pub async fn update_judge(
    State(db): State<Database>,
    Path((event_id, judge_id)): Path<(Uuid, Uuid)>,
    Json(update_req): Json<UpdateJudgeRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_judge(db.pool(), event_id, judge_id, &update_req).await?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/admin/events/{event_id}/judges/{judge_id}",
    params(
        ("event_id" = Uuid, Path, description = "Event ID"),
        ("judge_id" = Uuid, Path, description = "Judge ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Judge and their scores deleted"),
        (status = 400, description = "Judge does not belong to this event"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Judge not found")
    ),
    tag = "admin"
)]
pub async fn delete_judge(
    State(db): State<Database>,
    Path((event_id, judge_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, WebError> {
    services::delete_judge(db.pool(), event_id, judge_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
