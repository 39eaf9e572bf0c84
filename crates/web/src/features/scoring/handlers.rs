use axum::{
    Extension, Json,
    extract::{Path, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::score::{JudgeContestantResponse, JudgeEventResponse, ScoreEntry, SubmitScoresRequest},
    models::Judge,
};
use uuid::Uuid;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/judge/event",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Active event scoring sheet for the authenticated judge", body = JudgeEventResponse),
        (status = 401, description = "Unknown access key or judge not in the active event")
    ),
    tag = "judge"
)]
pub async fn get_judge_event(
    State(db): State<Database>,
    Extension(judge): Extension<Judge>,
) -> Result<Response, WebError> {
    let sheet = services::get_judge_event(db.pool(), &judge).await?;

    Ok(Json(sheet).into_response())
}

#[utoipa::path(
    get,
    path = "/api/judge/contestants/{contestant_id}",
    operation_id = "get_judge_contestant",
    params(
        ("contestant_id" = Uuid, Path, description = "Contestant ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Contestant with the judge's existing scores", body = JudgeContestantResponse),
        (status = 400, description = "Contestant does not belong to this event"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Contestant not found")
    ),
    tag = "judge"
)]
pub async fn get_contestant(
    State(db): State<Database>,
    Extension(judge): Extension<Judge>,
    Path(contestant_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let sheet = services::get_contestant_sheet(db.pool(), &judge, contestant_id).await?;

    Ok(Json(sheet).into_response())
}

#[utoipa::path(
    post,
    path = "/api/judge/contestants/{contestant_id}/scores",
    params(
        ("contestant_id" = Uuid, Path, description = "Contestant ID")
    ),
    request_body = SubmitScoresRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Scores stored, replacing the judge's previous scores for this contestant", body = Vec<ScoreEntry>),
        (status = 400, description = "Malformed body, invalid category or score out of range; nothing is stored"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Contestant not found")
    ),
    tag = "judge"
)]
pub async fn submit_scores(
    State(db): State<Database>,
    Extension(judge): Extension<Judge>,
    Path(contestant_id): Path<Uuid>,
    payload: Result<Json<SubmitScoresRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(req) = payload?;
    let stored = services::submit_scores(db.pool(), &judge, contestant_id, &req.scores).await?;

    Ok(Json(stored).into_response())
}
