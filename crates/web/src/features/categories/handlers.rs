use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::category::{CreateCategoryRequest, UpdateCategoryRequest},
    models::Category,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/admin/events/{event_id}/categories",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Scoring categories of the event", body = Vec<Category>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Event not found")
    ),
    tag = "admin"
)]
pub async fn list_categories(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<Vec<Category>>, WebError> {
    let categories = services::list_categories(db.pool(), event_id).await?;

    Ok(Json(categories))
}

#[utoipa::path(
    get,
    path = "/api/admin/events/{event_id}/categories/{category_id}",
    params(
        ("event_id" = Uuid, Path, description = "Event ID"),
        ("category_id" = Uuid, Path, description = "Category ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Category found", body = Category),
        (status = 400, description = "Category does not belong to this event"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Category not found")
    ),
    tag = "admin"
)]
pub async fn get_category(
    State(db): State<Database>,
    Path((event_id, category_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, WebError> {
    let category = services::get_category(db.pool(), event_id, category_id).await?;

    Ok(Json(category).into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/events/{event_id}/categories",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    request_body = CreateCategoryRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Event not found")
    ),
    tag = "admin"
)]
pub async fn create_category(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let category = services::create_category(db.pool(), event_id, &req).await?;

    Ok((StatusCode::CREATED, Json(category)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/admin/events/{event_id}/categories/{category_id}",
    params(
        ("event_id" = Uuid, Path, description = "Event ID"),
        ("category_id" = Uuid, Path, description = "Category ID")
    ),
    request_body = UpdateCategoryRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Category updated successfully", body = Category),
        (status = 400, description = "Validation error or category from another event"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Category not found")
    ),
    tag = "admin"
)]
pub async fn update_category(
    State(db): State<Database>,
    Path((event_id, category_id)): Path<(Uuid, Uuid)>,
    Json(update_req): Json<UpdateCategoryRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_category(db.pool(), event_id, category_id, &update_req).await?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/admin/events/{event_id}/categories/{category_id}",
    params(
        ("event_id" = Uuid, Path, description = "Event ID"),
        ("category_id" = Uuid, Path, description = "Category ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Category and its scores deleted"),
        (status = 400, description = "Category does not belong to this event"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Category not found")
    ),
    tag = "admin"
)]
pub async fn delete_category(
    State(db): State<Database>,
    Path((event_id, category_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, WebError> {
    services::delete_category(db.pool(), event_id, category_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
