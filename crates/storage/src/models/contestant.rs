use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Contestant {
    pub contestant_id: Uuid,
    pub event_id: Uuid,
    pub name: String,
    pub age: i32,
    pub course: String,
    pub year_level: String,
    pub photo_url: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}
