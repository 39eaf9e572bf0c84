use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Judge {
    pub judge_id: Uuid,
    pub event_id: Uuid,
    pub name: String,
    pub role: String,
    #[serde(skip_serializing)]
    pub access_key: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}

impl Judge {
    /// A judge without a credential is a placeholder on the panel and can't score
    pub fn is_placeholder(&self) -> bool {
        self.access_key.is_none()
    }
}
