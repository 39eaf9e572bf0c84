use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One judge's rating of one contestant in one category
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Score {
    pub score_id: Uuid,
    pub event_id: Uuid,
    pub contestant_id: Uuid,
    pub category_id: Uuid,
    pub judge_id: Uuid,
    pub score: Decimal,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
