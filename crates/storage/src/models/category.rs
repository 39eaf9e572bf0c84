use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A weighted scoring criterion. `max_score` bounds what a judge may assign;
/// `weight` is the category's share of the contestant total.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Category {
    pub category_id: Uuid,
    pub event_id: Uuid,
    pub name: String,
    pub max_score: i32,
    pub weight: Decimal,
    pub created_at: chrono::NaiveDateTime,
}
