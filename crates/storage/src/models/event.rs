use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{Category, Contestant, Judge, Score};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Event {
    pub event_id: Uuid,
    pub name: String,
    pub description: String,
    pub event_date: NaiveDate,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

/// Everything the tabulation needs for one event, fetched in a single pass.
///
/// Contestants and judges are ordered by name, categories by creation time.
#[derive(Debug, Clone)]
pub struct EventSnapshot {
    pub event: Event,
    pub contestants: Vec<Contestant>,
    pub categories: Vec<Category>,
    pub judges: Vec<Judge>,
    pub scores: Vec<Score>,
}
