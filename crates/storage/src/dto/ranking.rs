use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::Contestant;

/// One row of an event leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RankedEntry {
    pub contestant_id: Uuid,
    /// Weighted total rounded to two decimals
    pub total: Decimal,
    pub rank: u32,
    pub label: String,
    pub candidate_number: u32,
    pub contestant: Contestant,
}
