use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{Category, Event};

use super::contestant::NumberedContestant;
use super::judge::AnonymousJudge;
use super::ranking::RankedEntry;

/// Completion and scale figures for an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EventStatistics {
    pub total_contestants: usize,
    pub total_judges: usize,
    pub total_categories: usize,
    /// Sum of raw category maxima; not on the same scale as weighted totals
    pub total_possible_score: i64,
    pub average_total_score: Decimal,
    pub total_scores_submitted: usize,
    pub total_possible_submissions: usize,
    pub completion_percentage: u32,
}

/// Public results page for one event
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventResultsResponse {
    pub event: Event,
    pub categories: Vec<Category>,
    pub judges: Vec<AnonymousJudge>,
    pub contestants: Vec<NumberedContestant>,
    pub rankings: Vec<RankedEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportRanking {
    #[serde(flatten)]
    pub entry: RankedEntry,
    /// Total as a percentage of `total_possible_score`, one decimal
    pub score_percentage: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JudgeScoreCell {
    pub judge_id: Uuid,
    pub judge_name: String,
    pub score: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryBreakdown {
    pub category_id: Uuid,
    pub category_name: String,
    pub max_score: i32,
    pub weight: Decimal,
    pub judge_scores: Vec<JudgeScoreCell>,
    pub average_score: Decimal,
    pub weighted_score: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContestantBreakdown {
    pub contestant: NumberedContestant,
    pub category_scores: Vec<CategoryBreakdown>,
    pub total_score: Decimal,
}

/// Full tabulation report for administrators
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventReport {
    pub event: Event,
    pub categories: Vec<Category>,
    pub judges: Vec<AnonymousJudge>,
    pub rankings: Vec<ReportRanking>,
    pub detailed_scores: Vec<ContestantBreakdown>,
    pub statistics: EventStatistics,
    /// Sum of category weights; expected to be 1 but never enforced
    pub weight_sum: Decimal,
    pub generated_at: NaiveDateTime,
}
