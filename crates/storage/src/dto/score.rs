use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{Category, Contestant, Event, Score};

use super::contestant::NumberedContestant;

/// A score value as typed into the judging form: a JSON number or a numeric string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawScore {
    Number(f64),
    Text(String),
}

impl RawScore {
    /// Unparseable text becomes NaN so it fails the finiteness check
    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Number(value) => *value,
            Self::Text(text) => text.trim().parse().unwrap_or(f64::NAN),
        }
    }
}

/// Request payload for a judge's scores for one contestant, keyed by category
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SubmitScoresRequest {
    #[schema(value_type = Object)]
    pub scores: BTreeMap<Uuid, RawScore>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScoreEntry {
    pub contestant_id: Uuid,
    pub category_id: Uuid,
    pub score: Decimal,
}

impl From<Score> for ScoreEntry {
    fn from(score: Score) -> Self {
        Self {
            contestant_id: score.contestant_id,
            category_id: score.category_id,
            score: score.score,
        }
    }
}

/// The scoring sheet a judge sees for the active event
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JudgeEventResponse {
    pub judge_id: Uuid,
    pub event: Event,
    pub contestants: Vec<NumberedContestant>,
    pub categories: Vec<Category>,
    pub scores: Vec<ScoreEntry>,
}

/// One contestant's scoring form with the judge's previous entries
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JudgeContestantResponse {
    pub judge_id: Uuid,
    pub contestant: Contestant,
    pub categories: Vec<Category>,
    pub existing_scores: Vec<ScoreEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_score_accepts_numbers_and_numeric_strings() {
        let request: SubmitScoresRequest = serde_json::from_str(
            r#"{"scores": {
                "7f0c8a4e-5b8e-4c3a-9a41-2f1f3b9a6c10": 20,
                "2d1e0b6a-1c3f-4e5d-8a9b-0c1d2e3f4a5b": "18.5",
                "9a8b7c6d-5e4f-4a3b-8c2d-1e0f9a8b7c6d": "abc"
            }}"#,
        )
        .unwrap();

        let values: Vec<f64> = request.scores.values().map(RawScore::to_f64).collect();
        assert_eq!(values.len(), 3);
        assert!(values.contains(&20.0));
        assert!(values.contains(&18.5));
        assert!(values.iter().any(|v| v.is_nan()));
    }
}
