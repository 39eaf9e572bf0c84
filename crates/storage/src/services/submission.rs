use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::score::RawScore;
use crate::error::{Result, SubmissionError};
use crate::models::{Category, Contestant, Judge, Score};
use crate::repository::category::CategoryRepository;
use crate::repository::contestant::ContestantRepository;
use crate::repository::score::ScoreRepository;

/// A validated submission: one judge's full set of scores for one contestant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedScores {
    pub event_id: Uuid,
    pub judge_id: Uuid,
    pub contestant_id: Uuid,
    pub entries: Vec<NormalizedScore>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedScore {
    pub category_id: Uuid,
    pub score: Decimal,
}

/// Checks a judge's submission against the event's categories.
///
/// The first problem found rejects the whole submission; nothing is partially
/// accepted. `categories` may contain other events' categories, only those of
/// the judge's event count as valid targets.
pub fn validate_and_normalize_submission(
    judge: &Judge,
    contestant: &Contestant,
    raw_scores: &BTreeMap<Uuid, RawScore>,
    categories: &[Category],
) -> std::result::Result<NormalizedScores, SubmissionError> {
    if judge.is_placeholder() {
        return Err(SubmissionError::PlaceholderJudge);
    }

    if contestant.event_id != judge.event_id {
        return Err(SubmissionError::ContestantNotInEvent);
    }

    let mut entries = Vec::with_capacity(raw_scores.len());

    for (category_id, raw) in raw_scores {
        let category = categories
            .iter()
            .find(|c| c.category_id == *category_id && c.event_id == judge.event_id)
            .ok_or(SubmissionError::UnknownCategory(*category_id))?;

        let value = raw.to_f64();
        if !value.is_finite() {
            return Err(SubmissionError::NonFiniteScore {
                category: category.name.clone(),
            });
        }

        if value < 0.0 || value > f64::from(category.max_score) {
            return Err(SubmissionError::ScoreOutOfRange {
                category: category.name.clone(),
                max_score: category.max_score,
            });
        }

        // normalize() also folds -0 into 0
        let score = Decimal::from_f64(value)
            .map(|score| score.normalize())
            .ok_or_else(|| SubmissionError::NonFiniteScore {
                category: category.name.clone(),
            })?;

        entries.push(NormalizedScore {
            category_id: *category_id,
            score,
        });
    }

    Ok(NormalizedScores {
        event_id: judge.event_id,
        judge_id: judge.judge_id,
        contestant_id: contestant.contestant_id,
        entries,
    })
}

/// Validates and stores a judge's scores for a contestant, replacing whatever
/// that judge had submitted for them before.
pub async fn submit_scores(
    pool: &PgPool,
    judge: &Judge,
    contestant_id: Uuid,
    raw_scores: &BTreeMap<Uuid, RawScore>,
) -> Result<Vec<Score>> {
    let contestant = ContestantRepository::new(pool)
        .find_by_id(contestant_id)
        .await?;
    let categories = CategoryRepository::new(pool)
        .list_for_event(judge.event_id)
        .await?;

    let normalized = validate_and_normalize_submission(judge, &contestant, raw_scores, &categories)
        .inspect_err(|e| {
            tracing::warn!(
                judge_id = %judge.judge_id,
                contestant_id = %contestant_id,
                "Rejected score submission: {}",
                e
            );
        })?;

    let stored = ScoreRepository::new(pool)
        .replace_for_judge_and_contestant(&normalized)
        .await?;

    tracing::info!(
        judge_id = %judge.judge_id,
        contestant_id = %contestant_id,
        categories = stored.len(),
        "Scores submitted"
    );

    Ok(stored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::tabulation::tests::{category, contestant, dec, judge};

    fn submission(entries: &[(Uuid, RawScore)]) -> BTreeMap<Uuid, RawScore> {
        entries.iter().cloned().collect()
    }

    #[test]
    fn test_accepts_boundary_values() {
        let event_id = Uuid::new_v4();
        let judge = judge(event_id, "Judge A", Some("judge-a-key"));
        let maria = contestant(event_id, "Maria Santos");
        let beauty = category(event_id, "Beauty & Poise", 25, "0.25");
        let talent = category(event_id, "Talent", 20, "0.2");

        let raw = submission(&[
            (beauty.category_id, RawScore::Number(0.0)),
            (talent.category_id, RawScore::Number(20.0)),
        ]);

        let normalized =
            validate_and_normalize_submission(&judge, &maria, &raw, &[beauty.clone(), talent.clone()])
                .unwrap();

        assert_eq!(normalized.event_id, event_id);
        assert_eq!(normalized.judge_id, judge.judge_id);
        assert_eq!(normalized.contestant_id, maria.contestant_id);
        assert_eq!(normalized.entries.len(), 2);
        let talent_entry = normalized
            .entries
            .iter()
            .find(|e| e.category_id == talent.category_id)
            .unwrap();
        assert_eq!(talent_entry.score, dec("20"));
        let beauty_entry = normalized
            .entries
            .iter()
            .find(|e| e.category_id == beauty.category_id)
            .unwrap();
        assert_eq!(beauty_entry.score, Decimal::ZERO);
    }

    #[test]
    fn test_rejects_values_just_outside_range() {
        let event_id = Uuid::new_v4();
        let judge = judge(event_id, "Judge A", Some("judge-a-key"));
        let maria = contestant(event_id, "Maria Santos");
        let beauty = category(event_id, "Beauty & Poise", 25, "0.25");
        let categories = [beauty.clone()];

        for value in [26.0, -1.0, 25.01] {
            let raw = submission(&[(beauty.category_id, RawScore::Number(value))]);
            let err = validate_and_normalize_submission(&judge, &maria, &raw, &categories)
                .unwrap_err();
            assert_eq!(
                err,
                SubmissionError::ScoreOutOfRange {
                    category: "Beauty & Poise".to_string(),
                    max_score: 25,
                }
            );
        }
    }

    #[test]
    fn test_negative_zero_is_stored_as_zero() {
        let event_id = Uuid::new_v4();
        let judge = judge(event_id, "Judge A", Some("judge-a-key"));
        let maria = contestant(event_id, "Maria Santos");
        let beauty = category(event_id, "Beauty & Poise", 25, "0.25");

        for raw in [RawScore::Number(-0.0), RawScore::Text("-0".to_string())] {
            let raw = submission(&[(beauty.category_id, raw)]);
            let normalized = validate_and_normalize_submission(
                &judge,
                &maria,
                &raw,
                std::slice::from_ref(&beauty),
            )
            .unwrap();

            let score = normalized.entries[0].score;
            assert!(!score.is_sign_negative());
            assert_eq!(score.to_string(), "0");
        }
    }

    #[test]
    fn test_rejects_non_numeric_values() {
        let event_id = Uuid::new_v4();
        let judge = judge(event_id, "Judge A", Some("judge-a-key"));
        let maria = contestant(event_id, "Maria Santos");
        let beauty = category(event_id, "Beauty & Poise", 25, "0.25");

        for raw in [
            RawScore::Number(f64::NAN),
            RawScore::Number(f64::INFINITY),
            RawScore::Text("twenty".to_string()),
            RawScore::Text(String::new()),
        ] {
            let raw = submission(&[(beauty.category_id, raw)]);
            let err = validate_and_normalize_submission(
                &judge,
                &maria,
                &raw,
                std::slice::from_ref(&beauty),
            )
            .unwrap_err();
            assert!(matches!(err, SubmissionError::NonFiniteScore { .. }));
        }
    }

    #[test]
    fn test_accepts_numeric_text() {
        let event_id = Uuid::new_v4();
        let judge = judge(event_id, "Judge A", Some("judge-a-key"));
        let maria = contestant(event_id, "Maria Santos");
        let beauty = category(event_id, "Beauty & Poise", 25, "0.25");

        let raw = submission(&[(beauty.category_id, RawScore::Text(" 18.5 ".to_string()))]);
        let normalized =
            validate_and_normalize_submission(&judge, &maria, &raw, std::slice::from_ref(&beauty))
                .unwrap();
        assert_eq!(normalized.entries[0].score, dec("18.5"));
    }

    #[test]
    fn test_rejects_contestant_from_another_event() {
        let event_id = Uuid::new_v4();
        let judge = judge(event_id, "Judge A", Some("judge-a-key"));
        let outsider = contestant(Uuid::new_v4(), "Maria Santos");
        let beauty = category(event_id, "Beauty & Poise", 25, "0.25");

        let raw = submission(&[(beauty.category_id, RawScore::Number(20.0))]);
        let err = validate_and_normalize_submission(
            &judge,
            &outsider,
            &raw,
            std::slice::from_ref(&beauty),
        )
        .unwrap_err();
        assert_eq!(err, SubmissionError::ContestantNotInEvent);
    }

    #[test]
    fn test_rejects_category_from_another_event() {
        let event_id = Uuid::new_v4();
        let judge = judge(event_id, "Judge A", Some("judge-a-key"));
        let maria = contestant(event_id, "Maria Santos");
        let beauty = category(event_id, "Beauty & Poise", 25, "0.25");
        let foreign = category(Uuid::new_v4(), "Talent", 20, "0.2");

        let raw = submission(&[
            (beauty.category_id, RawScore::Number(20.0)),
            (foreign.category_id, RawScore::Number(10.0)),
        ]);
        let err = validate_and_normalize_submission(&judge, &maria, &raw, &[beauty, foreign.clone()])
            .unwrap_err();
        assert_eq!(err, SubmissionError::UnknownCategory(foreign.category_id));
    }

    #[test]
    fn test_one_bad_value_rejects_whole_submission() {
        let event_id = Uuid::new_v4();
        let judge = judge(event_id, "Judge A", Some("judge-a-key"));
        let maria = contestant(event_id, "Maria Santos");
        let beauty = category(event_id, "Beauty & Poise", 25, "0.25");
        let talent = category(event_id, "Talent", 20, "0.2");

        let raw = submission(&[
            (beauty.category_id, RawScore::Number(22.0)),
            (talent.category_id, RawScore::Number(21.0)),
        ]);
        assert!(validate_and_normalize_submission(&judge, &maria, &raw, &[beauty, talent]).is_err());
    }

    #[test]
    fn test_placeholder_judge_cannot_submit() {
        let event_id = Uuid::new_v4();
        let placeholder = judge(event_id, "Judge C", None);
        let maria = contestant(event_id, "Maria Santos");
        let beauty = category(event_id, "Beauty & Poise", 25, "0.25");

        let raw = submission(&[(beauty.category_id, RawScore::Number(20.0))]);
        let err = validate_and_normalize_submission(
            &placeholder,
            &maria,
            &raw,
            std::slice::from_ref(&beauty),
        )
        .unwrap_err();
        assert_eq!(err, SubmissionError::PlaceholderJudge);
    }

    #[test]
    fn test_empty_submission_clears_scores() {
        let event_id = Uuid::new_v4();
        let judge = judge(event_id, "Judge A", Some("judge-a-key"));
        let maria = contestant(event_id, "Maria Santos");

        let normalized =
            validate_and_normalize_submission(&judge, &maria, &BTreeMap::new(), &[]).unwrap();
        assert!(normalized.entries.is_empty());
    }
}
