//! Score aggregation: per-category averages, weighted totals, leaderboard and
//! event statistics. Everything here is a pure function over data already
//! fetched for the request.
//!
//! Rounding is for display only. Averages and weighted scores are carried at
//! full `Decimal` precision into the contestant total, and only the values
//! handed back to callers are rounded (two places, half-up).

use std::cmp::Ordering;
use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy};
use uuid::Uuid;

use crate::dto::contestant::NumberedContestant;
use crate::dto::ranking::RankedEntry;
use crate::dto::report::EventStatistics;
use crate::models::{Category, Contestant, Judge, Score};

pub const DISPLAY_DECIMALS: u32 = 2;

/// Rounds to two decimal places, half away from zero
pub fn round_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}

/// Average and weighted contribution of one contestant in one category.
/// Both fields are unrounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryScore {
    pub average: Decimal,
    pub weighted: Decimal,
    pub judge_count: usize,
}

impl CategoryScore {
    pub fn display_average(&self) -> Decimal {
        round_display(self.average)
    }

    pub fn display_weighted(&self) -> Decimal {
        round_display(self.weighted)
    }
}

/// Reduces the judges' scores for one (contestant, category) pair.
///
/// An unscored pair contributes zero rather than being excluded.
pub fn compute_category_score(scores: &[Decimal], weight: Decimal) -> CategoryScore {
    if scores.is_empty() {
        return CategoryScore::default();
    }

    let sum: Decimal = scores.iter().sum();
    let average = sum / Decimal::from(scores.len());

    CategoryScore {
        average,
        weighted: average * weight,
        judge_count: scores.len(),
    }
}

/// Raw score values grouped by (contestant, category)
#[derive(Debug, Default)]
pub struct ScoreIndex {
    values: HashMap<(Uuid, Uuid), Vec<Decimal>>,
}

impl ScoreIndex {
    pub fn new(scores: &[Score]) -> Self {
        let mut values: HashMap<(Uuid, Uuid), Vec<Decimal>> = HashMap::new();
        for score in scores {
            values
                .entry((score.contestant_id, score.category_id))
                .or_default()
                .push(score.score);
        }
        Self { values }
    }

    pub fn values(&self, contestant_id: Uuid, category_id: Uuid) -> &[Decimal] {
        self.values
            .get(&(contestant_id, category_id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn category_score(&self, contestant_id: Uuid, category: &Category) -> CategoryScore {
        compute_category_score(
            self.values(contestant_id, category.category_id),
            category.weight,
        )
    }

    /// Unrounded sum of the contestant's weighted category scores
    pub fn contestant_total(&self, contestant_id: Uuid, categories: &[Category]) -> Decimal {
        categories
            .iter()
            .map(|category| self.category_score(contestant_id, category).weighted)
            .sum()
    }
}

/// Orders names alphabetically ignoring case; exact comparison breaks ties
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Candidate numbers keyed by contestant id: 1-based alphabetical position
pub fn candidate_numbers(contestants: &[Contestant]) -> HashMap<Uuid, u32> {
    let mut ordered: Vec<&Contestant> = contestants.iter().collect();
    ordered.sort_by(|a, b| compare_names(&a.name, &b.name));

    ordered
        .into_iter()
        .zip(1u32..)
        .map(|(contestant, number)| (contestant.contestant_id, number))
        .collect()
}

/// Contestants in candidate-number order
pub fn number_contestants(contestants: &[Contestant]) -> Vec<NumberedContestant> {
    let mut ordered: Vec<&Contestant> = contestants.iter().collect();
    ordered.sort_by(|a, b| compare_names(&a.name, &b.name));

    ordered
        .into_iter()
        .zip(1u32..)
        .map(|(contestant, candidate_number)| NumberedContestant {
            candidate_number,
            contestant: contestant.clone(),
        })
        .collect()
}

/// Pageant title for a leaderboard position
pub fn rank_label(rank: u32) -> String {
    match rank {
        1 => "Winner".to_string(),
        2 => "1st Runner-Up".to_string(),
        3 => "2nd Runner-Up".to_string(),
        n => format!("{}th Runner-Up", n.saturating_sub(1)),
    }
}

/// Builds the leaderboard for an event.
///
/// Contestants are sorted by rounded total, highest first, and ranked by
/// position: equal totals get consecutive ranks in input order (the sort is
/// stable), never a shared rank.
pub fn compute_rankings(
    contestants: &[Contestant],
    categories: &[Category],
    scores: &[Score],
) -> Vec<RankedEntry> {
    let index = ScoreIndex::new(scores);
    let numbers = candidate_numbers(contestants);

    let mut totals: Vec<(&Contestant, Decimal)> = contestants
        .iter()
        .map(|contestant| {
            let total = index.contestant_total(contestant.contestant_id, categories);
            (contestant, round_display(total))
        })
        .collect();

    totals.sort_by(|a, b| b.1.cmp(&a.1));

    totals
        .into_iter()
        .zip(1u32..)
        .map(|((contestant, total), rank)| RankedEntry {
            contestant_id: contestant.contestant_id,
            total,
            rank,
            label: rank_label(rank),
            candidate_number: numbers
                .get(&contestant.contestant_id)
                .copied()
                .unwrap_or_default(),
            contestant: contestant.clone(),
        })
        .collect()
}

/// Completion and scale statistics for an event
pub fn compute_event_statistics(
    contestants: &[Contestant],
    categories: &[Category],
    judges: &[Judge],
    scores: &[Score],
) -> EventStatistics {
    let index = ScoreIndex::new(scores);

    let total_possible_score = categories
        .iter()
        .map(|category| i64::from(category.max_score))
        .sum();

    let average_total_score = if contestants.is_empty() {
        Decimal::ZERO
    } else {
        let sum: Decimal = contestants
            .iter()
            .map(|c| round_display(index.contestant_total(c.contestant_id, categories)))
            .sum();
        round_display(sum / Decimal::from(contestants.len()))
    };

    let total_possible_submissions = contestants.len() * categories.len() * judges.len();

    EventStatistics {
        total_contestants: contestants.len(),
        total_judges: judges.len(),
        total_categories: categories.len(),
        total_possible_score,
        average_total_score,
        total_scores_submitted: scores.len(),
        total_possible_submissions,
        completion_percentage: completion_percentage(scores.len(), total_possible_submissions),
    }
}

/// `round(100 * submitted / possible)`, half-up, 0 when nothing is possible
pub fn completion_percentage(submitted: usize, possible: usize) -> u32 {
    if possible == 0 {
        return 0;
    }
    let submitted = submitted as u64;
    let possible = possible as u64;
    ((200 * submitted + possible) / (2 * possible)) as u32
}
