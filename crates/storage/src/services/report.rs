use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::dto::judge::anonymize_judges;
use crate::dto::report::{
    CategoryBreakdown, ContestantBreakdown, EventReport, EventResultsResponse, JudgeScoreCell,
    ReportRanking,
};
use crate::models::EventSnapshot;
use crate::services::tabulation::{
    ScoreIndex, compute_event_statistics, compute_rankings, number_contestants, round_display,
};

/// Public leaderboard for an event. Judges are listed by panel position only.
pub fn build_public_results(snapshot: EventSnapshot) -> EventResultsResponse {
    let rankings = compute_rankings(
        &snapshot.contestants,
        &snapshot.categories,
        &snapshot.scores,
    );

    EventResultsResponse {
        judges: anonymize_judges(&snapshot.judges),
        contestants: number_contestants(&snapshot.contestants),
        rankings,
        event: snapshot.event,
        categories: snapshot.categories,
    }
}

/// Percentage of `possible` reached by `total`, one decimal place
fn score_percentage(total: Decimal, possible: i64) -> Decimal {
    if possible <= 0 {
        return Decimal::ZERO;
    }
    (total / Decimal::from(possible) * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Full tabulation report: leaderboard, per-judge breakdown and completion
/// statistics.
pub fn build_event_report(snapshot: EventSnapshot, generated_at: NaiveDateTime) -> EventReport {
    let EventSnapshot {
        event,
        contestants,
        categories,
        judges,
        scores,
    } = snapshot;

    let index = ScoreIndex::new(&scores);
    let panel = anonymize_judges(&judges);
    let statistics = compute_event_statistics(&contestants, &categories, &judges, &scores);

    let rankings = compute_rankings(&contestants, &categories, &scores)
        .into_iter()
        .map(|entry| ReportRanking {
            score_percentage: score_percentage(entry.total, statistics.total_possible_score),
            entry,
        })
        .collect();

    let detailed_scores = number_contestants(&contestants)
        .into_iter()
        .map(|numbered| {
            let contestant_id = numbered.contestant.contestant_id;

            let category_scores = categories
                .iter()
                .map(|category| {
                    let judge_scores = panel
                        .iter()
                        .map(|member| JudgeScoreCell {
                            judge_id: member.judge_id,
                            judge_name: member.name.clone(),
                            score: scores
                                .iter()
                                .find(|s| {
                                    s.contestant_id == contestant_id
                                        && s.category_id == category.category_id
                                        && s.judge_id == member.judge_id
                                })
                                .map(|s| s.score),
                        })
                        .collect();

                    let result = index.category_score(contestant_id, category);

                    CategoryBreakdown {
                        category_id: category.category_id,
                        category_name: category.name.clone(),
                        max_score: category.max_score,
                        weight: category.weight,
                        judge_scores,
                        average_score: result.display_average(),
                        weighted_score: result.display_weighted(),
                    }
                })
                .collect();

            ContestantBreakdown {
                total_score: round_display(index.contestant_total(contestant_id, &categories)),
                category_scores,
                contestant: numbered,
            }
        })
        .collect();

    let weight_sum = categories.iter().map(|c| c.weight).sum();

    EventReport {
        event,
        categories,
        judges: panel,
        rankings,
        detailed_scores,
        statistics,
        weight_sum,
        generated_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Event;
    use crate::services::tabulation::tests::{category, contestant, dec, judge, score};
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn event(event_id: Uuid) -> Event {
        Event {
            event_id,
            name: "Search for Mr. and Ms. Psychology".to_string(),
            description: String::new(),
            event_date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            is_active: true,
            created_at: NaiveDateTime::default(),
        }
    }

    fn sample_snapshot() -> EventSnapshot {
        let event_id = Uuid::new_v4();
        let ana = contestant(event_id, "Ana");
        let bea = contestant(event_id, "Bea");
        let talent = category(event_id, "Talent", 25, "0.25");
        let gown = category(event_id, "Evening Gown", 25, "0.25");
        let zed = judge(event_id, "Zed", Some("zed-key-1234"));
        let amy = judge(event_id, "Amy", Some("amy-key-1234"));

        let scores = vec![
            score(&ana, &talent, &zed, "20"),
            score(&ana, &talent, &amy, "24"),
            score(&ana, &gown, &zed, "22"),
            score(&bea, &talent, &zed, "25"),
        ];

        EventSnapshot {
            event: event(event_id),
            contestants: vec![ana, bea],
            categories: vec![talent, gown],
            judges: vec![amy, zed],
            scores,
        }
    }

    #[test]
    fn test_public_results_hide_judge_names() {
        let results = build_public_results(sample_snapshot());

        let names: Vec<&str> = results.judges.iter().map(|j| j.name.as_str()).collect();
        assert_eq!(names, vec!["Judge 1", "Judge 2"]);
        assert_eq!(results.contestants[0].candidate_number, 1);
        assert_eq!(results.contestants[0].contestant.name, "Ana");
    }

    #[test]
    fn test_public_results_rankings() {
        let results = build_public_results(sample_snapshot());

        // Ana: 22 * 0.25 + 22 * 0.25 = 11.00, Bea: 25 * 0.25 = 6.25
        assert_eq!(results.rankings[0].contestant.name, "Ana");
        assert_eq!(results.rankings[0].total, dec("11.00"));
        assert_eq!(results.rankings[0].label, "Winner");
        assert_eq!(results.rankings[1].total, dec("6.25"));
        assert_eq!(results.rankings[1].label, "1st Runner-Up");
    }

    #[test]
    fn test_report_breakdown_marks_missing_scores() {
        let report = build_event_report(sample_snapshot(), NaiveDateTime::default());

        let ana = &report.detailed_scores[0];
        assert_eq!(ana.contestant.contestant.name, "Ana");
        assert_eq!(ana.total_score, dec("11.00"));

        let gown = &ana.category_scores[1];
        assert_eq!(gown.category_name, "Evening Gown");
        assert_eq!(gown.average_score, dec("22.00"));
        assert_eq!(gown.weighted_score, dec("5.50"));

        // Judges are sorted by name in the snapshot: Amy is "Judge 1"
        assert_eq!(gown.judge_scores[0].judge_name, "Judge 1");
        assert_eq!(gown.judge_scores[0].score, None);
        assert_eq!(gown.judge_scores[1].judge_name, "Judge 2");
        assert_eq!(gown.judge_scores[1].score, Some(dec("22")));
    }

    #[test]
    fn test_report_percentages_and_statistics() {
        let report = build_event_report(sample_snapshot(), NaiveDateTime::default());

        // total_possible_score = 25 + 25 = 50; 11 / 50 = 22.0%, 6.25 / 50 = 12.5%
        assert_eq!(report.statistics.total_possible_score, 50);
        assert_eq!(report.rankings[0].score_percentage, dec("22.0"));
        assert_eq!(report.rankings[1].score_percentage, dec("12.5"));

        // 4 of 2 * 2 * 2 = 8 submissions
        assert_eq!(report.statistics.total_scores_submitted, 4);
        assert_eq!(report.statistics.total_possible_submissions, 8);
        assert_eq!(report.statistics.completion_percentage, 50);
        assert_eq!(report.weight_sum, dec("0.50"));
    }

    #[test]
    fn test_report_for_event_without_categories() {
        let mut snapshot = sample_snapshot();
        snapshot.categories.clear();
        snapshot.scores.clear();

        let report = build_event_report(snapshot, NaiveDateTime::default());

        assert_eq!(report.weight_sum, Decimal::ZERO);
        assert_eq!(report.statistics.completion_percentage, 0);
        assert!(
            report
                .rankings
                .iter()
                .all(|r| r.score_percentage == Decimal::ZERO)
        );
    }

    #[test]
    fn test_score_percentage_rounds_half_up() {
        // 1 / 8 * 100 = 12.5 -> one decimal stays, 1 / 16 * 100 = 6.25 -> 6.3
        assert_eq!(score_percentage(dec("1"), 8), dec("12.5"));
        assert_eq!(score_percentage(dec("1"), 16), dec("6.3"));
        assert_eq!(score_percentage(dec("10"), 0), Decimal::ZERO);
    }
}
