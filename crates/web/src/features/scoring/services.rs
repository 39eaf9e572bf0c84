use std::collections::BTreeMap;

use sqlx::PgPool;
use storage::{
    dto::score::{JudgeContestantResponse, JudgeEventResponse, RawScore, ScoreEntry},
    error::Result,
    models::Judge,
    repository::{
        category::CategoryRepository, contestant::ContestantRepository, event::EventRepository,
        score::ScoreRepository,
    },
    services::{submission, tabulation::number_contestants},
};
use uuid::Uuid;

/// The judge's scoring sheet: contestants, categories and what they have
/// scored so far
pub async fn get_judge_event(pool: &PgPool, judge: &Judge) -> Result<JudgeEventResponse> {
    let event = EventRepository::new(pool).find_by_id(judge.event_id).await?;
    let contestants = ContestantRepository::new(pool)
        .list_for_event(judge.event_id)
        .await?;
    let categories = CategoryRepository::new(pool)
        .list_for_event(judge.event_id)
        .await?;
    let scores = ScoreRepository::new(pool)
        .list_for_judge(judge.judge_id, judge.event_id)
        .await?;

    Ok(JudgeEventResponse {
        judge_id: judge.judge_id,
        event,
        contestants: number_contestants(&contestants),
        categories,
        scores: scores.into_iter().map(ScoreEntry::from).collect(),
    })
}

pub async fn get_contestant_sheet(
    pool: &PgPool,
    judge: &Judge,
    contestant_id: Uuid,
) -> Result<JudgeContestantResponse> {
    let contestant = ContestantRepository::new(pool)
        .find_in_event(judge.event_id, contestant_id)
        .await?;
    let categories = CategoryRepository::new(pool)
        .list_for_event(judge.event_id)
        .await?;
    let existing_scores = ScoreRepository::new(pool)
        .list_for_judge_and_contestant(judge.judge_id, contestant_id)
        .await?;

    Ok(JudgeContestantResponse {
        judge_id: judge.judge_id,
        contestant,
        categories,
        existing_scores: existing_scores.into_iter().map(ScoreEntry::from).collect(),
    })
}

pub async fn submit_scores(
    pool: &PgPool,
    judge: &Judge,
    contestant_id: Uuid,
    scores: &BTreeMap<Uuid, RawScore>,
) -> Result<Vec<ScoreEntry>> {
    let stored = submission::submit_scores(pool, judge, contestant_id, scores).await?;

    Ok(stored.into_iter().map(ScoreEntry::from).collect())
}
