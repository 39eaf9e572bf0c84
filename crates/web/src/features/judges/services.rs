use sqlx::PgPool;
use storage::{
    dto::judge::{CreateJudgeRequest, JudgeResponse, UpdateJudgeRequest},
    error::Result,
    repository::{event::EventRepository, judge::JudgeRepository},
};
use uuid::Uuid;

pub async fn list_judges(pool: &PgPool, event_id: Uuid) -> Result<Vec<JudgeResponse>> {
    EventRepository::new(pool).find_by_id(event_id).await?;

    let judges = JudgeRepository::new(pool).list_for_event(event_id).await?;

    Ok(judges.into_iter().map(JudgeResponse::from).collect())
}

pub async fn get_judge(pool: &PgPool, event_id: Uuid, judge_id: Uuid) -> Result<JudgeResponse> {
    let repo = JudgeRepository::new(pool);
    let judge = repo.find_in_event(event_id, judge_id).await?;

    Ok(JudgeResponse::from(judge))
}

/// Add a judge to the panel. Without an access key the judge is a placeholder.
pub async fn create_judge(
    pool: &PgPool,
    event_id: Uuid,
    req: &CreateJudgeRequest,
) -> Result<JudgeResponse> {
    EventRepository::new(pool).find_by_id(event_id).await?;

    let judge = JudgeRepository::new(pool).create(event_id, req).await?;

    tracing::info!(
        event_id = %event_id,
        judge_id = %judge.judge_id,
        placeholder = judge.is_placeholder(),
        "Judge added"
    );

    Ok(JudgeResponse::from(judge))
}

pub async fn update_judge(
    pool: &PgPool,
    event_id: Uuid,
    judge_id: Uuid,
    req: &UpdateJudgeRequest,
) -> Result<JudgeResponse> {
    let repo = JudgeRepository::new(pool);
    let existing = repo.find_in_event(event_id, judge_id).await?;
    let judge = repo.update(&existing, req).await?;

    Ok(JudgeResponse::from(judge))
}

/// Remove a judge and every score they submitted
pub async fn delete_judge(pool: &PgPool, event_id: Uuid, judge_id: Uuid) -> Result<()> {
    let repo = JudgeRepository::new(pool);
    repo.find_in_event(event_id, judge_id).await?;
    repo.delete(judge_id).await
}
