use sqlx::PgPool;
use storage::{
    dto::contestant::{CreateContestantRequest, NumberedContestant, UpdateContestantRequest},
    error::Result,
    models::Contestant,
    repository::{contestant::ContestantRepository, event::EventRepository},
    services::tabulation::number_contestants,
};
use uuid::Uuid;

/// Contestants of an event with their candidate numbers
pub async fn list_contestants(pool: &PgPool, event_id: Uuid) -> Result<Vec<NumberedContestant>> {
    EventRepository::new(pool).find_by_id(event_id).await?;

    let contestants = ContestantRepository::new(pool)
        .list_for_event(event_id)
        .await?;

    Ok(number_contestants(&contestants))
}

pub async fn get_contestant(pool: &PgPool, event_id: Uuid, contestant_id: Uuid) -> Result<Contestant> {
    let repo = ContestantRepository::new(pool);
    repo.find_in_event(event_id, contestant_id).await
}

pub async fn create_contestant(
    pool: &PgPool,
    event_id: Uuid,
    req: &CreateContestantRequest,
) -> Result<Contestant> {
    EventRepository::new(pool).find_by_id(event_id).await?;

    let contestant = ContestantRepository::new(pool).create(event_id, req).await?;

    tracing::info!(
        event_id = %event_id,
        contestant_id = %contestant.contestant_id,
        "Contestant registered"
    );

    Ok(contestant)
}

pub async fn update_contestant(
    pool: &PgPool,
    event_id: Uuid,
    contestant_id: Uuid,
    req: &UpdateContestantRequest,
) -> Result<Contestant> {
    let repo = ContestantRepository::new(pool);
    let existing = repo.find_in_event(event_id, contestant_id).await?;
    repo.update(&existing, req).await
}

/// Remove a contestant and every score they received
pub async fn delete_contestant(pool: &PgPool, event_id: Uuid, contestant_id: Uuid) -> Result<()> {
    let repo = ContestantRepository::new(pool);
    repo.find_in_event(event_id, contestant_id).await?;
    repo.delete(contestant_id).await
}
