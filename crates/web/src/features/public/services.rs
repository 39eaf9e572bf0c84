use sqlx::PgPool;
use storage::{
    dto::report::EventResultsResponse, error::Result, models::Event,
    repository::event::EventRepository, services::report::build_public_results,
};
use uuid::Uuid;

/// List all events, most recent first
pub async fn list_events(pool: &PgPool) -> Result<Vec<Event>> {
    let repo = EventRepository::new(pool);
    repo.list().await
}

pub async fn get_event_results(pool: &PgPool, event_id: Uuid) -> Result<EventResultsResponse> {
    let snapshot = EventRepository::new(pool).snapshot(event_id).await?;

    Ok(build_public_results(snapshot))
}

/// Results of the event currently open for judging
pub async fn get_active_event_results(pool: &PgPool) -> Result<EventResultsResponse> {
    let active = EventRepository::new(pool).find_active().await?;

    get_event_results(pool, active.event_id).await
}
