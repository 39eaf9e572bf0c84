use chrono::Utc;
use sqlx::PgPool;
use storage::{
    dto::report::EventReport, error::Result, repository::event::EventRepository,
    services::report::build_event_report,
};
use uuid::Uuid;

/// Tabulate an event from its current scores
pub async fn get_event_report(pool: &PgPool, event_id: Uuid) -> Result<EventReport> {
    let snapshot = EventRepository::new(pool).snapshot(event_id).await?;

    tracing::debug!(
        event_id = %event_id,
        contestants = snapshot.contestants.len(),
        scores = snapshot.scores.len(),
        "Building event report"
    );

    Ok(build_event_report(snapshot, Utc::now().naive_utc()))
}
