use sqlx::PgPool;
use storage::{
    dto::event::{CreateEventRequest, EventSummary, UpdateEventRequest},
    error::Result,
    models::Event,
    repository::event::EventRepository,
};

/// List all events with their roster sizes
pub async fn list_events(pool: &PgPool) -> Result<Vec<EventSummary>> {
    let repo = EventRepository::new(pool);
    repo.list_with_counts().await
}

pub async fn get_event(pool: &PgPool, event_id: uuid::Uuid) -> Result<Event> {
    let repo = EventRepository::new(pool);
    repo.find_by_id(event_id).await
}

/// Create a new event and make it the active one
pub async fn create_event(pool: &PgPool, req: &CreateEventRequest) -> Result<Event> {
    let repo = EventRepository::new(pool);
    let event = repo.create(req).await?;

    tracing::info!(event_id = %event.event_id, name = %event.name, "Event created and activated");

    Ok(event)
}

pub async fn update_event(
    pool: &PgPool,
    event_id: uuid::Uuid,
    req: &UpdateEventRequest,
) -> Result<Event> {
    let repo = EventRepository::new(pool);
    let existing = repo.find_by_id(event_id).await?;
    repo.update(&existing, req).await
}

pub async fn activate_event(pool: &PgPool, event_id: uuid::Uuid) -> Result<Event> {
    let repo = EventRepository::new(pool);
    let event = repo.activate(event_id).await?;

    tracing::info!(event_id = %event.event_id, "Event activated");

    Ok(event)
}

pub async fn delete_event(pool: &PgPool, event_id: uuid::Uuid) -> Result<()> {
    let repo = EventRepository::new(pool);
    repo.delete(event_id).await?;

    tracing::info!(event_id = %event_id, "Event deleted");

    Ok(())
}
