use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::event::{CreateEventRequest, EventSummary, UpdateEventRequest};
use crate::error::{Result, StorageError};
use crate::models::{Event, EventSnapshot};
use crate::repository::category::CategoryRepository;
use crate::repository::contestant::ContestantRepository;
use crate::repository::judge::JudgeRepository;
use crate::repository::score::ScoreRepository;

const EVENT_COLUMNS: &str = "event_id, name, description, event_date, is_active, created_at";

/// Repository for pageant events
pub struct EventRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EventRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all events, most recent event date first
    pub async fn list(&self) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events ORDER BY event_date DESC, created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    /// List all events with contestant, judge and category counts
    pub async fn list_with_counts(&self) -> Result<Vec<EventSummary>> {
        let events = sqlx::query_as::<_, EventSummary>(
            r#"
            SELECT e.event_id, e.name, e.description, e.event_date, e.is_active, e.created_at,
                   (SELECT COUNT(*) FROM contestants c WHERE c.event_id = e.event_id) AS contestant_count,
                   (SELECT COUNT(*) FROM judges j WHERE j.event_id = e.event_id) AS judge_count,
                   (SELECT COUNT(*) FROM categories cat WHERE cat.event_id = e.event_id) AS category_count
            FROM events e
            ORDER BY e.created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Event> {
        sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE event_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    /// The event currently open for judging
    pub async fn find_active(&self) -> Result<Event> {
        sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE is_active = TRUE LIMIT 1"
        ))
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    /// Create a new event. It becomes the active event and every other event
    /// is deactivated in the same transaction.
    pub async fn create(&self, req: &CreateEventRequest) -> Result<Event> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE events SET is_active = FALSE WHERE is_active")
            .execute(&mut *tx)
            .await?;

        let event = sqlx::query_as::<_, Event>(&format!(
            r#"
            INSERT INTO events (name, description, event_date, is_active)
            VALUES ($1, $2, $3, TRUE)
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(&req.name)
        .bind(req.description.as_deref().unwrap_or_default())
        .bind(req.event_date)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(event)
    }

    /// Update an existing event
    pub async fn update(&self, existing: &Event, req: &UpdateEventRequest) -> Result<Event> {
        let name = req.name.as_ref().unwrap_or(&existing.name);
        let description = req.description.as_ref().unwrap_or(&existing.description);
        let event_date = req.event_date.unwrap_or(existing.event_date);

        sqlx::query_as::<_, Event>(&format!(
            r#"
            UPDATE events
            SET name = $2,
                description = $3,
                event_date = $4
            WHERE event_id = $1
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(existing.event_id)
        .bind(name)
        .bind(description)
        .bind(event_date)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    /// Make `id` the only active event
    pub async fn activate(&self, id: Uuid) -> Result<Event> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE events SET is_active = FALSE WHERE is_active AND event_id <> $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let event = sqlx::query_as::<_, Event>(&format!(
            "UPDATE events SET is_active = TRUE WHERE event_id = $1 RETURNING {EVENT_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StorageError::NotFound)?;

        tx.commit().await?;

        Ok(event)
    }

    /// Delete an event and, through cascades, everything scored under it
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM events WHERE event_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Load an event with its contestants, categories, judges and scores.
    ///
    /// Store failures are returned as errors, never as an empty score set.
    pub async fn snapshot(&self, id: Uuid) -> Result<EventSnapshot> {
        let event = self.find_by_id(id).await?;

        let contestants = ContestantRepository::new(self.pool)
            .list_for_event(id)
            .await?;
        let categories = CategoryRepository::new(self.pool).list_for_event(id).await?;
        let judges = JudgeRepository::new(self.pool).list_for_event(id).await?;
        let scores = ScoreRepository::new(self.pool).list_for_event(id).await?;

        Ok(EventSnapshot {
            event,
            contestants,
            categories,
            judges,
            scores,
        })
    }
}
