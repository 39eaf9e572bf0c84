use super::models::*;
use crate::{ImporterError, Result};
use sqlx::PgPool;
use storage::error::StorageError;
use storage::models::{Category, Contestant, Event, Judge};
use tracing::{debug, info};

/// Row counts written by one import
#[derive(Debug, Clone)]
pub struct ImportSummary {
    pub event: Event,
    pub categories: usize,
    pub contestants: usize,
    pub judges: usize,
}

pub struct CanonicalTransformer<'a> {
    pool: &'a PgPool,
}

impl<'a> CanonicalTransformer<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Writes the whole event in one transaction; any failure leaves the
    /// database untouched
    pub async fn import_to_database(&self, canonical: CanonicalFormat) -> Result<ImportSummary> {
        let mut tx = self.pool.begin().await?;

        let event = self.insert_event(&canonical.event, &mut tx).await?;
        info!("Created event '{}' ({})", event.name, event.event_id);

        for category in &canonical.categories {
            let row = self.insert_category(&event, category, &mut tx).await?;
            debug!("Category '{}' weight {}", row.name, row.weight);
        }

        for contestant in &canonical.contestants {
            let row = self.insert_contestant(&event, contestant, &mut tx).await?;
            debug!("Contestant '{}'", row.name);
        }

        for judge in &canonical.judges {
            let row = self.insert_judge(&event, judge, &mut tx).await?;
            debug!("Judge '{}' placeholder={}", row.name, row.is_placeholder());
        }

        tx.commit().await?;

        Ok(ImportSummary {
            event,
            categories: canonical.categories.len(),
            contestants: canonical.contestants.len(),
            judges: canonical.judges.len(),
        })
    }

    async fn insert_event(
        &self,
        event: &EventData,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> Result<Event> {
        if event.activate {
            sqlx::query("UPDATE events SET is_active = FALSE WHERE is_active")
                .execute(&mut **tx)
                .await?;
        }

        let row = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (name, description, event_date, is_active)
            VALUES ($1, $2, $3, $4)
            RETURNING event_id, name, description, event_date, is_active, created_at
            "#,
        )
        .bind(&event.name)
        .bind(&event.description)
        .bind(event.event_date)
        .bind(event.activate)
        .fetch_one(&mut **tx)
        .await?;

        Ok(row)
    }

    async fn insert_category(
        &self,
        event: &Event,
        category: &CategoryData,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> Result<Category> {
        let row = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (event_id, name, max_score, weight)
            VALUES ($1, $2, $3, $4)
            RETURNING category_id, event_id, name, max_score, weight, created_at
            "#,
        )
        .bind(event.event_id)
        .bind(&category.name)
        .bind(category.max_score)
        .bind(category.weight)
        .fetch_one(&mut **tx)
        .await?;

        Ok(row)
    }

    async fn insert_contestant(
        &self,
        event: &Event,
        contestant: &ContestantData,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> Result<Contestant> {
        let row = sqlx::query_as::<_, Contestant>(
            r#"
            INSERT INTO contestants (event_id, name, age, course, year_level, photo_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING contestant_id, event_id, name, age, course, year_level, photo_url, created_at
            "#,
        )
        .bind(event.event_id)
        .bind(&contestant.name)
        .bind(contestant.age)
        .bind(&contestant.course)
        .bind(&contestant.year)
        .bind(&contestant.photo)
        .fetch_one(&mut **tx)
        .await?;

        Ok(row)
    }

    async fn insert_judge(
        &self,
        event: &Event,
        judge: &JudgeData,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> Result<Judge> {
        sqlx::query_as::<_, Judge>(
            r#"
            INSERT INTO judges (event_id, name, role, access_key)
            VALUES ($1, $2, $3, $4)
            RETURNING judge_id, event_id, name, role, access_key, created_at
            "#,
        )
        .bind(event.event_id)
        .bind(&judge.name)
        .bind(&judge.role)
        .bind(&judge.access_key)
        .fetch_one(&mut **tx)
        .await
        .map_err(|e| match StorageError::from(e) {
            err if err.is_unique_violation() => ImporterError::ImportError(format!(
                "Access key of judge '{}' is already used by another judge",
                judge.name
            )),
            StorageError::Database(e) => ImporterError::DatabaseError(e),
            other => ImporterError::ImportError(other.to_string()),
        })
    }
}
