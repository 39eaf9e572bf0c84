use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::contestant::{CreateContestantRequest, UpdateContestantRequest};
use crate::error::{Result, StorageError};
use crate::models::Contestant;

const CONTESTANT_COLUMNS: &str =
    "contestant_id, event_id, name, age, course, year_level, photo_url, created_at";

pub struct ContestantRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ContestantRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Contestants of an event in name order
    pub async fn list_for_event(&self, event_id: Uuid) -> Result<Vec<Contestant>> {
        let contestants = sqlx::query_as::<_, Contestant>(&format!(
            "SELECT {CONTESTANT_COLUMNS} FROM contestants WHERE event_id = $1 ORDER BY name, created_at"
        ))
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(contestants)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Contestant> {
        sqlx::query_as::<_, Contestant>(&format!(
            "SELECT {CONTESTANT_COLUMNS} FROM contestants WHERE contestant_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    /// Find a contestant and check it is registered in `event_id`
    pub async fn find_in_event(&self, event_id: Uuid, id: Uuid) -> Result<Contestant> {
        let contestant = self.find_by_id(id).await?;

        if contestant.event_id != event_id {
            return Err(StorageError::NotInEvent("Contestant"));
        }

        Ok(contestant)
    }

    pub async fn create(&self, event_id: Uuid, req: &CreateContestantRequest) -> Result<Contestant> {
        let contestant = sqlx::query_as::<_, Contestant>(&format!(
            r#"
            INSERT INTO contestants (event_id, name, age, course, year_level, photo_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {CONTESTANT_COLUMNS}
            "#
        ))
        .bind(event_id)
        .bind(&req.name)
        .bind(req.age)
        .bind(&req.course)
        .bind(&req.year_level)
        .bind(&req.photo_url)
        .fetch_one(self.pool)
        .await?;

        Ok(contestant)
    }

    pub async fn update(
        &self,
        existing: &Contestant,
        req: &UpdateContestantRequest,
    ) -> Result<Contestant> {
        let name = req.name.as_ref().unwrap_or(&existing.name);
        let age = req.age.unwrap_or(existing.age);
        let course = req.course.as_ref().unwrap_or(&existing.course);
        let year_level = req.year_level.as_ref().unwrap_or(&existing.year_level);
        let photo_url = req.photo_url.as_ref().or(existing.photo_url.as_ref());

        sqlx::query_as::<_, Contestant>(&format!(
            r#"
            UPDATE contestants
            SET name = $2,
                age = $3,
                course = $4,
                year_level = $5,
                photo_url = $6
            WHERE contestant_id = $1
            RETURNING {CONTESTANT_COLUMNS}
            "#
        ))
        .bind(existing.contestant_id)
        .bind(name)
        .bind(age)
        .bind(course)
        .bind(year_level)
        .bind(photo_url)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    /// Delete a contestant; their scores go with them
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM contestants WHERE contestant_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
