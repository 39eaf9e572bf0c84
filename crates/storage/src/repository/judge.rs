use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::judge::{CreateJudgeRequest, UpdateJudgeRequest};
use crate::error::{Result, StorageError};
use crate::models::Judge;

const JUDGE_COLUMNS: &str = "judge_id, event_id, name, role, access_key, created_at";

const DUPLICATE_ACCESS_KEY: &str = "Access key already in use";

pub struct JudgeRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> JudgeRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Judges of an event in name order; this order drives "Judge n" labels
    pub async fn list_for_event(&self, event_id: Uuid) -> Result<Vec<Judge>> {
        let judges = sqlx::query_as::<_, Judge>(&format!(
            "SELECT {JUDGE_COLUMNS} FROM judges WHERE event_id = $1 ORDER BY name, created_at"
        ))
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(judges)
    }

    pub async fn find_in_event(&self, event_id: Uuid, id: Uuid) -> Result<Judge> {
        let judge = sqlx::query_as::<_, Judge>(&format!(
            "SELECT {JUDGE_COLUMNS} FROM judges WHERE judge_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        if judge.event_id != event_id {
            return Err(StorageError::NotInEvent("Judge"));
        }

        Ok(judge)
    }

    /// Resolve a bearer credential to a judge of the currently active event
    pub async fn find_active_by_access_key(&self, access_key: &str) -> Result<Option<Judge>> {
        let judge = sqlx::query_as::<_, Judge>(
            r#"
            SELECT j.judge_id, j.event_id, j.name, j.role, j.access_key, j.created_at
            FROM judges j
            JOIN events e ON e.event_id = j.event_id
            WHERE j.access_key = $1 AND e.is_active
            "#,
        )
        .bind(access_key)
        .fetch_optional(self.pool)
        .await?;

        Ok(judge)
    }

    pub async fn create(&self, event_id: Uuid, req: &CreateJudgeRequest) -> Result<Judge> {
        sqlx::query_as::<_, Judge>(&format!(
            r#"
            INSERT INTO judges (event_id, name, role, access_key)
            VALUES ($1, $2, $3, $4)
            RETURNING {JUDGE_COLUMNS}
            "#
        ))
        .bind(event_id)
        .bind(&req.name)
        .bind(&req.role)
        .bind(&req.access_key)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_unique_violation(DUPLICATE_ACCESS_KEY))
    }

    pub async fn update(&self, existing: &Judge, req: &UpdateJudgeRequest) -> Result<Judge> {
        let name = req.name.as_ref().unwrap_or(&existing.name);
        let role = req.role.as_ref().unwrap_or(&existing.role);
        let access_key = match &req.access_key {
            Some(replacement) => replacement.as_ref(),
            None => existing.access_key.as_ref(),
        };

        sqlx::query_as::<_, Judge>(&format!(
            r#"
            UPDATE judges
            SET name = $2,
                role = $3,
                access_key = $4
            WHERE judge_id = $1
            RETURNING {JUDGE_COLUMNS}
            "#
        ))
        .bind(existing.judge_id)
        .bind(name)
        .bind(role)
        .bind(access_key)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_unique_violation(DUPLICATE_ACCESS_KEY))?
        .ok_or(StorageError::NotFound)
    }

    /// Delete a judge; their scores go with them
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM judges WHERE judge_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
