use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::category::{CreateCategoryRequest, UpdateCategoryRequest};
use crate::error::{Result, StorageError};
use crate::models::Category;

const CATEGORY_COLUMNS: &str = "category_id, event_id, name, max_score, weight, created_at";

pub struct CategoryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Categories of an event in the order they were added
    pub async fn list_for_event(&self, event_id: Uuid) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE event_id = $1 ORDER BY created_at, name"
        ))
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    pub async fn find_in_event(&self, event_id: Uuid, id: Uuid) -> Result<Category> {
        let category = sqlx::query_as::<_, Category>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE category_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        if category.event_id != event_id {
            return Err(StorageError::NotInEvent("Category"));
        }

        Ok(category)
    }

    pub async fn create(&self, event_id: Uuid, req: &CreateCategoryRequest) -> Result<Category> {
        let category = sqlx::query_as::<_, Category>(&format!(
            r#"
            INSERT INTO categories (event_id, name, max_score, weight)
            VALUES ($1, $2, $3, $4)
            RETURNING {CATEGORY_COLUMNS}
            "#
        ))
        .bind(event_id)
        .bind(&req.name)
        .bind(req.max_score)
        .bind(req.weight)
        .fetch_one(self.pool)
        .await?;

        Ok(category)
    }

    /// Update a category. Existing scores above a lowered `max_score` are kept
    /// as submitted.
    pub async fn update(&self, existing: &Category, req: &UpdateCategoryRequest) -> Result<Category> {
        let name = req.name.as_ref().unwrap_or(&existing.name);
        let max_score = req.max_score.unwrap_or(existing.max_score);
        let weight = req.weight.unwrap_or(existing.weight);

        sqlx::query_as::<_, Category>(&format!(
            r#"
            UPDATE categories
            SET name = $2,
                max_score = $3,
                weight = $4
            WHERE category_id = $1
            RETURNING {CATEGORY_COLUMNS}
            "#
        ))
        .bind(existing.category_id)
        .bind(name)
        .bind(max_score)
        .bind(weight)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    /// Delete a category; its scores go with it
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM categories WHERE category_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
