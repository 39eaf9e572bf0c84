use sqlx::PgPool;
use storage::{
    dto::category::{CreateCategoryRequest, UpdateCategoryRequest},
    error::Result,
    models::Category,
    repository::{category::CategoryRepository, event::EventRepository},
};
use uuid::Uuid;

pub async fn list_categories(pool: &PgPool, event_id: Uuid) -> Result<Vec<Category>> {
    EventRepository::new(pool).find_by_id(event_id).await?;

    let repo = CategoryRepository::new(pool);
    repo.list_for_event(event_id).await
}

pub async fn get_category(pool: &PgPool, event_id: Uuid, category_id: Uuid) -> Result<Category> {
    let repo = CategoryRepository::new(pool);
    repo.find_in_event(event_id, category_id).await
}

/// Add a scoring category. Weights across the event are not required to sum to 1.
pub async fn create_category(
    pool: &PgPool,
    event_id: Uuid,
    req: &CreateCategoryRequest,
) -> Result<Category> {
    EventRepository::new(pool).find_by_id(event_id).await?;

    let category = CategoryRepository::new(pool).create(event_id, req).await?;

    tracing::info!(
        event_id = %event_id,
        category_id = %category.category_id,
        weight = %category.weight,
        "Category added"
    );

    Ok(category)
}

pub async fn update_category(
    pool: &PgPool,
    event_id: Uuid,
    category_id: Uuid,
    req: &UpdateCategoryRequest,
) -> Result<Category> {
    let repo = CategoryRepository::new(pool);
    let existing = repo.find_in_event(event_id, category_id).await?;
    repo.update(&existing, req).await
}

pub async fn delete_category(pool: &PgPool, event_id: Uuid, category_id: Uuid) -> Result<()> {
    let repo = CategoryRepository::new(pool);
    repo.find_in_event(event_id, category_id).await?;
    repo.delete(category_id).await
}
