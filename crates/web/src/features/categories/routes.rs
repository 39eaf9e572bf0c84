use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{
    create_category, delete_category, get_category, list_categories, update_category,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/:category_id",
            get(get_category).put(update_category).delete(delete_category),
        )
}
