use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{create_judge, delete_judge, get_judge, list_judges, update_judge};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_judges).post(create_judge))
        .route(
            "/:judge_id",
            get(get_judge).put(update_judge).delete(delete_judge),
        )
}
