use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{
    create_contestant, delete_contestant, get_contestant, list_contestants, update_contestant,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_contestants).post(create_contestant))
        .route(
            "/:contestant_id",
            get(get_contestant)
                .put(update_contestant)
                .delete(delete_contestant),
        )
}
