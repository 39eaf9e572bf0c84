use axum::{
    Router, middleware,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{get_contestant, get_judge_event, submit_scores};
use crate::middleware::auth::require_judge;

/// Judge-facing routes; every request must carry a judge access key
pub fn routes(db: Database) -> Router<Database> {
    Router::new()
        .route("/event", get(get_judge_event))
        .route("/contestants/:contestant_id", get(get_contestant))
        .route("/contestants/:contestant_id/scores", post(submit_scores))
        .route_layer(middleware::from_fn_with_state(db, require_judge))
}
