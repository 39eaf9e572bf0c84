use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{get_active_event, get_event_results, health, list_events};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/health", get(health))
        .route("/events", get(list_events))
        .route("/events/active", get(get_active_event))
        .route("/events/:event_id", get(get_event_results))
}
