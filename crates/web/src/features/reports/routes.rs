use axum::{Router, routing::get};
use storage::Database;

use super::handlers::get_event_report;

pub fn routes() -> Router<Database> {
    Router::new().route("/", get(get_event_report))
}
