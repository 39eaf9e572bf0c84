use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{
    activate_event, create_event, delete_event, get_event, list_events, update_event,
};
use crate::features::{categories, contestants, judges, reports};

/// Event administration, including each event's roster and report
pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_events).post(create_event))
        .route(
            "/:event_id",
            get(get_event).put(update_event).delete(delete_event),
        )
        .route("/:event_id/activate", post(activate_event))
        .nest("/:event_id/contestants", contestants::routes::routes())
        .nest("/:event_id/categories", categories::routes::routes())
        .nest("/:event_id/judges", judges::routes::routes())
        .nest("/:event_id/report", reports::routes::routes())
}
