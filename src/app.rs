use crate::handlers;
use crate::state::AppState;
use axum::{routing::{delete, get}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/activities",
            get(handlers::list_activities)
                .post(handlers::create_activity)
                .delete(handlers::clear_activities),
        )
        .route("/api/activities/:id", delete(handlers::delete_activity))
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/stats", get(handlers::get_stats))
        .with_state(state)
}
