use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/slots",
            get(handlers::slot::list_slots).post(handlers::slot::create_slot),
        )
        .route("/api/slots/timetable", get(handlers::slot::weekly_timetable))
        .route("/api/slots/conflicts", get(handlers::slot::find_conflicts))
        .route(
            "/api/slots/:id",
            put(handlers::slot::update_slot).delete(handlers::slot::delete_slot),
        )
}
