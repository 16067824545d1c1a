pub mod handler;
pub mod state;

use std::sync::Arc;

use axum::{Router, routing::get};

use crate::api::{handler::staff, state::MockBackendState};

/// Builds the `staffs` collection router, rooted at `/api`, plus the health check.
pub fn router(state: Arc<MockBackendState>) -> Router {
    Router::new()
        .route(
            "/headpat",
            get(|| async { axum::Json(shared::responses::HeadpatResponse::HEALTHY) }),
        )
        .route(
            "/api/staffs",
            get(staff::find_all).post(staff::create).put(staff::update),
        )
        .route(
            "/api/staffs/{id}",
            get(staff::find_by_id).delete(staff::delete),
        )
        .with_state(state)
}
