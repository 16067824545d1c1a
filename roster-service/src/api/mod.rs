pub mod handler;
pub mod state;

use std::sync::Arc;

use axum::{
    Router,
    response::Redirect,
    routing::{delete, get},
};

use crate::api::{
    handler::{dashboard, detail, messages, staffs},
    state::RosterAppState,
};

/// Route table of the roster: `/` lands on the dashboard, `/staffs` is the list
/// view, `/detail/{id}` is the editor, and `/messages` shows the status log.
pub fn router(state: Arc<RosterAppState>) -> Router {
    Router::new()
        .route(
            "/headpat",
            get(|| async { axum::Json(shared::responses::HeadpatResponse::HEALTHY) }),
        )
        .route("/", get(|| async { Redirect::to("/dashboard") }))
        .route("/dashboard", get(dashboard::top_staffs))
        .route("/staffs", get(staffs::list).post(staffs::add))
        .route("/staffs/search", get(staffs::search))
        .route("/staffs/{id}", delete(staffs::delete))
        .route("/detail/{id}", get(detail::get).put(detail::save))
        .route("/messages", get(messages::list))
        .with_state(state)
}
