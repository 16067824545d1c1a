use std::sync::Arc;

use axum::{Json, extract::State};

use crate::api::state::RosterAppState;

#[utoipa::path(
    get,
    path = "/messages",
    tag = "Roster",
    operation_id = "list_messages",
    responses(
        (status = 200, description = "Status log, oldest first", body = Vec<String>)
    )
)]
pub async fn list(State(state): State<Arc<RosterAppState>>) -> Json<Vec<String>> {
    Json(state.messages.messages())
}
