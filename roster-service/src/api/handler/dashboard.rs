use std::sync::Arc;

use axum::{Json, extract::State};
use shared::types::Staff;

use crate::api::state::RosterAppState;

#[utoipa::path(
    get,
    path = "/dashboard",
    tag = "Roster",
    operation_id = "dashboard",
    responses(
        (status = 200, description = "Top staffs (positions 1 to 4 of the roster by default)", body = Vec<Staff>)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn top_staffs(State(state): State<Arc<RosterAppState>>) -> Json<Vec<Staff>> {
    let staffs = state.staff_service.list_staff().await;
    Json(state.dashboard.apply(staffs))
}
