use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use shared::types::Staff;
use utoipa::ToSchema;

use crate::{
    api::state::RosterAppState, domain::client::Ack, domain::views::clean_name,
    error::RosterServiceError,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct SaveStaffRequest {
    pub name: String,
}

#[utoipa::path(
    get,
    path = "/detail/{id}",
    tag = "Roster",
    operation_id = "staff_detail",
    params(
        ("id" = i64, Path, description = "Staff ID")
    ),
    responses(
        (status = 200, description = "Staff found", body = Staff),
        (status = 404, description = "Staff not found or backend unavailable")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<Arc<RosterAppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Staff>, RosterServiceError> {
    state
        .staff_service
        .find_staff_strict(id)
        .await
        .map(Json)
        .ok_or_else(|| RosterServiceError::NotFound(format!("Staff {id} not found")))
}

#[utoipa::path(
    put,
    path = "/detail/{id}",
    tag = "Roster",
    operation_id = "save_staff",
    params(
        ("id" = i64, Path, description = "Staff ID")
    ),
    request_body = SaveStaffRequest,
    responses(
        (status = 200, description = "Backend acknowledgement"),
        (status = 400, description = "Name is blank"),
        (status = 502, description = "Backend rejected the update, see /messages")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn save(
    State(state): State<Arc<RosterAppState>>,
    Path(id): Path<i64>,
    Json(req): Json<SaveStaffRequest>,
) -> Result<Json<Ack>, RosterServiceError> {
    let name = clean_name(&req.name)
        .ok_or_else(|| RosterServiceError::BadRequest("Staff name is required".into()))?;

    let ack = state
        .staff_service
        .update_staff(Staff::new(id, name))
        .await
        .ok_or_else(|| RosterServiceError::BadGateway(format!("Staff {id} was not updated")))?;

    Ok(Json(ack))
}
