use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use shared::types::{NewStaff, Staff};
use utoipa::{IntoParams, ToSchema};

use crate::{
    api::state::RosterAppState,
    domain::{client::Ack, service::StaffRef, views::clean_name},
    error::RosterServiceError,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddStaffRequest {
    pub name: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Name fragment; blank terms return an empty list.
    #[serde(default)]
    pub term: String,
}

#[utoipa::path(
    get,
    path = "/staffs",
    tag = "Roster",
    operation_id = "list_staffs",
    responses(
        (status = 200, description = "Whole roster, empty if the backend is unavailable", body = Vec<Staff>)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn list(State(state): State<Arc<RosterAppState>>) -> Json<Vec<Staff>> {
    Json(state.staff_service.list_staff().await)
}

#[utoipa::path(
    get,
    path = "/staffs/search",
    tag = "Roster",
    operation_id = "search_staffs",
    params(SearchParams),
    responses(
        (status = 200, description = "Staffs whose name contains the term", body = Vec<Staff>)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn search(
    State(state): State<Arc<RosterAppState>>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Staff>> {
    Json(state.staff_service.search_staff(&params.term).await)
}

#[utoipa::path(
    post,
    path = "/staffs",
    tag = "Roster",
    operation_id = "add_staff",
    request_body = AddStaffRequest,
    responses(
        (status = 201, description = "Staff created", body = Staff),
        (status = 400, description = "Name is blank"),
        (status = 502, description = "Backend rejected the insert, see /messages")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn add(
    State(state): State<Arc<RosterAppState>>,
    Json(req): Json<AddStaffRequest>,
) -> Result<(StatusCode, Json<Staff>), RosterServiceError> {
    let name = clean_name(&req.name)
        .ok_or_else(|| RosterServiceError::BadRequest("Staff name is required".into()))?;

    let created = state
        .staff_service
        .create_staff(NewStaff::new(name))
        .await
        .ok_or_else(|| RosterServiceError::BadGateway("Staff was not created".into()))?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    delete,
    path = "/staffs/{id}",
    tag = "Roster",
    operation_id = "delete_staff",
    params(
        ("id" = i64, Path, description = "Staff ID")
    ),
    responses(
        (status = 200, description = "Backend acknowledgement"),
        (status = 502, description = "Backend rejected the delete, see /messages")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn delete(
    State(state): State<Arc<RosterAppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Ack>, RosterServiceError> {
    let ack = state
        .staff_service
        .delete_staff(StaffRef::Id(id))
        .await
        .ok_or_else(|| RosterServiceError::BadGateway(format!("Staff {id} was not deleted")))?;

    Ok(Json(ack))
}
