use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use shared::types::{NewStaff, Staff};

use crate::{
    api::state::MockBackendState, domain::staff::StaffQuery, error::MockBackendError,
};

#[utoipa::path(
    get,
    path = "/api/staffs",
    tag = "Staffs",
    operation_id = "list_staffs",
    params(StaffQuery),
    responses(
        (status = 200, description = "Staffs matching the optional filters", body = Vec<Staff>)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn find_all(
    State(state): State<Arc<MockBackendState>>,
    Query(query): Query<StaffQuery>,
) -> Result<Json<Vec<Staff>>, MockBackendError> {
    let output = state.staff_repo.find_all(query).await?;
    Ok(Json(output))
}

#[utoipa::path(
    get,
    path = "/api/staffs/{id}",
    tag = "Staffs",
    operation_id = "get_staff",
    params(
        ("id" = i64, Path, description = "Staff ID")
    ),
    responses(
        (status = 200, description = "Staff found", body = Staff),
        (status = 404, description = "Staff not found")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn find_by_id(
    State(state): State<Arc<MockBackendState>>,
    Path(id): Path<i64>,
) -> Result<Json<Staff>, MockBackendError> {
    let output = state.staff_repo.find_by_id(id).await?;

    match output {
        Some(s) => Ok(Json(s)),
        None => Err(MockBackendError::NotFound(format!("Staff {id} not found"))),
    }
}

#[utoipa::path(
    post,
    path = "/api/staffs",
    tag = "Staffs",
    operation_id = "create_staff",
    request_body = NewStaff,
    responses(
        (status = 201, description = "Staff created with a server-assigned id", body = Staff),
        (status = 400, description = "Name is blank")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn create(
    State(state): State<Arc<MockBackendState>>,
    Json(staff): Json<NewStaff>,
) -> Result<(StatusCode, Json<Staff>), MockBackendError> {
    if staff.name.trim().is_empty() {
        return Err(MockBackendError::BadRequest("Staff name is required".into()));
    }

    let output = state.staff_repo.create(staff).await?;

    Ok((StatusCode::CREATED, Json(output)))
}

#[utoipa::path(
    put,
    path = "/api/staffs",
    tag = "Staffs",
    operation_id = "update_staff",
    request_body = Staff,
    responses(
        (status = 204, description = "Staff updated"),
        (status = 404, description = "Staff not found")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn update(
    State(state): State<Arc<MockBackendState>>,
    Json(staff): Json<Staff>,
) -> Result<StatusCode, MockBackendError> {
    state.staff_repo.update(staff).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/staffs/{id}",
    tag = "Staffs",
    operation_id = "delete_staff",
    params(
        ("id" = i64, Path, description = "Staff ID")
    ),
    responses(
        (status = 204, description = "Staff deleted, or was already absent")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn delete(
    State(state): State<Arc<MockBackendState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, MockBackendError> {
    let removed = state.staff_repo.delete(id).await?;
    if !removed {
        tracing::debug!(id, "Delete of unknown staff ignored");
    }

    Ok(StatusCode::NO_CONTENT)
}
