use async_trait::async_trait;
use serde::Serialize;
use shared::types::{NewStaff, Staff};

use crate::error::GatewayError;

/// Acknowledgement of a write the backend accepted. The backend decides the status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ack {
    pub status: u16,
}

/// Raw access to the remote `staffs` collection. Every failure is returned as-is;
/// interception happens one layer up in [`StaffService`](crate::domain::service::StaffService).
#[cfg_attr(feature = "test-support", mockall::automock)]
#[async_trait]
pub trait StaffClient: Send + Sync {
    /// `GET /staffs`
    async fn list(&self) -> Result<Vec<Staff>, GatewayError>;
    /// `GET /staffs?id=<id>`, a zero or one element list.
    async fn find_by_query_id(&self, id: i64) -> Result<Vec<Staff>, GatewayError>;
    /// `GET /staffs/<id>`, where a missing record is a 404 failure.
    async fn find_by_id(&self, id: i64) -> Result<Staff, GatewayError>;
    /// `GET /staffs?name=<term>`
    async fn search(&self, term: &str) -> Result<Vec<Staff>, GatewayError>;
    /// `POST /staffs`
    async fn create(&self, staff: &NewStaff) -> Result<Staff, GatewayError>;
    /// `DELETE /staffs/<id>`
    async fn delete(&self, id: i64) -> Result<Ack, GatewayError>;
    /// `PUT /staffs`
    async fn update(&self, staff: &Staff) -> Result<Ack, GatewayError>;
}
