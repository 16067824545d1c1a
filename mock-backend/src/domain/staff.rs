use async_trait::async_trait;
use serde::Deserialize;
use shared::types::{NewStaff, Staff};
use utoipa::IntoParams;

use crate::error::MockBackendError;

/// Id handed out when the collection is empty.
pub const BASELINE_ID: i64 = 11;

/// Filters accepted by `GET /api/staffs`. Both are optional and combine with AND.
#[derive(Debug, Default, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StaffQuery {
    /// Exact id match.
    pub id: Option<i64>,
    /// Case-insensitive substring match on the name.
    pub name: Option<String>,
}

impl StaffQuery {
    pub fn matches(&self, staff: &Staff) -> bool {
        let id_ok = self.id.is_none_or(|id| staff.id == id);
        let name_ok = self
            .name
            .as_deref()
            .is_none_or(|term| staff.name.to_lowercase().contains(&term.to_lowercase()));
        id_ok && name_ok
    }
}

/// Next id for an insert: one past the current maximum, or [`BASELINE_ID`] when empty.
pub fn gen_id(staffs: &[Staff]) -> i64 {
    staffs
        .iter()
        .map(|s| s.id)
        .max()
        .map_or(BASELINE_ID, |max| max + 1)
}

#[cfg_attr(feature = "test-support", mockall::automock)]
#[async_trait]
pub trait StaffRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Staff>, MockBackendError>;
    async fn find_all(&self, query: StaffQuery) -> Result<Vec<Staff>, MockBackendError>;
    async fn create(&self, staff: NewStaff) -> Result<Staff, MockBackendError>;
    async fn update(&self, staff: Staff) -> Result<(), MockBackendError>;
    /// Returns whether a record was removed. Removing an unknown id is not an error.
    async fn delete(&self, id: i64) -> Result<bool, MockBackendError>;
}
