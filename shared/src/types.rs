use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single roster entry. The `id` is assigned by the backend on creation and never changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct Staff {
    pub id: i64,
    pub name: String,
}

/// Payload for creating a staff record; the backend picks the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct NewStaff {
    pub name: String,
}

impl NewStaff {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Staff {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
