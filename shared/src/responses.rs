use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSON error envelope returned by both services when a request cannot be served.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn err(error_msg: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error_msg.into()),
        }
    }
}

/// Response for the `/headpat` health check endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct HeadpatResponse {
    pub message: &'static str,
}

impl HeadpatResponse {
    pub const HEALTHY: Self = Self {
        message: "nyaa~! all systems operational, senpai! (=^-w-^=)",
    };
}
