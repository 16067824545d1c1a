use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shared::responses::ApiResponse;
use thiserror::Error;

/// Failures of the staff backend as seen by [`StaffClient`](crate::domain::client::StaffClient).
///
/// These never reach a view: the gateway turns them into fallback values.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Connection, timeout or body transfer failure.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Backend answered with a non-success status.
    #[error("Http failure response for {url}: {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Backend answered with a body that is not the expected JSON.
    #[error("Http failure during parsing for {url}: {message}")]
    Decode { url: String, message: String },
}

/// Errors produced by the roster's own endpoints.
#[derive(Debug, Error)]
pub enum RosterServiceError {
    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    /// The backend did not accept a write; details are in the message log.
    #[error("Bad Gateway: {0}")]
    BadGateway(String),
}

impl IntoResponse for RosterServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::BadGateway(_) => StatusCode::BAD_GATEWAY,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, %status, "Server error");
        } else {
            tracing::warn!(error = %self, %status, "Client error");
        }

        let body = ApiResponse::<()>::err(self.to_string());
        (status, axum::Json(body)).into_response()
    }
}
