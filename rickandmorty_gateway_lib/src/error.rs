//! Error types for the gateway layer and their JSON rendering.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::source::SourceError;

/// Errors a handler can end with.
#[derive(thiserror::Error, Debug)]
pub enum GatewayError {
    /// A required parameter was absent or empty after sanitization. The
    /// parameter name is only logged; the response body stays generic.
    #[error("Bad Request")]
    MissingParameter(&'static str),
    /// The upstream call failed. Displays the upstream text unchanged.
    #[error("{0}")]
    Upstream(SourceError),
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingParameter(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SourceError> for GatewayError {
    fn from(e: SourceError) -> Self {
        Self::Upstream(e)
    }
}

/// Body of every error response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Canonical reason phrase of the status code.
    pub status: String,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status: status.canonical_reason().unwrap_or_default().to_string(),
            error: error.into(),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            Self::MissingParameter(name) => {
                tracing::warn!("missing or invalid {} parameter", name)
            }
            Self::Upstream(e) => tracing::error!("upstream request failed: {}", e),
        }
        (status, Json(ErrorResponse::new(status, self.to_string()))).into_response()
    }
}
