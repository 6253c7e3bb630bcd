use crate::annotate::AnnotateError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

pub type ApiResult<T> = Result<T, ApiError>;

/// API error types
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Annotate(#[from] AnnotateError),

    #[error("Not found")]
    NotFound,

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// API error response structure
///
/// Every failure path serializes to this flat shape so the frontend can
/// surface `message` directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ApiError {
    /// Get HTTP status code for this error
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_)
            | ApiError::Annotate(AnnotateError::MalformedPoints(_))
            | ApiError::Annotate(AnnotateError::InvalidImage) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Annotate(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(status = %status, message, "request failed");
        }

        (status, Json(json!({ "message": message }))).into_response()
    }
}

// Display is automatically derived by thiserror::Error
