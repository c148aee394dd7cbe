use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use service::errors::ServiceError;

/// Uniform error payload: `{error: message}` plus a status classification.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::InvalidArgument(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ServiceError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            // wire contract: the body says exactly "not found"
            ServiceError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "not found"),
            ServiceError::Storage(msg) => {
                error!(error = %msg, "storage failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({"error": self.message}))).into_response()
    }
}
