//! API error types with JSON responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad request (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Unauthorized (401).
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    Internal(String),

    /// Store error.
    #[error("storage error: {0}")]
    Store(#[from] notes_store::StoreError),
}

impl ApiError {
    /// Get the error code string for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Store(e) => match e {
                notes_store::StoreError::NoteNotFound(_) => "NOT_FOUND",
                _ => "STORAGE_ERROR",
            },
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Store(e) => match e {
                notes_store::StoreError::NoteNotFound(_) => StatusCode::NOT_FOUND,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error details.
    pub error: ErrorDetails,
}

/// Error details within the response.
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    /// Error code (e.g., "NOT_FOUND", "BAD_REQUEST").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Store failures other than a missed lookup stay opaque: log the
        // detail server-side, hand the caller only the generic message.
        let message = match &self {
            ApiError::Store(notes_store::StoreError::NoteNotFound(_)) => self.to_string(),
            ApiError::Store(e) => {
                tracing::error!(error = %e, "Store operation failed");
                "internal server error".to_string()
            }
            ApiError::Internal(detail) => {
                tracing::error!(detail = %detail, "Internal error");
                "internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorResponse {
            error: ErrorDetails {
                code: self.code().to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use notes_core::NoteId;
    use notes_store::StoreError;

    #[test]
    fn test_missing_note_maps_to_not_found() {
        let err = ApiError::Store(StoreError::NoteNotFound(NoteId::new()));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), "NOT_FOUND");
    }

    #[test]
    fn test_other_store_errors_are_opaque_500() {
        let err = ApiError::Store(StoreError::ConfigError("pool exhausted".into()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "STORAGE_ERROR");
    }

    #[test]
    fn test_bad_request_status() {
        let err = ApiError::BadRequest("invalid user id".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "BAD_REQUEST");
    }
}
