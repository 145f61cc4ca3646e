//! # API Errors
//!
//! Request-level failures and their HTTP rendering. Every error body has
//! the shape `{"error": "<message>"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::observability::{log_event_with_fields, Event};
use crate::store::{BookError, StoreError};

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced to HTTP clients
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Path id is not an integer
    #[error("Invalid book ID")]
    InvalidId,

    /// Body is not valid JSON of the expected shape
    #[error("Invalid input")]
    InvalidInput,

    /// No book with the requested id
    #[error("Book not found")]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// The books file could not be rewritten; the mutation was rolled back
    #[error("Failed to persist books")]
    Persistence,

    /// The id space is used up; no more books can be created
    #[error("No book ids left")]
    IdsExhausted,

    #[error("Internal error")]
    Internal,
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidId => StatusCode::BAD_REQUEST,
            ApiError::InvalidInput => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Persistence => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::IdsExhausted => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<BookError> for ApiError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::NotFound(_) => ApiError::NotFound,
            BookError::InvalidPatch(_) => ApiError::InvalidInput,
            BookError::IdsExhausted(_) => ApiError::IdsExhausted,
            BookError::Store(StoreError::LockPoisoned) => ApiError::Internal,
            BookError::Store(_) => ApiError::Persistence,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_client_error() {
            log_event_with_fields(
                Event::RequestRejected,
                &[("reason", self.to_string().as_str()), ("status", status.as_str())],
            );
        }

        (status, Json(ErrorResponse::from(self))).into_response()
    }
}
