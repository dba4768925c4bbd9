//! # HTTP API Errors
//!
//! Error types for the request layer and their status code mapping.
//!
//! Error codes:
//! - INVALID_KEY
//! - INVALID_BODY
//! - METHOD_NOT_ALLOWED
//! - BOOK_VALIDATION_FAILED
//! - BOOK_NOT_FOUND

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for request handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Request layer errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Path key is not a positive integer, or not valid UTF-8
    #[error("Invalid key.")]
    InvalidKey(String),

    /// Request body is empty or not a JSON book
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Verb not served on this path
    #[error("Method {0} not allowed")]
    MethodNotAllowed(String),

    /// Validation or lookup failure from the store
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            ApiError::InvalidKey(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::Validation(_)) => StatusCode::BAD_REQUEST,

            // 404 Not Found
            ApiError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,

            // 405 Method Not Allowed
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// Returns the string code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::InvalidKey(_) => "INVALID_KEY",
            ApiError::InvalidBody(_) => "INVALID_BODY",
            ApiError::MethodNotAllowed(_) => "METHOD_NOT_ALLOWED",
            ApiError::Store(err) => err.code(),
        }
    }

    /// Wire name of the offending field, for validation failures
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ApiError::Store(StoreError::Validation(err)) => Some(err.field()),
            _ => None,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub error_code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error_code: err.error_code(),
            field: err.field(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
