//! Error types for the advocate directory API.
//!
//! Every error is returned as a JSON body of the form `{"error": "..."}`.
//! Validation failures add a `details` list with one entry per field.
//!
//! # Error Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | BadRequest | 400 |
//! | InvalidPagination | 400 |
//! | Validation | 400 |
//! | ServiceUnavailable | 503 |
//! | InternalError | 500 |
//!
//! Storage errors from the persistence layer convert through
//! `From<StorageError>`: validation failures become 400 responses and engine
//! failures become 500 responses.

use advocate_persistence::error::{StorageError, ValidationDetail, ValidationError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use thiserror::Error;
use tracing::error;

/// Message returned for rejected `page`/`pageSize` values.
pub const INVALID_PAGINATION_MESSAGE: &str =
    "Invalid pagination parameters. Page and pageSize must be positive integers.";

/// The primary error type for API operations.
#[derive(Debug, Error)]
pub enum RestError {
    /// Malformed request (HTTP 400).
    #[error("{message}")]
    BadRequest {
        /// Error message.
        message: String,
    },

    /// `page` or `pageSize` is missing a positive integer (HTTP 400).
    #[error("{}", INVALID_PAGINATION_MESSAGE)]
    InvalidPagination,

    /// A submitted record failed field validation (HTTP 400).
    #[error("{message}")]
    Validation {
        /// Summary message.
        message: String,
        /// Per-field violations.
        details: Vec<ValidationDetail>,
    },

    /// The storage engine is not reachable (HTTP 503).
    #[error("{message}")]
    ServiceUnavailable {
        /// Error message.
        message: String,
    },

    /// Engine or server failure (HTTP 500).
    #[error("{message}")]
    InternalError {
        /// Error message.
        message: String,
    },
}

/// Result type for API operations.
pub type RestResult<T> = Result<T, RestError>;

impl RestError {
    /// Returns the HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::BadRequest { .. }
            | RestError::InvalidPagination
            | RestError::Validation { .. } => StatusCode::BAD_REQUEST,
            RestError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds the JSON error body.
    pub fn body(&self) -> Value {
        match self {
            RestError::Validation { message, details } => json!({
                "error": message,
                "details": details
                    .iter()
                    .map(|d| json!({ "field": d.field, "message": d.message }))
                    .collect::<Vec<_>>(),
            }),
            other => json!({ "error": other.to_string() }),
        }
    }
}

impl From<ValidationError> for RestError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidRecord { message, details } => {
                RestError::Validation { message, details }
            }
            // A rule that cannot compile is a server fault, not a client one.
            ValidationError::InvalidRule { .. } => {
                error!(error = %err, "Validator is misconfigured");
                RestError::InternalError {
                    message: "Internal server error".to_string(),
                }
            }
        }
    }
}

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Validation(e) => e.into(),
            StorageError::Backend(e) => {
                error!(error = %e, "Storage engine failure");
                RestError::InternalError {
                    message: "Internal server error".to_string(),
                }
            }
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.body())).into_response()
    }
}
