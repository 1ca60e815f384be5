//! Error types for the persistence layer.
//!
//! Parsing and compiling a search term never fails, so the hierarchy only
//! carries record validation errors and failures reported by the storage
//! engine itself.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use std::fmt;

use thiserror::Error;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Record validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Backend-specific errors
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl StorageError {
    /// Returns true if this error reports a capability the engine lacks.
    pub fn is_missing_capability(&self) -> bool {
        matches!(
            self,
            StorageError::Backend(BackendError::UnsupportedCapability { .. })
        )
    }
}

/// Errors raised when a record fails field-level validation.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The record failed validation.
    #[error("invalid record: {message}")]
    InvalidRecord {
        message: String,
        details: Vec<ValidationDetail>,
    },

    /// A validation rule could not be compiled.
    #[error("invalid validation rule '{rule}': {message}")]
    InvalidRule { rule: String, message: String },
}

impl ValidationError {
    /// Returns the individual violations.
    pub fn details(&self) -> &[ValidationDetail] {
        match self {
            ValidationError::InvalidRecord { details, .. } => details,
            ValidationError::InvalidRule { .. } => &[],
        }
    }
}

/// A single field violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDetail {
    /// The wire name of the offending field (e.g. `firstName`).
    pub field: String,
    /// A human-readable error message.
    pub message: String,
}

impl ValidationDetail {
    /// Creates a new violation for `field`.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Errors reported by a storage engine.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend is currently unavailable.
    #[error("backend unavailable: {backend_name}")]
    Unavailable {
        backend_name: String,
        message: String,
    },

    /// Connection to the backend failed.
    #[error("connection failed to {backend_name}: {message}")]
    ConnectionFailed {
        backend_name: String,
        message: String,
    },

    /// The requested capability is not supported by this backend.
    #[error("capability '{capability}' not supported by {backend_name}")]
    UnsupportedCapability {
        backend_name: String,
        capability: String,
    },

    /// Schema migration error.
    #[error("schema migration failed: {message}")]
    MigrationError { message: String },

    /// Internal backend error.
    #[error("internal error in {backend_name}: {message}")]
    Internal {
        backend_name: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Serialization/deserialization error.
    #[error("serialization error: {message}")]
    SerializationError { message: String },
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Backend(BackendError::SerializationError {
            message: err.to_string(),
        })
    }
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        StorageError::Backend(BackendError::Internal {
            backend_name: "sqlite".to_string(),
            message: err.to_string(),
            source: Some(Box::new(err)),
        })
    }
}

#[cfg(feature = "sqlite")]
impl From<r2d2::Error> for StorageError {
    fn from(err: r2d2::Error) -> Self {
        StorageError::Backend(BackendError::ConnectionFailed {
            backend_name: "sqlite".to_string(),
            message: err.to_string(),
        })
    }
}
