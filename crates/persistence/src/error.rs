//! Error types for the persistence layer.
//!
//! This module defines all error types used throughout the persistence layer,
//! following a hierarchy that separates record state errors, validation errors,
//! query argument errors, and backend errors.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for all storage operations.
///
/// Each variant corresponds to one outward error kind, so callers can tell
/// causes apart by matching rather than by message text.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Record state errors (not found, duplicate id).
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// Schema validation errors.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Malformed query arguments.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Backing store errors.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Errors related to record state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    /// No record is stored under the given id.
    #[error("patient not found: {id}")]
    NotFound { id: String },

    /// A record with the given id already exists.
    #[error("patient already exists: {id}")]
    AlreadyExists { id: String },
}

/// Errors produced by the record schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A field is present but violates its constraint or has the wrong type.
    #[error("invalid field '{field}': {message}")]
    InvalidField { field: String, message: String },

    /// A required field is absent.
    #[error("missing required field: {field}")]
    MissingRequiredField { field: String },

    /// The payload is not a JSON object.
    #[error("invalid payload: {message}")]
    InvalidPayload { message: String },
}

impl ValidationError {
    /// Builds an [`ValidationError::InvalidField`] for `field`.
    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        ValidationError::InvalidField {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Returns the offending field name, if the error is tied to one.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::InvalidField { field, .. }
            | ValidationError::MissingRequiredField { field } => Some(field),
            ValidationError::InvalidPayload { .. } => None,
        }
    }
}

/// Errors caused by malformed query arguments.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The sort field is outside the allowed set.
    #[error("invalid sort field '{field}', expected one of: {allowed}")]
    InvalidSortField { field: String, allowed: String },

    /// The sort order is neither `asc` nor `desc`.
    #[error("invalid sort order '{order}', expected 'asc' or 'desc'")]
    InvalidSortOrder { order: String },
}

/// Errors originating from the backing store.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The backing store is missing or cannot be reached.
    #[error("backend unavailable: {backend_name}: {message}")]
    Unavailable {
        backend_name: String,
        message: String,
    },

    /// The stored document could not be parsed as a patient collection.
    #[error("corrupt data in {backend_name}: {message}")]
    Corrupt {
        backend_name: String,
        message: String,
    },

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

impl BackendError {
    /// Wraps an I/O error raised by `backend_name`.
    pub fn io(backend_name: &str, context: impl std::fmt::Display, err: std::io::Error) -> Self {
        BackendError::Internal {
            backend_name: backend_name.to_string(),
            message: format!("{}: {}", context, err),
            source: Some(Box::new(err)),
        }
    }
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
