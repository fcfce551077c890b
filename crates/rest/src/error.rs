//! Error types for the PatientTrack HTTP API.
//!
//! This module defines the error type returned by every handler, with
//! automatic conversion to a JSON error body.
//!
//! # Error Mapping
//!
//! Storage errors from the persistence layer are mapped to HTTP status codes
//! and machine-readable codes:
//!
//! | Storage Error | HTTP Status | Code |
//! |--------------|-------------|------|
//! | NotFound | 404 | not-found |
//! | AlreadyExists | 409 | conflict |
//! | Validation | 422 | invalid |
//! | Query | 400 | invalid-argument |
//! | Backend | 503 | unavailable |
//!
//! Every error body has the shape
//! `{"detail": "...", "code": "...", "field": "..."}`, where `field` is only
//! present for validation errors tied to one field.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use patienttrack_persistence::error::{
    BackendError, QueryError, ResourceError, StorageError, ValidationError,
};
use serde::Serialize;
use std::fmt;

/// The primary error type for API operations.
#[derive(Debug)]
pub enum RestError {
    /// Patient not found (HTTP 404).
    NotFound {
        /// The patient id.
        id: String,
    },

    /// Patient id already taken (HTTP 409).
    Conflict {
        /// The patient id.
        id: String,
    },

    /// Payload failed the record schema (HTTP 422).
    Validation {
        /// Error message.
        message: String,
        /// The offending field, if any.
        field: Option<String>,
    },

    /// Malformed request or query argument (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Request body is not JSON (HTTP 415).
    UnsupportedMediaType {
        /// Error message.
        message: String,
    },

    /// The patient store cannot be read or written (HTTP 503).
    ServiceUnavailable {
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound { id } => write!(f, "Patient not found: {}", id),
            RestError::Conflict { id } => write!(f, "Patient already exists: {}", id),
            RestError::Validation { message, .. } => write!(f, "Validation failed: {}", message),
            RestError::BadRequest { message } => write!(f, "Bad request: {}", message),
            RestError::UnsupportedMediaType { message } => {
                write!(f, "Unsupported media type: {}", message)
            }
            RestError::ServiceUnavailable { message } => {
                write!(f, "Storage unavailable: {}", message)
            }
            RestError::InternalError { message } => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for RestError {}

/// JSON body of an error response.
#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    detail: String,
    code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'a str>,
}

impl RestError {
    /// Returns the HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::Conflict { .. } => StatusCode::CONFLICT,
            RestError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            RestError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            RestError::NotFound { .. } => "not-found",
            RestError::Conflict { .. } => "conflict",
            RestError::Validation { .. } => "invalid",
            RestError::BadRequest { .. } => "invalid-argument",
            RestError::UnsupportedMediaType { .. } => "not-supported",
            RestError::ServiceUnavailable { .. } => "unavailable",
            RestError::InternalError { .. } => "exception",
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status();
        let field = match &self {
            RestError::Validation { field, .. } => field.as_deref(),
            _ => None,
        };
        let detail = match &self {
            RestError::NotFound { .. } => "Patient not found".to_string(),
            RestError::Conflict { .. } => "Patient already exists".to_string(),
            RestError::Validation { message, .. }
            | RestError::BadRequest { message }
            | RestError::UnsupportedMediaType { message }
            | RestError::ServiceUnavailable { message }
            | RestError::InternalError { message } => message.clone(),
        };

        let body = ErrorBody {
            detail,
            code: self.code(),
            field,
        };
        (status, Json(body)).into_response()
    }
}

// Implement conversions from storage errors

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Resource(e) => e.into(),
            StorageError::Validation(e) => e.into(),
            StorageError::Query(e) => e.into(),
            StorageError::Backend(e) => e.into(),
        }
    }
}

impl From<ResourceError> for RestError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::NotFound { id } => RestError::NotFound { id },
            ResourceError::AlreadyExists { id } => RestError::Conflict { id },
        }
    }
}

impl From<ValidationError> for RestError {
    fn from(err: ValidationError) -> Self {
        RestError::Validation {
            field: err.field().map(String::from),
            message: err.to_string(),
        }
    }
}

impl From<QueryError> for RestError {
    fn from(err: QueryError) -> Self {
        RestError::BadRequest {
            message: err.to_string(),
        }
    }
}

impl From<BackendError> for RestError {
    fn from(err: BackendError) -> Self {
        RestError::ServiceUnavailable {
            message: err.to_string(),
        }
    }
}

impl From<JsonRejection> for RestError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(e) => RestError::UnsupportedMediaType {
                message: e.body_text(),
            },
            other => RestError::BadRequest {
                message: format!("Invalid JSON: {}", other.body_text()),
            },
        }
    }
}

/// Result type alias for API operations.
pub type RestResult<T> = Result<T, RestError>;
