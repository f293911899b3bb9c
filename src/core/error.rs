//! Typed error handling for the catalog service
//!
//! Two client-facing error classes exist: bad request (validation failures,
//! malformed ids) and not found (well-formed id, no such ship). Store
//! failures surface as a third, internal class. The transport layer maps
//! each class to an HTTP status via [`IntoResponse`].

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The error type for all catalog operations
#[derive(Debug)]
pub enum ShipError {
    /// A field failed validation on create or update
    InvalidField {
        field: &'static str,
        message: String,
    },

    /// The id was missing or non-positive
    InvalidId { id: i64 },

    /// The id was well-formed but no ship with it exists
    NotFound { id: i64 },

    /// The store failed; outside the request-level taxonomy
    Storage { message: String },
}

impl fmt::Display for ShipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShipError::InvalidField { field, message } => {
                write!(f, "Invalid value for field '{}': {}", field, message)
            }
            ShipError::InvalidId { id } => {
                write!(f, "Invalid ship id: {}", id)
            }
            ShipError::NotFound { id } => {
                write!(f, "Ship with id '{}' not found", id)
            }
            ShipError::Storage { message } => {
                write!(f, "Storage error: {}", message)
            }
        }
    }
}

impl std::error::Error for ShipError {}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ShipError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ShipError::InvalidField { .. } => StatusCode::BAD_REQUEST,
            ShipError::InvalidId { .. } => StatusCode::BAD_REQUEST,
            ShipError::NotFound { .. } => StatusCode::NOT_FOUND,
            ShipError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ShipError::InvalidField { .. } => "INVALID_FIELD",
            ShipError::InvalidId { .. } => "INVALID_ID",
            ShipError::NotFound { .. } => "SHIP_NOT_FOUND",
            ShipError::Storage { .. } => "STORAGE_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
        }
    }
}

impl IntoResponse for ShipError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

impl From<anyhow::Error> for ShipError {
    fn from(err: anyhow::Error) -> Self {
        ShipError::Storage {
            message: err.to_string(),
        }
    }
}

/// A specialized Result type for catalog operations
pub type ShipResult<T> = Result<T, ShipError>;
