//! # Student Errors
//!
//! Error types for the roster subsystem.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Body returned for every rejected create.
pub const INVALID_PAYLOAD_MESSAGE: &str = "POSTed student data is incomplete or invalid";

/// Body returned when a search has no query.
pub const MISSING_QUERY_MESSAGE: &str = "\"query\" param must be provided";

/// Result type for roster operations
pub type StudentResult<T> = Result<T, StudentError>;

/// Roster errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StudentError {
    // ==================
    // Validation Errors
    // ==================
    /// A required field was not submitted
    #[error("Missing required field: {0}")]
    IncompleteData(&'static str),

    /// A field did not coerce to its declared type
    #[error("Field '{field}' has invalid value '{value}'")]
    InvalidType { field: &'static str, value: String },

    // ==================
    // Lookup Errors
    // ==================
    /// No record with the requested id
    #[error("Student not found: {0}")]
    NotFound(String),

    /// A required query parameter was absent or empty
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    // ==================
    // Internal Errors
    // ==================
    /// Store could not be accessed
    #[error("Storage error: {0}")]
    Storage(String),
}

impl StudentError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            StudentError::IncompleteData(_) => StatusCode::BAD_REQUEST,
            StudentError::InvalidType { .. } => StatusCode::BAD_REQUEST,
            StudentError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            StudentError::NotFound(_) => StatusCode::NOT_FOUND,
            StudentError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the error came from validating a create payload
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            StudentError::IncompleteData(_) | StudentError::InvalidType { .. }
        )
    }

    /// Body sent to the client.
    ///
    /// Both validation failures collapse to the same message; the variant
    /// only matters for logs.
    pub fn public_message(&self) -> String {
        match self {
            StudentError::IncompleteData(_) | StudentError::InvalidType { .. } => {
                INVALID_PAYLOAD_MESSAGE.to_string()
            }
            StudentError::MissingParameter(_) => MISSING_QUERY_MESSAGE.to_string(),
            StudentError::NotFound(_) => String::new(),
            StudentError::Storage(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for StudentError {
    fn into_response(self) -> Response {
        (self.status_code(), self.public_message()).into_response()
    }
}
