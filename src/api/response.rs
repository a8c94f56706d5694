//! API error body and message strings
//!
//! Every error response carries the same three-field JSON body:
//! `{"success": false, "error": <status code>, "message": <fixed string>}`.
//! The message strings are part of the service contract and never vary
//! with the underlying cause.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// JSON body for error responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Always false for errors
    pub success: bool,
    /// HTTP status code, repeated in the body
    pub error: u16,
    /// Fixed human-readable message for the status
    pub message: String,
}

impl ErrorBody {
    /// Build the contract error body for a status code
    pub fn for_status(status: StatusCode) -> Self {
        Self {
            success: false,
            error: status.as_u16(),
            message: error_message(status).to_string(),
        }
    }
}

/// Fixed message string for each status in the error taxonomy
pub fn error_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "bad request",
        StatusCode::NOT_FOUND => "resource not found",
        StatusCode::METHOD_NOT_ALLOWED => "method not allowed",
        StatusCode::UNPROCESSABLE_ENTITY => "unprocessable",
        _ => "internal server error",
    }
}
