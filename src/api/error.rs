//! API error types and HTTP response conversion
//!
//! Provides typed error results per operation with conversion to Axum HTTP
//! responses. The status mapping is deliberately coarse: handlers pick the
//! variant that carries the contract status, and the response body is the
//! fixed taxonomy body regardless of the underlying cause. The detailed
//! cause is kept on the variant for logging only.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::api::response::ErrorBody;
use crate::db::DatabaseError;

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;

/// Custom API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (missing question, empty page, unknown category)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request body could not be parsed at the framework level
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The request was understood but could not be processed
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    /// No unplayed questions remain in the quiz pool; reported as 405
    #[error("Quiz pool exhausted: {0}")]
    QuizExhausted(String),

    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),

    /// Database error not mapped explicitly by a handler
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::QuizExhausted(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Database(db_err) => {
                if db_err.is_not_found() {
                    StatusCode::NOT_FOUND
                } else {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("API error: {}", self);
        } else {
            tracing::debug!("API error: {}", self);
        }

        (status, Json(ErrorBody::for_status(status))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = ApiError::NotFound("question 42".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_bad_request_error() {
        let err = ApiError::BadRequest("malformed body".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unprocessable_error() {
        let err = ApiError::Unprocessable("insert failed".to_string());
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_quiz_exhausted_error() {
        let err = ApiError::QuizExhausted("no questions left".to_string());
        assert_eq!(err.status_code(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn test_internal_error() {
        let err = ApiError::Internal("something went wrong".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_database_not_found_maps_to_404() {
        let err = ApiError::Database(DatabaseError::not_found("row"));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_database_other_maps_to_500() {
        let err = ApiError::Database(DatabaseError::QueryError("boom".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
