//! API data transfer objects (DTOs) and response models
//!
//! Request/response structures for the API endpoints. Every success
//! response carries `"success": true` at the top level alongside its
//! payload keys.

pub mod category;
pub mod question;
pub mod quiz;

pub use category::{category_map, CategoryListResponse, CategoryQuestionsResponse};
pub use question::{
    CreateQuestionRequest, CreateQuestionResponse, DeleteQuestionResponse, QuestionListResponse,
    SearchRequest, SearchResponse,
};
pub use quiz::{QuizCategory, QuizRequest, QuizResponse};

/// Service health response
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    /// Overall status
    pub status: String,

    /// Database connection status
    pub database: String,

    /// API version
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn new(status: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            database: database.into(),
            version: crate::version::VERSION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response() {
        let health = HealthResponse::new("ok", "connected");
        assert_eq!(health.status, "ok");
        assert_eq!(health.database, "connected");
        assert!(!health.version.is_empty());
    }
}
