//! Quiz API models and DTOs

use serde::{Deserialize, Serialize};

use crate::db::models::Question;

/// Category selector sent by the quiz client
///
/// Id 0 means "any category". Clients also send the category name under
/// `type`; it is accepted and ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizCategory {
    /// Category id, or 0 for all categories
    pub id: i64,
}

/// Request body for POST /quizzes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizRequest {
    /// Ids of questions already asked this game
    #[serde(default)]
    pub previous_questions: Vec<i64>,

    /// Category restriction for the next question
    pub quiz_category: QuizCategory,
}

/// Response for POST /quizzes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResponse {
    /// Always true
    pub success: bool,

    /// The next question to ask, fully serialized
    pub question: Question,
}
