//! Question API models and DTOs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::db::models::Question;

/// Request to create a new question
///
/// No field is validated for presence; absent fields are passed through to
/// the store as NULL and rejected there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateQuestionRequest {
    /// Question text
    pub question: Option<String>,

    /// Answer text
    pub answer: Option<String>,

    /// Difficulty rating
    pub difficulty: Option<i64>,

    /// Owning category id
    pub category: Option<i64>,
}

/// Response for GET /questions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionListResponse {
    /// Always true
    pub success: bool,

    /// One page of questions, ordered by id
    pub questions: Vec<Question>,

    /// Grand total question count, unfiltered
    pub total_questions: i64,

    /// All categories as an id-to-name mapping
    pub categories: BTreeMap<i64, String>,

    /// No category context at this endpoint; always null
    pub current_category: Option<i64>,
}

/// Response for DELETE /questions/{id}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteQuestionResponse {
    /// Always true
    pub success: bool,

    /// Id of the deleted question
    pub deleted: i64,

    /// Page of remaining questions
    pub questions: Vec<Question>,

    /// Remaining question count
    pub total_questions: i64,
}

/// Response for POST /questions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateQuestionResponse {
    /// Always true
    pub success: bool,

    /// Id assigned to the new question
    pub created: i64,

    /// Page of questions after the insert
    pub questions: Vec<Question>,

    /// Question count after the insert
    pub total_questions: i64,
}

/// Request body for POST /search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Substring to match against question text; absent matches everything
    pub search: Option<String>,
}

/// Response for POST /search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Always true
    pub success: bool,

    /// Page of matching questions
    pub questions: Vec<Question>,

    /// Count of ALL matches, not just the returned page
    pub total_questions: i64,
}
