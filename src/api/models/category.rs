//! Category API models and DTOs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::db::models::{Category, Question};

/// Build the id-to-name mapping used by the listing endpoints
///
/// Integer keys serialize as JSON object keys ("1": "Science") and the
/// BTreeMap keeps them in id order.
pub fn category_map(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

/// Response for GET /categories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryListResponse {
    /// Always true
    pub success: bool,

    /// All categories as an id-to-name mapping
    pub categories: BTreeMap<i64, String>,

    /// Total category count
    pub total_categories: i64,
}

/// Response for GET /categories/{id}/questions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryQuestionsResponse {
    /// Always true
    pub success: bool,

    /// Every question in the category; this endpoint does not paginate
    pub questions: Vec<Question>,

    /// Match count
    pub total_questions: i64,

    /// The full category record for the requested id
    pub category: Category,
}
