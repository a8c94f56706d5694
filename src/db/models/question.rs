//! Question model for database persistence

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents a trivia question row
///
/// Questions are created through the API and deleted by id; there is no
/// update path. The `category` column is an integer reference to
/// `categories.id`, assigned at creation and compared as an integer by every
/// filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Question {
    /// Surrogate key assigned by the store
    pub id: i64,

    /// Question text shown to the player
    pub question: String,

    /// Accepted answer text
    pub answer: String,

    /// Difficulty rating
    pub difficulty: i64,

    /// Reference to the owning category's id
    pub category: i64,
}
