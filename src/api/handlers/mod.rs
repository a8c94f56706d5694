//! API request handlers
//!
//! Provides handler functions for all API endpoints organized by resource.

pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

pub use categories::{list_categories, list_category_questions};
pub use health::health;
pub use questions::{create_question, delete_question, list_questions, search_questions};
pub use quizzes::play_quiz;
