//! Repository pattern implementations for database access
//!
//! This module provides repository structs for managing database operations
//! on the two core entities: questions and categories.

pub mod category_repo;
pub mod question_repo;

pub use category_repo::CategoryRepository;
pub use question_repo::QuestionRepository;
