//! Database module for the trivia service
//!
//! Provides database connectivity, models, repositories, and error handling
//! for persistent storage of questions and categories.

pub mod connection;
pub mod error;
pub mod models;
pub mod repositories;

pub use connection::{DatabaseConnection, DatabasePool};
pub use error::{DatabaseError, DbResult};
