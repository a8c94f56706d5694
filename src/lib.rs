//! Trivia question web service
//!
//! This crate provides a small REST API over a relational store of trivia
//! questions and categories: paginated listing, creation and deletion,
//! substring search, category filtering, and random quiz-question selection.

pub mod api;
pub mod config;
pub mod db;
pub mod version;

pub use api::routes::create_router;
pub use config::ServerConfig;
pub use db::DatabaseConnection;
