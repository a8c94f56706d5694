//! REST API layer for the trivia service
//!
//! Provides HTTP/JSON endpoints for trivia operations including:
//! - Category listing and category-filtered questions
//! - Paginated question listing, creation, and deletion
//! - Substring search over question text
//! - Random quiz-question selection
//! - Health check

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod pagination;
pub mod response;
pub mod routes;

pub use error::{ApiError, ApiResult};
pub use response::ErrorBody;
pub use routes::create_router;
