//! API route definitions
//!
//! Defines all API routes and their associated handler functions.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::api::{error::ApiError, handlers, middleware};
use crate::db::DatabaseConnection;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

/// Build the complete API router
pub fn create_router(db: DatabaseConnection) -> Router {
    let app_state = AppState { db };

    Router::new()
        .route("/health", get(handlers::health))
        // Category endpoints
        .route("/categories", get(handlers::list_categories))
        .route(
            "/categories/:category_id/questions",
            get(handlers::list_category_questions),
        )
        // Question endpoints
        .route(
            "/questions",
            get(handlers::list_questions).post(handlers::create_question),
        )
        .route("/questions/:question_id", delete(handlers::delete_question))
        .route("/search", post(handlers::search_questions))
        // Quiz endpoint
        .route("/quizzes", post(handlers::play_quiz))
        .fallback(fallback_not_found)
        .layer(middleware::logging_layer())
        .layer(middleware::cors_layer())
        .with_state(app_state)
}

/// Unmatched paths get the contract 404 body
async fn fallback_not_found() -> ApiError {
    ApiError::NotFound("no such route".to_string())
}
