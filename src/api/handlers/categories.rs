//! Category endpoint handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::{
    error::{ApiError, ApiResult},
    models::{category_map, CategoryListResponse, CategoryQuestionsResponse},
    routes::AppState,
};
use crate::db::repositories::{CategoryRepository, QuestionRepository};

/// List all categories
///
/// GET /categories
pub async fn list_categories(
    State(app_state): State<AppState>,
) -> ApiResult<Json<CategoryListResponse>> {
    let pool = app_state.db.pool();

    let categories = CategoryRepository::list_all(pool)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    let total_categories = CategoryRepository::count(pool)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(CategoryListResponse {
        success: true,
        categories: category_map(categories),
        total_categories,
    }))
}

/// List every question in one category, without pagination
///
/// GET /categories/:category_id/questions
pub async fn list_category_questions(
    State(app_state): State<AppState>,
    Path(category_id): Path<i64>,
) -> ApiResult<Json<CategoryQuestionsResponse>> {
    let pool = app_state.db.pool();

    let questions = QuestionRepository::list_by_category(pool, category_id).await?;
    if questions.is_empty() {
        return Err(ApiError::NotFound(format!(
            "no questions in category {}",
            category_id
        )));
    }

    let category = CategoryRepository::get_by_id(pool, category_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("category {} does not exist", category_id)))?;

    let total_questions = questions.len() as i64;
    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions,
        total_questions,
        category,
    }))
}
