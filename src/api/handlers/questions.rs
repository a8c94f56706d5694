//! Question endpoint handlers
//!
//! Listing, creation, deletion, and search. Store failures during a
//! mutation or search map to 422; the existence checks map to 404.

use std::collections::HashMap;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};

use crate::api::{
    error::{ApiError, ApiResult},
    models::{
        category_map, CreateQuestionRequest, CreateQuestionResponse, DeleteQuestionResponse,
        QuestionListResponse, SearchRequest, SearchResponse,
    },
    pagination,
    routes::AppState,
};
use crate::db::repositories::{CategoryRepository, QuestionRepository};

/// List questions, ten per page
///
/// GET /questions?page=N
///
/// A page past the end of the set is a 404, never an empty list.
pub async fn list_questions(
    State(app_state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<QuestionListResponse>> {
    let pool = app_state.db.pool();

    let all = QuestionRepository::list_all(pool).await?;
    let page = pagination::page_from_query(&params);
    let questions = pagination::paginate(&all, page);
    if questions.is_empty() {
        return Err(ApiError::NotFound(format!("no questions on page {}", page)));
    }

    let categories = CategoryRepository::list_all(pool).await?;
    let total_questions = QuestionRepository::count(pool).await?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions,
        total_questions,
        categories: category_map(categories),
        current_category: None,
    }))
}

/// Delete one question by id
///
/// DELETE /questions/:question_id
pub async fn delete_question(
    State(app_state): State<AppState>,
    Path(question_id): Path<i64>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<DeleteQuestionResponse>> {
    let pool = app_state.db.pool();

    let question = QuestionRepository::get_by_id(pool, question_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("question {} does not exist", question_id)))?;

    QuestionRepository::delete(pool, question.id)
        .await
        .map_err(|e| ApiError::Unprocessable(e.to_string()))?;

    let remaining = QuestionRepository::list_all(pool)
        .await
        .map_err(|e| ApiError::Unprocessable(e.to_string()))?;
    let page = pagination::page_from_query(&params);
    let questions = pagination::paginate(&remaining, page);
    let total_questions = remaining.len() as i64;

    tracing::info!("Deleted question {}", question_id);
    Ok(Json(DeleteQuestionResponse {
        success: true,
        deleted: question_id,
        questions,
        total_questions,
    }))
}

/// Create a new question
///
/// POST /questions
///
/// Fields are not validated here; an insert the store rejects is a 422.
pub async fn create_question(
    State(app_state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    payload: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> ApiResult<Json<CreateQuestionResponse>> {
    let Json(req) = payload.map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let pool = app_state.db.pool();

    let created =
        QuestionRepository::create(pool, req.question, req.answer, req.difficulty, req.category)
            .await
            .map_err(|e| ApiError::Unprocessable(e.to_string()))?;

    let all = QuestionRepository::list_all(pool)
        .await
        .map_err(|e| ApiError::Unprocessable(e.to_string()))?;
    let page = pagination::page_from_query(&params);
    let questions = pagination::paginate(&all, page);
    let total_questions = all.len() as i64;

    tracing::info!("Created question {}", created.id);
    Ok(Json(CreateQuestionResponse {
        success: true,
        created: created.id,
        questions,
        total_questions,
    }))
}

/// Search questions by substring of the question text
///
/// POST /search
///
/// The match is case-insensitive and never looks at answers. No matches is
/// a 200 with an empty list, not a 404.
pub async fn search_questions(
    State(app_state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> ApiResult<Json<SearchResponse>> {
    let Json(req) = payload.map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let pool = app_state.db.pool();

    let term = req.search.unwrap_or_default();
    let matches = QuestionRepository::search(pool, &term)
        .await
        .map_err(|e| ApiError::Unprocessable(e.to_string()))?;

    let total_questions = matches.len() as i64;
    let page = pagination::page_from_query(&params);
    let questions = pagination::paginate(&matches, page);

    Ok(Json(SearchResponse {
        success: true,
        questions,
        total_questions,
    }))
}
