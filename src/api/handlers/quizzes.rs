//! Quiz endpoint handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use rand::Rng;
use std::collections::HashSet;

use crate::api::{
    error::{ApiError, ApiResult},
    models::{QuizRequest, QuizResponse},
    routes::AppState,
};
use crate::db::repositories::QuestionRepository;

/// Pick the next quiz question at random
///
/// POST /quizzes
///
/// The candidate pool is every question outside `previous_questions`,
/// optionally restricted to one category (id 0 means any). An exhausted
/// pool is reported as 405; the caller accumulates `previous_questions`
/// across turns, the service keeps no state.
pub async fn play_quiz(
    State(app_state): State<AppState>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> ApiResult<Json<QuizResponse>> {
    let Json(req) = payload.map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let pool = app_state.db.pool();

    let candidates = if req.quiz_category.id == 0 {
        QuestionRepository::list_all(pool).await?
    } else {
        QuestionRepository::list_by_category(pool, req.quiz_category.id).await?
    };

    let excluded: HashSet<i64> = req.previous_questions.iter().copied().collect();
    let mut unused: Vec<_> = candidates
        .into_iter()
        .filter(|q| !excluded.contains(&q.id))
        .collect();

    if unused.is_empty() {
        return Err(ApiError::QuizExhausted(format!(
            "no unplayed questions remain in category {}",
            req.quiz_category.id
        )));
    }

    let index = rand::thread_rng().gen_range(0..unused.len());
    let question = unused.swap_remove(index);

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
