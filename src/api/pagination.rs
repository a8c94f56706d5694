//! Question pagination
//!
//! Pagination is fixed at ten questions per page and sliced in memory over
//! the full ordered result set. The `page` query parameter is parsed
//! leniently: anything that is not a positive integer falls back to the
//! first page.

use std::collections::HashMap;

use crate::db::models::Question;

/// Fixed page size for question listings
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Extract the page number from request query parameters
///
/// Missing, non-numeric, and non-positive values all fall back to page 1.
pub fn page_from_query(params: &HashMap<String, String>) -> usize {
    params
        .get("page")
        .and_then(|raw| raw.parse::<usize>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

/// Slice one page out of the full ordered question set
pub fn paginate(questions: &[Question], page: usize) -> Vec<Question> {
    let start = page.saturating_sub(1) * QUESTIONS_PER_PAGE;
    questions
        .iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .cloned()
        .collect()
}
