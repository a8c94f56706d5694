//! Endpoint tests for random quiz-question selection.

use std::collections::HashSet;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use trivia_api::api::routes::create_router;
use trivia_api::db::repositories::QuestionRepository;
use trivia_api::db::DatabaseConnection;

async fn setup() -> (Router, DatabaseConnection) {
    let db = DatabaseConnection::with_max_connections("sqlite::memory:", 1)
        .await
        .expect("Failed to create test database");
    db.run_migrations().await.expect("Failed to run migrations");

    (create_router(db.clone()), db)
}

async fn seed_question(db: &DatabaseConnection, text: &str, category: i64) -> i64 {
    QuestionRepository::create(
        db.pool(),
        Some(text.to_string()),
        Some("answer".to_string()),
        Some(1),
        Some(category),
    )
    .await
    .expect("Failed to seed question")
    .id
}

async fn play(app: &Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/quizzes")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_quiz_returns_unplayed_question() {
    let (app, db) = setup().await;
    let a = seed_question(&db, "question a", 1).await;
    let b = seed_question(&db, "question b", 2).await;
    let c = seed_question(&db, "question c", 3).await;

    let (status, body) = play(
        &app,
        json!({"previous_questions": [a, b], "quiz_category": {"id": 0}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["question"]["id"], c);
}

#[tokio::test]
async fn test_quiz_respects_category_restriction() {
    let (app, db) = setup().await;
    seed_question(&db, "science question", 1).await;
    seed_question(&db, "art question", 2).await;
    seed_question(&db, "another art question", 2).await;

    for _ in 0..10 {
        let (status, body) = play(
            &app,
            json!({"previous_questions": [], "quiz_category": {"type": "Art", "id": 2}}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["question"]["category"], 2);
    }
}

#[tokio::test]
async fn test_quiz_exhausted_pool_is_405() {
    let (app, db) = setup().await;
    let a = seed_question(&db, "question a", 1).await;
    let b = seed_question(&db, "question b", 1).await;

    let (status, body) = play(
        &app,
        json!({"previous_questions": [a, b], "quiz_category": {"id": 0}}),
    )
    .await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 405);
    assert_eq!(body["message"], "method not allowed");
}

#[tokio::test]
async fn test_quiz_empty_category_pool_is_405() {
    let (app, db) = setup().await;
    seed_question(&db, "science question", 1).await;

    let (status, _body) = play(
        &app,
        json!({"previous_questions": [], "quiz_category": {"id": 6}}),
    )
    .await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_quiz_drains_pool_without_repeats() {
    let (app, db) = setup().await;
    let mut remaining = HashSet::new();
    for i in 0..4 {
        remaining.insert(seed_question(&db, &format!("question {}", i), 1).await);
    }

    let mut previous: Vec<i64> = Vec::new();
    loop {
        let (status, body) = play(
            &app,
            json!({"previous_questions": previous.clone(), "quiz_category": {"id": 0}}),
        )
        .await;

        if status == StatusCode::METHOD_NOT_ALLOWED {
            break;
        }

        assert_eq!(status, StatusCode::OK);
        let id = body["question"]["id"].as_i64().unwrap();
        assert!(remaining.remove(&id), "question {} repeated", id);
        previous.push(id);
    }

    assert!(remaining.is_empty());
    assert_eq!(previous.len(), 4);
}

#[tokio::test]
async fn test_quiz_missing_category_is_400() {
    let (app, _db) = setup().await;

    let (status, body) = play(&app, json!({"previous_questions": []})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "bad request");
}
