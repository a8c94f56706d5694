//! Endpoint tests for category listing and category-filtered questions.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
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

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_list_categories() {
    let (app, _db) = setup().await;

    let (status, body) = get(&app, "/categories").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["total_categories"], 6);
    assert_eq!(body["categories"]["1"], "Science");
    assert_eq!(body["categories"]["6"], "Sports");
}

#[tokio::test]
async fn test_category_questions_returns_all_without_pagination() {
    let (app, db) = setup().await;
    for i in 0..12 {
        seed_question(&db, &format!("art question {}", i), 2).await;
    }
    seed_question(&db, "science question", 1).await;

    let (status, body) = get(&app, "/categories/2/questions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["questions"].as_array().unwrap().len(), 12);
    assert_eq!(body["total_questions"], 12);
    assert_eq!(body["category"]["id"], 2);
    assert_eq!(body["category"]["type"], "Art");
}

#[tokio::test]
async fn test_category_questions_empty_category_is_404() {
    let (app, db) = setup().await;
    seed_question(&db, "science question", 1).await;

    let (status, body) = get(&app, "/categories/3/questions").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 404);
    assert_eq!(body["message"], "resource not found");
}

#[tokio::test]
async fn test_category_questions_unknown_category_is_404() {
    let (app, _db) = setup().await;

    let (status, body) = get(&app, "/categories/99/questions").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], 404);
}

#[tokio::test]
async fn test_unknown_route_gets_contract_404_body() {
    let (app, _db) = setup().await;

    let (status, body) = get(&app, "/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "resource not found");
}
