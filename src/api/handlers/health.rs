//! Health check endpoint handler

use axum::{extract::State, Json};

use crate::api::{models::HealthResponse, routes::AppState};

/// Handler for GET /health
///
/// Reports service status and database connectivity. A failed probe is
/// reported in the body; the endpoint itself stays 200.
pub async fn health(State(app_state): State<AppState>) -> Json<HealthResponse> {
    let database = match app_state.db.health_check().await {
        Ok(()) => "connected",
        Err(_) => "unavailable",
    };

    Json(HealthResponse::new("ok", database))
}
