//! Health check endpoint.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Number of articles currently held.
    pub articles: usize,
}

/// GET /health - Liveness plus current collection size.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let articles = state.store().read().await.len();
    Json(HealthResponse {
        status: "ok",
        articles,
    })
}

/// Build health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
