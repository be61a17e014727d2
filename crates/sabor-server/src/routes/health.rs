//! Health check and root endpoints.

use axum::{extract::State, routing::get, Json, Router};

use crate::json::{HealthResponse, WelcomeResponse};
use crate::AppState;

/// Health check routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health_check))
}

async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Sabor Express API!".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Health check handler.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        restaurants: state.store.len(),
        menu_dir: state.config.data.menu_dir.display().to_string(),
        metadata_file: state.config.data.metadata_file.display().to_string(),
    })
}
