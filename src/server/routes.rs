//! Route definitions

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{health, predict, AppState};

/// Create the API router
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Health check
        .route("/", get(health))
        // Prediction
        .route("/predict", post(predict))
}
