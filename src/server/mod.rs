//! HTTP server for inference
//!
//! Exposes the health and prediction endpoints over the loaded model state.

mod handlers;
mod routes;
mod validate;

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub use handlers::{AppState, CLASS_LEGEND};
pub use routes::api_routes;

/// Build the application router over injected model state.
///
/// Separated from `start` so tests can drive the exact production router
/// without binding a socket.
pub fn app(state: Arc<AppState>, config: &ServerConfig) -> Router {
    let mut router = Router::new()
        .merge(api_routes())
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed);

    if config.cors_enabled {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        router = router.layer(cors);
    }
    if config.request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router.with_state(state)
}

/// Start the HTTP inference server
pub async fn start(state: Arc<AppState>, config: ServerConfig) -> Result<()> {
    let n_features = state.feature_names().len();
    let router = app(state, &config);

    let addr = config.addr();
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Serving model with {} features", n_features);
    tracing::info!("API endpoints:");
    tracing::info!("  GET  / - Health check");
    tracing::info!("  POST /predict - Predict from a feature vector");

    axum::serve(listener, router).await?;

    Ok(())
}
