//! HTTP request handlers

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

use super::validate::{resolve_encoding, validate_named, validate_positional, RequestEncoding};
use crate::artifact::Artifact;
use crate::model::{ProbabilisticClassifier, DECISION_THRESHOLD};

/// Fixed legend so callers can interpret the 0/1 labels without
/// external documentation.
pub const CLASS_LEGEND: [&str; 2] = ["malignant(0)", "benign(1)"];

/// Shared application state
///
/// Built once at startup from the loaded artifact and injected read-only into
/// every handler. Nothing mutates it afterwards.
pub struct AppState {
    classifier: Arc<dyn ProbabilisticClassifier>,
    feature_names: Vec<String>,
}

impl AppState {
    pub fn new(classifier: Arc<dyn ProbabilisticClassifier>, feature_names: Vec<String>) -> Self {
        Self {
            classifier,
            feature_names,
        }
    }

    pub fn from_artifact(artifact: Artifact) -> Self {
        Self::new(Arc::new(artifact.pipeline), artifact.feature_names)
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }
}

/// Health check endpoint
///
/// Serving at all implies the artifact loaded, so `model_loaded` is
/// unconditionally true.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        model_loaded: true,
    })
}

/// Prediction endpoint
pub async fn predict(State(state): State<Arc<AppState>>, body: String) -> Response {
    let body: Value = match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!("rejected request with malformed body: {}", err);
            return validation_error("invalid or missing JSON body.");
        }
    };

    let validated = match resolve_encoding(&body) {
        Some(RequestEncoding::Positional(value)) => {
            validate_positional(value, state.feature_names.len())
        }
        Some(RequestEncoding::Named(value)) => validate_named(value, &state.feature_names),
        None => {
            tracing::warn!("rejected request with unknown input encoding");
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "invalid format: use 'features' (list) or 'payload' (object with feature names).",
                    "expected_feature_count": state.feature_names.len(),
                    "feature_names": state.feature_names,
                })),
            )
                .into_response();
        }
    };

    let vector = match validated {
        Ok(vector) => vector,
        Err(err) => {
            tracing::warn!("request validation failed: {}", err);
            return validation_error(err.to_string());
        }
    };

    match state.classifier.predict_probability(&vector) {
        Ok(probability) => {
            let response = PredictionResponse {
                prediction: u8::from(probability >= DECISION_THRESHOLD),
                probability,
                threshold: DECISION_THRESHOLD,
                classes: CLASS_LEGEND,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            tracing::error!("prediction failed: {:#}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "internal server error".to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Fallback for unknown routes
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "not found".to_string(),
        }),
    )
        .into_response()
}

/// Fallback for known routes hit with the wrong method
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse {
            error: "method not allowed".to_string(),
        }),
    )
        .into_response()
}

fn validation_error(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

// Response types

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model_loaded: bool,
}

#[derive(Serialize)]
pub struct PredictionResponse {
    pub prediction: u8,
    pub probability: f64,
    pub threshold: f64,
    pub classes: [&'static str; 2],
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
