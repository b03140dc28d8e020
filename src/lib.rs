//! Classr - minimal inference server for a trained tabular classifier
//!
//! Two loosely coupled halves share one persisted artifact:
//! - **trainer** (offline): fits a standardize-then-logistic-regression
//!   pipeline on the built-in dataset and writes the artifact
//! - **server** (online): loads the artifact once at startup and serves
//!   probability-thresholded predictions over HTTP
//!
//! # Example
//!
//! ```bash
//! # Train and persist the model artifact
//! classr train
//!
//! # Start the inference server
//! classr serve --port 8000
//!
//! # Inspect a saved artifact
//! classr info
//! ```

pub mod artifact;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod metrics;
pub mod model;
pub mod server;

// Re-export key types
pub use artifact::Artifact;
pub use config::ServerConfig;
pub use model::{Pipeline, ProbabilisticClassifier, DECISION_THRESHOLD};
pub use server::AppState;
