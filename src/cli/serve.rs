//! HTTP server command

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::artifact::Artifact;
use crate::config::{resolve_model_path, ServerConfig};
use crate::server::{self, AppState};

/// Start the inference server
///
/// Loads exactly one artifact before binding; a service must never come up
/// with zero or partial model state, so any load failure aborts startup.
pub async fn serve(model: Option<PathBuf>, port: u16, host: String) -> Result<()> {
    let path = resolve_model_path(model);

    tracing::info!("Loading model artifact: {}", path.display());
    let artifact = match Artifact::load(&path) {
        Ok(artifact) => artifact,
        Err(err) => {
            tracing::error!("failed to load model artifact: {:#}", err);
            return Err(err)
                .with_context(|| format!("cannot serve without {}", path.display()));
        }
    };
    tracing::info!("Model loaded. N features: {}", artifact.n_features());

    let state = Arc::new(AppState::from_artifact(artifact));

    let config = ServerConfig {
        port,
        host,
        ..Default::default()
    };

    server::start(state, config).await
}
