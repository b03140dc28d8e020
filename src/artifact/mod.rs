//! Model artifact persistence
//!
//! The artifact is the single file exchanged between the offline trainer and
//! the serving process: the fitted pipeline plus the ordered feature schema
//! it was fitted against. The schema ordering is the contract — there is no
//! separate versioning, so the file is only ever replaced whole.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::Pipeline;

/// Persisted bundle of a fitted pipeline and its feature schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    /// The fitted classifier capability.
    pub pipeline: Pipeline,
    /// Ordered column names defining the expected input vector.
    pub feature_names: Vec<String>,
}

impl Artifact {
    /// Bundle a fitted pipeline with its schema, rejecting inconsistent pairs.
    pub fn new(pipeline: Pipeline, feature_names: Vec<String>) -> Result<Self> {
        let artifact = Self {
            pipeline,
            feature_names,
        };
        artifact.validate()?;
        Ok(artifact)
    }

    /// Write the artifact to `path`, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let bytes = bincode::serialize(self).context("failed to serialize model artifact")?;
        std::fs::write(path, bytes)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }

    /// Read and validate an artifact from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let artifact: Artifact =
            bincode::deserialize(&bytes).context("failed to decode model artifact")?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Number of features the artifact's schema defines.
    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }

    fn validate(&self) -> Result<()> {
        if self.feature_names.is_empty() {
            bail!("model artifact carries an empty feature schema");
        }
        if self.feature_names.len() != self.pipeline.n_features() {
            bail!(
                "model artifact schema mismatch: {} feature names, pipeline expects {}",
                self.feature_names.len(),
                self.pipeline.n_features()
            );
        }
        Ok(())
    }
}
