//! Artifact info command

use std::path::PathBuf;

use anyhow::Result;

use crate::artifact::Artifact;
use crate::config::resolve_model_path;

/// Show artifact information
pub fn info(model: Option<PathBuf>) -> Result<()> {
    let path = resolve_model_path(model);
    let artifact = Artifact::load(&path)?;

    println!("Artifact: {}\n", path.display());
    println!("Pipeline: standard scaler + logistic regression");
    println!("Features: {}", artifact.n_features());
    for name in &artifact.feature_names {
        println!("  {}", name);
    }

    if let Ok(metadata) = std::fs::metadata(&path) {
        let size_kb = metadata.len() as f64 / 1024.0;
        println!("\nFile size: {:.1} KB", size_kb);
    }

    Ok(())
}
