//! Train command

use std::path::PathBuf;

use anyhow::Result;

use crate::artifact::Artifact;
use crate::config::DEFAULT_MODEL_PATH;
use crate::dataset;
use crate::metrics;
use crate::model::{Pipeline, ProbabilisticClassifier, DECISION_THRESHOLD};

/// Train on the built-in dataset and persist the artifact.
///
/// This is an offline batch job: any failure during fit or serialization
/// propagates to the caller and exits the process unsuccessfully.
pub fn train(
    output: Option<PathBuf>,
    test_size: f64,
    max_iter: usize,
    learning_rate: f64,
    seed: u64,
) -> Result<()> {
    let dataset = dataset::builtin();
    let (train, test) = dataset.stratified_split(test_size, seed)?;

    tracing::info!(
        "fitting pipeline on {} records ({} held out)",
        train.len(),
        test.len()
    );
    let pipeline = Pipeline::fit(&train.samples, &train.labels, max_iter, learning_rate)?;

    // Held-out diagnostics; reported, never gating.
    let probabilities: Vec<f64> = test
        .samples
        .iter()
        .map(|sample| pipeline.predict_probability(sample))
        .collect::<Result<_>>()?;
    let predicted: Vec<u8> = probabilities
        .iter()
        .map(|&p| u8::from(p >= DECISION_THRESHOLD))
        .collect();
    let acc = metrics::accuracy(&test.labels, &predicted);
    let auc = metrics::roc_auc(&test.labels, &probabilities);
    println!("Accuracy: {:.4} | ROC-AUC: {:.4}", acc, auc);

    let artifact = Artifact::new(pipeline, dataset.feature_names)?;
    let path = output.unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH));
    artifact.save(&path)?;
    println!("Model saved to: {}", path.display());

    Ok(())
}
