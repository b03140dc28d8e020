//! Built-in training dataset
//!
//! A deterministic binary-classification table with 30 named diagnostic
//! measurements per record. Class 0 (malignant) records carry larger
//! measurements than class 1 (benign) across every column, with enough
//! per-column overlap that no single feature separates the classes.

use anyhow::{bail, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Column names, in the positional order every feature vector must follow.
pub const FEATURE_NAMES: [&str; 30] = [
    "mean radius",
    "mean texture",
    "mean perimeter",
    "mean area",
    "mean smoothness",
    "mean compactness",
    "mean concavity",
    "mean concave points",
    "mean symmetry",
    "mean fractal dimension",
    "radius error",
    "texture error",
    "perimeter error",
    "area error",
    "smoothness error",
    "compactness error",
    "concavity error",
    "concave points error",
    "symmetry error",
    "fractal dimension error",
    "worst radius",
    "worst texture",
    "worst perimeter",
    "worst area",
    "worst smoothness",
    "worst compactness",
    "worst concavity",
    "worst concave points",
    "worst symmetry",
    "worst fractal dimension",
];

const SAMPLE_COUNT: usize = 400;

/// Share of benign (label 1) records in the generated table.
const POSITIVE_SHARE: f64 = 0.6;

/// Seed for table synthesis; fixed so every build trains on identical data.
const DATASET_SEED: u64 = 7;

/// A labeled tabular dataset with named columns.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Column names, positionally aligned with each record.
    pub feature_names: Vec<String>,
    /// One row per record, `feature_names.len()` values each.
    pub samples: Vec<Vec<f64>>,
    /// Class label per record: 0 = malignant, 1 = benign.
    pub labels: Vec<u8>,
}

impl Dataset {
    /// Number of records.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Split into (train, test) partitions, stratified by label.
    ///
    /// Records of each class are shuffled with a seeded RNG and the requested
    /// share of each class is moved to the test partition, so both partitions
    /// preserve the dataset's class proportions and the split is reproducible.
    pub fn stratified_split(&self, test_size: f64, seed: u64) -> Result<(Dataset, Dataset)> {
        if !(0.0..1.0).contains(&test_size) || test_size == 0.0 {
            bail!("test_size must be in (0, 1), got {}", test_size);
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let mut train_idx = Vec::new();
        let mut test_idx = Vec::new();

        for class in [0u8, 1u8] {
            let mut indices: Vec<usize> = (0..self.len())
                .filter(|&i| self.labels[i] == class)
                .collect();
            if indices.len() < 2 {
                bail!("not enough records with label {} to split", class);
            }
            indices.shuffle(&mut rng);

            let n_test = ((indices.len() as f64 * test_size).round() as usize)
                .clamp(1, indices.len() - 1);
            test_idx.extend_from_slice(&indices[..n_test]);
            train_idx.extend_from_slice(&indices[n_test..]);
        }

        Ok((self.subset(&train_idx), self.subset(&test_idx)))
    }

    fn subset(&self, indices: &[usize]) -> Dataset {
        Dataset {
            feature_names: self.feature_names.clone(),
            samples: indices.iter().map(|&i| self.samples[i].clone()).collect(),
            labels: indices.iter().map(|&i| self.labels[i]).collect(),
        }
    }
}

/// Build the fixed training table.
///
/// Synthesis is fully determined by `DATASET_SEED`: per column `j`, records
/// are drawn around a class-dependent center on a scale that grows with `j`,
/// with uniform noise wide enough to overlap the two classes.
pub fn builtin() -> Dataset {
    let mut rng = StdRng::seed_from_u64(DATASET_SEED);
    let mut samples = Vec::with_capacity(SAMPLE_COUNT);
    let mut labels = Vec::with_capacity(SAMPLE_COUNT);

    for _ in 0..SAMPLE_COUNT {
        let label = u8::from(rng.gen::<f64>() < POSITIVE_SHARE);
        let row = (0..FEATURE_NAMES.len())
            .map(|j| {
                let scale = 1.0 + j as f64 * 0.25;
                // Benign measurements sit lower than malignant ones.
                let center = if label == 1 { 0.6 * scale } else { scale };
                center + rng.gen_range(-0.4..0.4) * scale
            })
            .collect();
        samples.push(row);
        labels.push(label);
    }

    Dataset {
        feature_names: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
        samples,
        labels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_shape() {
        let dataset = builtin();
        assert_eq!(dataset.len(), SAMPLE_COUNT);
        assert_eq!(dataset.feature_names.len(), FEATURE_NAMES.len());
        assert!(dataset.samples.iter().all(|s| s.len() == FEATURE_NAMES.len()));
        assert!(dataset.labels.iter().any(|&l| l == 0));
        assert!(dataset.labels.iter().any(|&l| l == 1));
    }

    #[test]
    fn builtin_is_deterministic() {
        let a = builtin();
        let b = builtin();
        assert_eq!(a.samples, b.samples);
        assert_eq!(a.labels, b.labels);
    }

    #[test]
    fn split_preserves_class_proportions() {
        let dataset = builtin();
        let (train, test) = dataset.stratified_split(0.2, 42).unwrap();

        assert_eq!(train.len() + test.len(), dataset.len());

        let share = |d: &Dataset| {
            d.labels.iter().filter(|&&l| l == 1).count() as f64 / d.len() as f64
        };
        let full = share(&dataset);
        assert!((share(&train) - full).abs() < 0.02);
        assert!((share(&test) - full).abs() < 0.02);
    }

    #[test]
    fn split_is_reproducible() {
        let dataset = builtin();
        let (a_train, _) = dataset.stratified_split(0.2, 42).unwrap();
        let (b_train, _) = dataset.stratified_split(0.2, 42).unwrap();
        assert_eq!(a_train.samples, b_train.samples);
    }

    #[test]
    fn split_rejects_bad_test_size() {
        let dataset = builtin();
        assert!(dataset.stratified_split(0.0, 42).is_err());
        assert!(dataset.stratified_split(1.0, 42).is_err());
        assert!(dataset.stratified_split(1.5, 42).is_err());
    }
}
