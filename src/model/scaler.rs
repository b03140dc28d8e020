//! Per-column standardization

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Column-wise standardization transform: `(x - mean) / std`.
///
/// Statistics are computed over the training partition only and frozen into
/// the artifact, so serving applies exactly the transform training saw.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    means: Vec<f64>,
    stds: Vec<f64>,
}

impl StandardScaler {
    /// Fit means and standard deviations over `samples`.
    pub fn fit(samples: &[Vec<f64>]) -> Result<Self> {
        let Some(first) = samples.first() else {
            bail!("cannot fit scaler on an empty sample set");
        };
        let n_features = first.len();
        if n_features == 0 {
            bail!("cannot fit scaler on zero-width samples");
        }
        if let Some(bad) = samples.iter().find(|s| s.len() != n_features) {
            bail!(
                "inconsistent sample width: expected {}, got {}",
                n_features,
                bad.len()
            );
        }

        let count = samples.len() as f64;
        let mut means = vec![0.0; n_features];
        for sample in samples {
            for (m, x) in means.iter_mut().zip(sample) {
                *m += x;
            }
        }
        for m in &mut means {
            *m /= count;
        }

        let mut stds = vec![0.0; n_features];
        for sample in samples {
            for ((s, x), m) in stds.iter_mut().zip(sample).zip(&means) {
                *s += (x - m) * (x - m);
            }
        }
        for s in &mut stds {
            *s = (*s / count).sqrt();
            // Constant columns pass through unscaled.
            if *s == 0.0 {
                *s = 1.0;
            }
        }

        Ok(Self { means, stds })
    }

    /// Standardize one feature vector.
    pub fn transform(&self, features: &[f64]) -> Result<Vec<f64>> {
        if features.len() != self.means.len() {
            bail!(
                "feature vector length mismatch: expected {}, got {}",
                self.means.len(),
                features.len()
            );
        }
        Ok(features
            .iter()
            .zip(self.means.iter().zip(&self.stds))
            .map(|(x, (m, s))| (x - m) / s)
            .collect())
    }

    /// Number of columns this scaler was fitted on.
    pub fn n_features(&self) -> usize {
        self.means.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standardizes_training_data() {
        let samples = vec![
            vec![1.0, 10.0],
            vec![2.0, 20.0],
            vec![3.0, 30.0],
            vec![4.0, 40.0],
        ];
        let scaler = StandardScaler::fit(&samples).unwrap();

        let transformed: Vec<Vec<f64>> = samples
            .iter()
            .map(|s| scaler.transform(s).unwrap())
            .collect();

        for col in 0..2 {
            let mean: f64 = transformed.iter().map(|s| s[col]).sum::<f64>() / 4.0;
            let var: f64 = transformed.iter().map(|s| s[col] * s[col]).sum::<f64>() / 4.0;
            assert!(mean.abs() < 1e-12);
            assert!((var - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn constant_column_passes_through() {
        let samples = vec![vec![5.0], vec![5.0], vec![5.0]];
        let scaler = StandardScaler::fit(&samples).unwrap();
        assert_eq!(scaler.transform(&[5.0]).unwrap(), vec![0.0]);
    }

    #[test]
    fn rejects_mismatched_width() {
        let scaler = StandardScaler::fit(&[vec![1.0, 2.0]]).unwrap();
        assert!(scaler.transform(&[1.0]).is_err());
        assert!(scaler.transform(&[1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn rejects_empty_input() {
        assert!(StandardScaler::fit(&[]).is_err());
        assert!(StandardScaler::fit(&[vec![]]).is_err());
    }
}
