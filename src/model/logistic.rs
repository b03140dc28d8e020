//! Linear-logit binary classifier
//!
//! Weights are fitted with plain batch gradient descent, which converges
//! quickly on standardized inputs. Scoring is `σ(w·x + b)`.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// A fitted logistic regression model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    weights: Vec<f64>,
    bias: f64,
}

impl LogisticRegression {
    /// Fit weights on `samples` / `labels` with batch gradient descent.
    ///
    /// Labels must be 0 or 1. Inputs are expected to be standardized; the
    /// iteration cap bounds training time rather than targeting a tolerance.
    pub fn fit(
        samples: &[Vec<f64>],
        labels: &[u8],
        max_iter: usize,
        learning_rate: f64,
    ) -> Result<Self> {
        if samples.is_empty() {
            bail!("cannot fit classifier on an empty sample set");
        }
        if samples.len() != labels.len() {
            bail!(
                "sample/label count mismatch: {} samples, {} labels",
                samples.len(),
                labels.len()
            );
        }
        if let Some(bad) = labels.iter().find(|&&l| l > 1) {
            bail!("labels must be 0 or 1, got {}", bad);
        }

        let n_features = samples[0].len();
        let count = samples.len() as f64;
        let mut weights = vec![0.0; n_features];
        let mut bias = 0.0;

        for _ in 0..max_iter {
            let mut grad_w = vec![0.0; n_features];
            let mut grad_b = 0.0;

            for (sample, &label) in samples.iter().zip(labels) {
                let error = sigmoid(dot(&weights, sample) + bias) - f64::from(label);
                for (g, x) in grad_w.iter_mut().zip(sample) {
                    *g += error * x;
                }
                grad_b += error;
            }

            for (w, g) in weights.iter_mut().zip(&grad_w) {
                *w -= learning_rate * g / count;
            }
            bias -= learning_rate * grad_b / count;
        }

        Ok(Self { weights, bias })
    }

    /// Positive-class probability for one feature vector.
    pub fn predict_probability(&self, features: &[f64]) -> Result<f64> {
        if features.len() != self.weights.len() {
            bail!(
                "feature vector length mismatch: expected {}, got {}",
                self.weights.len(),
                features.len()
            );
        }
        Ok(sigmoid(dot(&self.weights, features) + self.bias))
    }

    /// Number of features this model was fitted on.
    pub fn n_features(&self) -> usize {
        self.weights.len()
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(ai, bi)| ai * bi).sum()
}

/// Numerically stable logistic sigmoid.
pub(crate) fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let ez = z.exp();
        ez / (1.0 + ez)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_properties() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-10);
        assert!(sigmoid(10.0) > 0.999);
        assert!(sigmoid(-10.0) < 0.001);
        // Numerical stability for large values
        assert!(sigmoid(1000.0).is_finite());
        assert!(sigmoid(-1000.0).is_finite());
    }

    #[test]
    fn separates_trivial_data() {
        let samples = vec![
            vec![-2.0],
            vec![-1.5],
            vec![-1.0],
            vec![1.0],
            vec![1.5],
            vec![2.0],
        ];
        let labels = vec![0, 0, 0, 1, 1, 1];

        let model = LogisticRegression::fit(&samples, &labels, 500, 0.5).unwrap();

        assert!(model.predict_probability(&[-2.0]).unwrap() < 0.5);
        assert!(model.predict_probability(&[2.0]).unwrap() > 0.5);
    }

    #[test]
    fn probabilities_stay_in_range() {
        let samples = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
        let labels = vec![0, 1];
        let model = LogisticRegression::fit(&samples, &labels, 100, 0.1).unwrap();

        for features in [[-100.0, 100.0], [100.0, -100.0], [0.0, 0.0]] {
            let p = model.predict_probability(&features).unwrap();
            assert!((0.0..=1.0).contains(&p));
        }
    }

    #[test]
    fn rejects_invalid_training_input() {
        assert!(LogisticRegression::fit(&[], &[], 10, 0.1).is_err());
        assert!(LogisticRegression::fit(&[vec![1.0]], &[0, 1], 10, 0.1).is_err());
        assert!(LogisticRegression::fit(&[vec![1.0]], &[2], 10, 0.1).is_err());
    }

    #[test]
    fn rejects_mismatched_vector_length() {
        let model = LogisticRegression::fit(&[vec![0.0], vec![1.0]], &[0, 1], 10, 0.1).unwrap();
        assert!(model.predict_probability(&[1.0, 2.0]).is_err());
    }
}
