//! Scaler + classifier composition

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::{LogisticRegression, ProbabilisticClassifier, StandardScaler};

/// The fitted capability persisted in the model artifact: standardization
/// followed by logistic regression, applied as one unit so serving can never
/// skip the transform the classifier was trained against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipeline {
    scaler: StandardScaler,
    classifier: LogisticRegression,
}

impl Pipeline {
    /// Fit the scaler on `samples`, then the classifier on the scaled data.
    pub fn fit(
        samples: &[Vec<f64>],
        labels: &[u8],
        max_iter: usize,
        learning_rate: f64,
    ) -> Result<Self> {
        let scaler = StandardScaler::fit(samples)?;
        let scaled: Vec<Vec<f64>> = samples
            .iter()
            .map(|s| scaler.transform(s))
            .collect::<Result<_>>()?;
        let classifier = LogisticRegression::fit(&scaled, labels, max_iter, learning_rate)?;
        Ok(Self { scaler, classifier })
    }

    /// Number of features the pipeline expects.
    pub fn n_features(&self) -> usize {
        self.scaler.n_features()
    }
}

impl ProbabilisticClassifier for Pipeline {
    fn predict_probability(&self, features: &[f64]) -> Result<f64> {
        let scaled = self.scaler.transform(features)?;
        self.classifier.predict_probability(&scaled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_and_score() {
        // Two well-separated clusters on wildly different raw scales.
        let samples = vec![
            vec![100.0, 0.001],
            vec![110.0, 0.002],
            vec![105.0, 0.001],
            vec![300.0, 0.009],
            vec![310.0, 0.008],
            vec![305.0, 0.009],
        ];
        let labels = vec![0, 0, 0, 1, 1, 1];

        let pipeline = Pipeline::fit(&samples, &labels, 500, 0.5).unwrap();
        assert_eq!(pipeline.n_features(), 2);

        assert!(pipeline.predict_probability(&[105.0, 0.001]).unwrap() < 0.5);
        assert!(pipeline.predict_probability(&[305.0, 0.009]).unwrap() > 0.5);
    }

    #[test]
    fn rejects_wrong_length_vector() {
        let pipeline =
            Pipeline::fit(&[vec![0.0, 1.0], vec![1.0, 0.0]], &[0, 1], 10, 0.1).unwrap();
        assert!(pipeline.predict_probability(&[1.0]).is_err());
    }
}
