//! Classifier models
//!
//! The serving layer only ever sees the `ProbabilisticClassifier` trait; the
//! concrete implementation is a standardize-then-logistic-regression
//! `Pipeline` fitted offline and restored from the model artifact.

mod logistic;
mod pipeline;
mod scaler;

pub use logistic::LogisticRegression;
pub use pipeline::Pipeline;
pub use scaler::StandardScaler;

use anyhow::Result;

/// Probability cutoff above which the predicted class label is 1.
pub const DECISION_THRESHOLD: f64 = 0.5;

/// A fitted classifier capable of scoring one feature vector.
///
/// Anything that turns a feature vector into a positive-class probability
/// satisfies this, which keeps the request handler testable with a
/// fixed-output stub.
pub trait ProbabilisticClassifier: Send + Sync {
    /// Probability of the positive class for `features`, in `[0, 1]`.
    fn predict_probability(&self, features: &[f64]) -> Result<f64>;
}
