//! Evaluation metrics
//!
//! Reported by the trainer over the held-out partition. Diagnostic only,
//! never gating.

/// Fraction of predictions matching the labels.
///
/// Returns 0.0 for empty input.
pub fn accuracy(labels: &[u8], predicted: &[u8]) -> f64 {
    if labels.is_empty() || labels.len() != predicted.len() {
        return 0.0;
    }
    let correct = labels
        .iter()
        .zip(predicted)
        .filter(|(l, p)| l == p)
        .count();
    correct as f64 / labels.len() as f64
}

/// Area under the ROC curve, computed over positive/negative score pairs.
///
/// Each (positive, negative) pair contributes 1 if the positive record is
/// scored higher, 0.5 on ties. A slice containing a single class has no
/// pairs to rank and scores 0.5.
pub fn roc_auc(labels: &[u8], scores: &[f64]) -> f64 {
    debug_assert_eq!(labels.len(), scores.len());

    let mut wins = 0.0;
    let mut pairs = 0u64;

    for (i, &li) in labels.iter().enumerate() {
        if li != 1 {
            continue;
        }
        for (j, &lj) in labels.iter().enumerate() {
            if lj != 0 {
                continue;
            }
            pairs += 1;
            if scores[i] > scores[j] {
                wins += 1.0;
            } else if scores[i] == scores[j] {
                wins += 0.5;
            }
        }
    }

    if pairs == 0 {
        return 0.5;
    }
    wins / pairs as f64
}
