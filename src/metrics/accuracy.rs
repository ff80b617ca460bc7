//! Accuracy: the fraction of predictions that exactly match the labels.

use crate::errors::MetricError;

fn check_lengths<L>(y_true: &[L], y_pred: &[L]) -> Result<(), MetricError> {
    if y_true.len() != y_pred.len() {
        return Err(MetricError::LengthMismatch {
            expected: y_true.len(),
            actual: y_pred.len(),
        });
    }
    if y_true.is_empty() {
        return Err(MetricError::Empty);
    }
    Ok(())
}

/// Returns the number of positions where `y_pred` equals `y_true`.
pub fn accuracy_count<L: PartialEq>(y_true: &[L], y_pred: &[L]) -> Result<usize, MetricError> {
    check_lengths(y_true, y_pred)?;
    Ok(y_true
        .iter()
        .zip(y_pred)
        .filter(|(truth, pred)| truth == pred)
        .count())
}

/// Returns the fraction of predictions equal to the corresponding label.
///
/// The result lies in `[0, 1]`. Both slices must be non-empty and of equal
/// length.
pub fn accuracy_score<L: PartialEq>(y_true: &[L], y_pred: &[L]) -> Result<f64, MetricError> {
    let correct = accuracy_count(y_true, y_pred)?;
    Ok(correct as f64 / y_true.len() as f64)
}
