//! Errors surfaced while scoring predictions.

use thiserror::Error;

/// Errors raised by the metric functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricError {
    #[error("Found inconsistent numbers of samples: {expected} labels, {actual} predictions")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Cannot compute a metric over zero samples")]
    Empty,
}

/// Failure of [`score`](crate::adapter::ModelAdapter::score).
///
/// Scoring is the only adapter call with two failure sources: the wrapped
/// model (while predicting classes) and the accuracy metric.
#[derive(Debug, Error)]
pub enum ScoreError<E> {
    #[error("Prediction failed: {0}")]
    Model(#[source] E),

    #[error(transparent)]
    Metric(#[from] MetricError),
}

impl<E> ScoreError<E> {
    /// Returns the wrapped model error, if the failure came from the model.
    pub fn model_error(&self) -> Option<&E> {
        match self {
            ScoreError::Model(err) => Some(err),
            ScoreError::Metric(_) => None,
        }
    }
}
