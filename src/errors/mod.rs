//! Error types.

mod model_error;
mod score_error;

pub use model_error::ModelError;
pub use score_error::{MetricError, ScoreError};
