//! Model-related error types.

use thiserror::Error;

/// Errors that can occur while building, training or restoring a model.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Model has no layers defined")]
    NoLayers,

    #[error("Model has no input features defined")]
    NoInputBuffer,

    #[error("Training data is empty")]
    EmptyDataset,

    #[error("Sample count mismatch: {samples} samples but {labels} labels")]
    SampleCountMismatch { samples: usize, labels: usize },

    #[error("Shape mismatch in row {row}: expected {expected} features, got {actual}")]
    ShapeMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid label {label} in row {row} for a model with {classes} classes")]
    InvalidLabel {
        row: usize,
        label: usize,
        classes: usize,
    },

    #[error("Weight layout mismatch: expected {expected} arrays, got {actual}")]
    WeightLayout { expected: usize, actual: usize },

    #[error("Weight {index} has shape {actual:?}, expected {expected:?}")]
    WeightShapeMismatch {
        index: usize,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("Invalid weight {index}: {message}")]
    InvalidWeight { index: usize, message: String },

    #[error("Tensor data error: {0}")]
    TensorData(String),

    #[error("Training error: {message}")]
    TrainingError { message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ModelError {
    pub(crate) fn tensor_data(err: impl std::fmt::Debug) -> Self {
        ModelError::TensorData(format!("{:?}", err))
    }
}
