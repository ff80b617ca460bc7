//! Parameter snapshots.
//!
//! A snapshot is an ordered list of numeric arrays whose structure is defined
//! entirely by the model that produced it. The adapter never looks inside.

use crate::errors::ModelError;
use serde::{Deserialize, Serialize};

/// A single parameter array, stored row-major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    shape: Vec<usize>,
    values: Vec<f32>,
}

/// Ordered parameter snapshot of a model.
pub type Weights = Vec<Weight>;

impl Weight {
    /// Creates a weight array. No check is made that `values` fills `shape`;
    /// the model receiving the array decides what is acceptable.
    pub fn new(shape: Vec<usize>, values: Vec<f32>) -> Self {
        Self { shape, values }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of values implied by the shape.
    pub fn shape_len(&self) -> usize {
        self.shape.iter().product()
    }

    pub fn into_values(self) -> Vec<f32> {
        self.values
    }
}

/// Serializes a snapshot to JSON.
pub fn to_json(weights: &[Weight]) -> Result<String, ModelError> {
    Ok(serde_json::to_string(weights)?)
}

/// Parses a snapshot previously produced by [`to_json`].
pub fn from_json(json: &str) -> Result<Weights, ModelError> {
    Ok(serde_json::from_str(json)?)
}
