//! Serializable adapter configuration.

use crate::errors::ModelError;
use serde::{Deserialize, Serialize};

fn default_shuffle() -> bool {
    true
}

/// Training scalars of a [`ModelAdapter`](super::ModelAdapter).
///
/// ```
/// use estimator_adapter::adapter::AdapterConfig;
///
/// let config = AdapterConfig::from_json(r#"{"epochs": 10, "batch_size": 16}"#).unwrap();
/// assert!(config.shuffle);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterConfig {
    pub epochs: usize,
    pub batch_size: usize,
    #[serde(default = "default_shuffle")]
    pub shuffle: bool,
}

impl AdapterConfig {
    pub fn new(epochs: usize, batch_size: usize) -> Self {
        Self {
            epochs,
            batch_size,
            shuffle: true,
        }
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Checks that epochs and batch size are positive.
    ///
    /// The adapter never calls this itself.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.epochs == 0 {
            return Err(ModelError::InvalidConfig {
                message: "epochs must be positive".to_string(),
            });
        }
        if self.batch_size == 0 {
            return Err(ModelError::InvalidConfig {
                message: "batch_size must be positive".to_string(),
            });
        }
        Ok(())
    }
}
