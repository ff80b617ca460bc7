//! Loss functions for training.

use burn::tensor::{Tensor, backend::Backend};
use serde::{Deserialize, Serialize};

const EPSILON: f32 = 1e-7;

/// Supported loss functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Loss {
    /// Mean Squared Error loss.
    Mse,
    /// Binary Cross Entropy loss over a single sigmoid output.
    BinaryCrossEntropy,
    /// Cross entropy over one-hot targets and a probability distribution.
    CategoricalCrossEntropy,
}

impl Loss {
    /// Computes the loss between predictions and targets.
    pub fn compute<B: Backend>(
        &self,
        predictions: Tensor<B, 2>,
        targets: Tensor<B, 2>,
    ) -> Tensor<B, 1> {
        match self {
            Loss::Mse => {
                let diff = predictions - targets;
                let squared = diff.clone() * diff;
                squared.mean()
            }
            Loss::BinaryCrossEntropy => {
                // BCE = -mean(y * log(p) + (1-y) * log(1-p))
                let ones = Tensor::ones_like(&predictions);
                let p_clipped = predictions.clamp(EPSILON, 1.0 - EPSILON);
                let log_p = p_clipped.clone().log();
                let log_1_minus_p = (ones.clone() - p_clipped).log();
                let bce = targets.clone() * log_p + (ones - targets) * log_1_minus_p;
                bce.neg().mean()
            }
            Loss::CategoricalCrossEntropy => {
                // CCE = -mean_over_rows(sum_k y_k * log(p_k))
                let log_p = predictions.clamp(EPSILON, 1.0).log();
                (targets * log_p).sum_dim(1).neg().mean()
            }
        }
    }

    /// Whether targets should be one-hot encoded for an output of `width` units.
    pub fn one_hot_targets(&self, width: usize) -> bool {
        match self {
            Loss::Mse => width > 1,
            Loss::BinaryCrossEntropy => false,
            Loss::CategoricalCrossEntropy => true,
        }
    }
}
