//! Training utilities for the reference classifier.
//!
//! This module provides:
//! - Fit options passed from an estimator to a model's training routine
//! - Loss functions (MSE, Binary and Categorical Cross Entropy)
//! - A mini-batch training loop with Adam and per-epoch shuffling

mod config;
mod loss;
mod trainer;

pub use config::{CompileOptions, FitOptions, Verbosity};
pub use loss::Loss;
pub use trainer::{TrainingResult, train};
