//! Options handed to a model's training routine.

use super::Loss;
use serde::{Deserialize, Serialize};

/// How much progress a training routine should report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verbosity {
    /// No output.
    Silent,
    /// Per-batch progress.
    Progress,
    /// One line per epoch.
    #[default]
    PerEpoch,
}

impl Verbosity {
    /// Maps the conventional `0 / 1 / 2` verbose levels.
    pub fn from_level(level: u8) -> Self {
        match level {
            0 => Verbosity::Silent,
            1 => Verbosity::Progress,
            _ => Verbosity::PerEpoch,
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            Verbosity::Silent => 0,
            Verbosity::Progress => 1,
            Verbosity::PerEpoch => 2,
        }
    }
}

/// Configuration for a single call to a model's training routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitOptions {
    /// Number of training epochs.
    pub epochs: usize,
    /// Batch size for training.
    pub batch_size: usize,
    /// Whether to reshuffle the samples before each epoch.
    pub shuffle: bool,
    /// Progress reporting level.
    pub verbosity: Verbosity,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            epochs: 1,
            batch_size: 32,
            shuffle: true,
            verbosity: Verbosity::PerEpoch,
        }
    }
}

impl FitOptions {
    /// Creates new FitOptions with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of epochs.
    pub fn epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    /// Sets the batch size.
    pub fn batch_size(mut self, size: usize) -> Self {
        self.batch_size = size;
        self
    }

    /// Sets whether samples are shuffled each epoch.
    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Sets the progress reporting level.
    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }
}

/// Settings fixed when a model is compiled: the objective and the optimizer
/// step size. They do not change between calls to `train`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompileOptions {
    /// Loss function to minimize.
    pub loss: Loss,
    /// Learning rate for the Adam optimizer.
    pub learning_rate: f64,
    /// Seed for the shuffling RNG. `None` draws from the OS.
    pub seed: Option<u64>,
}

impl CompileOptions {
    pub fn new(loss: Loss) -> Self {
        Self {
            loss,
            learning_rate: 0.001,
            seed: None,
        }
    }
}
