//! Fit/predict/score wrapper around a trainable model.

use super::capability::TrainableModel;
use super::config::AdapterConfig;
use super::predictor::{ClassPredictor, NativeClasses};
use crate::errors::ScoreError;
use crate::metrics::accuracy_score;
use crate::training::{FitOptions, Verbosity};

/// Exposes a [`TrainableModel`] through the fit/predict/score contract.
///
/// The adapter holds the model plus the epoch count, batch size and shuffle
/// flag used on every `fit`. Positive epochs and batch size are expected but
/// not checked; see [`AdapterConfig::validate`].
///
/// `M` may be a borrowed `&mut` model, in which case the caller keeps
/// ownership and the adapter only lives for the duration of its calls.
#[derive(Debug, Clone)]
pub struct ModelAdapter<M, P = NativeClasses> {
    model: M,
    epochs: usize,
    batch_size: usize,
    shuffle: bool,
    predictor: P,
}

impl<M: TrainableModel> ModelAdapter<M> {
    /// Wraps `model`. Shuffling is on by default.
    pub fn new(model: M, epochs: usize, batch_size: usize) -> Self {
        Self {
            model,
            epochs,
            batch_size,
            shuffle: true,
            predictor: NativeClasses,
        }
    }

    pub fn from_config(model: M, config: &AdapterConfig) -> Self {
        Self::new(model, config.epochs, config.batch_size).shuffle(config.shuffle)
    }
}

impl<M: TrainableModel, P> ModelAdapter<M, P> {
    /// Sets whether training data is shuffled each epoch.
    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Replaces the class-prediction step used by `predict` and `score`.
    pub fn with_predictor<Q: ClassPredictor<M>>(self, predictor: Q) -> ModelAdapter<M, Q> {
        ModelAdapter {
            model: self.model,
            epochs: self.epochs,
            batch_size: self.batch_size,
            shuffle: self.shuffle,
            predictor,
        }
    }

    pub fn epochs(&self) -> usize {
        self.epochs
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn shuffles(&self) -> bool {
        self.shuffle
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    pub fn predictor(&self) -> &P {
        &self.predictor
    }

    /// Releases the wrapped model.
    pub fn into_inner(self) -> M {
        self.model
    }

    /// Options passed to the model on `fit`. Per-epoch reporting is always
    /// requested.
    pub fn fit_options(&self) -> FitOptions {
        FitOptions::new()
            .epochs(self.epochs)
            .batch_size(self.batch_size)
            .shuffle(self.shuffle)
            .verbosity(Verbosity::PerEpoch)
    }

    /// Trains the wrapped model once on `data` and `target`.
    ///
    /// Returns the adapter so calls can be chained. Training errors are
    /// returned exactly as the model reported them.
    pub fn fit(&mut self, data: &M::Data, target: &[M::Label]) -> Result<&mut Self, M::Error> {
        let options = self.fit_options();
        log::debug!(
            "Fitting wrapped model: epochs={}, batch_size={}, shuffle={}",
            options.epochs,
            options.batch_size,
            options.shuffle
        );
        self.model.train(data, target, &options)?;
        Ok(self)
    }

    /// Returns the wrapped model's current parameters.
    pub fn get_weights(&self) -> Result<M::Weights, M::Error> {
        self.model.get_weights()
    }

    /// Loads `weights` into the wrapped model without inspecting them.
    pub fn set_weights(&mut self, weights: M::Weights) -> Result<(), M::Error> {
        log::debug!("Restoring wrapped model weights");
        self.model.set_weights(weights)
    }
}

impl<M: TrainableModel, P: ClassPredictor<M>> ModelAdapter<M, P> {
    /// Predicts class labels for `data`.
    pub fn predict(&self, data: &M::Data) -> Result<Vec<M::Label>, M::Error> {
        self.predictor.predict_classes(&self.model, data)
    }

    /// Mean accuracy of the predicted classes against `target`.
    pub fn score(&self, data: &M::Data, target: &[M::Label]) -> Result<f64, ScoreError<M::Error>>
    where
        M::Label: PartialEq,
    {
        let predictions = self.predict(data).map_err(ScoreError::Model)?;
        let accuracy = accuracy_score(target, &predictions)?;
        log::debug!(
            "Scored {} samples: accuracy = {:.4}",
            target.len(),
            accuracy
        );
        Ok(accuracy)
    }
}
