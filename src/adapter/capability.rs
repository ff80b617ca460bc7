//! Capabilities a model must offer to be wrapped by a [`ModelAdapter`].
//!
//! [`ModelAdapter`]: super::ModelAdapter

use crate::training::FitOptions;

/// A model that can be trained in place and checkpointed.
///
/// Errors are the model's own; the adapter hands them back untouched.
pub trait TrainableModel {
    /// Feature input, e.g. a slice of sample rows.
    type Data: ?Sized;
    /// Discrete class label.
    type Label;
    /// Parameter snapshot produced by [`get_weights`](Self::get_weights).
    type Weights;
    type Error;

    /// Fits the model to `data` and `target`, mutating its parameters.
    fn train(
        &mut self,
        data: &Self::Data,
        target: &[Self::Label],
        options: &FitOptions,
    ) -> Result<(), Self::Error>;

    /// Returns a snapshot of the current parameters.
    fn get_weights(&self) -> Result<Self::Weights, Self::Error>;

    /// Restores a snapshot. Fails if `weights` does not fit the model's
    /// parameter layout.
    fn set_weights(&mut self, weights: Self::Weights) -> Result<(), Self::Error>;
}

/// A model with its own notion of discrete class prediction.
pub trait ClassifierModel: TrainableModel {
    fn predict_classes(&self, data: &Self::Data) -> Result<Vec<Self::Label>, Self::Error>;
}

/// A model producing one row of class scores per sample.
pub trait ProbabilisticModel: TrainableModel {
    fn predict_proba(&self, data: &Self::Data) -> Result<Vec<Vec<f32>>, Self::Error>;
}

impl<T: TrainableModel + ?Sized> TrainableModel for &mut T {
    type Data = T::Data;
    type Label = T::Label;
    type Weights = T::Weights;
    type Error = T::Error;

    fn train(
        &mut self,
        data: &Self::Data,
        target: &[Self::Label],
        options: &FitOptions,
    ) -> Result<(), Self::Error> {
        (**self).train(data, target, options)
    }

    fn get_weights(&self) -> Result<Self::Weights, Self::Error> {
        (**self).get_weights()
    }

    fn set_weights(&mut self, weights: Self::Weights) -> Result<(), Self::Error> {
        (**self).set_weights(weights)
    }
}

impl<T: ClassifierModel + ?Sized> ClassifierModel for &mut T {
    fn predict_classes(&self, data: &Self::Data) -> Result<Vec<Self::Label>, Self::Error> {
        (**self).predict_classes(data)
    }
}

impl<T: ProbabilisticModel + ?Sized> ProbabilisticModel for &mut T {
    fn predict_proba(&self, data: &Self::Data) -> Result<Vec<Vec<f32>>, Self::Error> {
        (**self).predict_proba(data)
    }
}
