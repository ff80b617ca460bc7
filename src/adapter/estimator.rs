//! The uniform estimator contract.

use super::capability::TrainableModel;
use super::model_adapter::ModelAdapter;
use super::predictor::ClassPredictor;
use crate::errors::ScoreError;

/// Something that can be fitted, asked for predictions and scored.
///
/// Pipeline code written against this trait treats every implementor the
/// same way, whatever model sits underneath.
pub trait Estimator {
    type Data: ?Sized;
    type Label;
    type Error;

    /// Fits the estimator, returning it for chaining.
    fn fit(&mut self, data: &Self::Data, target: &[Self::Label]) -> Result<&mut Self, Self::Error>;

    fn predict(&self, data: &Self::Data) -> Result<Vec<Self::Label>, Self::Error>;

    /// Scores predictions on `data` against `target`; higher is better.
    fn score(
        &self,
        data: &Self::Data,
        target: &[Self::Label],
    ) -> Result<f64, ScoreError<Self::Error>>;
}

impl<M, P> Estimator for ModelAdapter<M, P>
where
    M: TrainableModel,
    M::Label: PartialEq,
    P: ClassPredictor<M>,
{
    type Data = M::Data;
    type Label = M::Label;
    type Error = M::Error;

    fn fit(&mut self, data: &Self::Data, target: &[Self::Label]) -> Result<&mut Self, Self::Error> {
        ModelAdapter::fit(self, data, target)
    }

    fn predict(&self, data: &Self::Data) -> Result<Vec<Self::Label>, Self::Error> {
        ModelAdapter::predict(self, data)
    }

    fn score(
        &self,
        data: &Self::Data,
        target: &[Self::Label],
    ) -> Result<f64, ScoreError<Self::Error>> {
        ModelAdapter::score(self, data, target)
    }
}
