//! Injectable class prediction.
//!
//! Turning a model's output into discrete labels is a separate, swappable
//! step. The adapter calls whatever [`ClassPredictor`] it was built with;
//! closures of the form `Fn(&M, &M::Data) -> Result<Vec<M::Label>, M::Error>`
//! qualify as well.

use super::capability::{ClassifierModel, ProbabilisticModel, TrainableModel};

/// Produces class labels for `data` using `model`.
pub trait ClassPredictor<M: TrainableModel + ?Sized> {
    fn predict_classes(&self, model: &M, data: &M::Data) -> Result<Vec<M::Label>, M::Error>;
}

impl<M, F> ClassPredictor<M> for F
where
    M: TrainableModel + ?Sized,
    F: Fn(&M, &M::Data) -> Result<Vec<M::Label>, M::Error>,
{
    fn predict_classes(&self, model: &M, data: &M::Data) -> Result<Vec<M::Label>, M::Error> {
        self(model, data)
    }
}

/// Delegates to the model's own [`ClassifierModel::predict_classes`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NativeClasses;

impl<M: ClassifierModel + ?Sized> ClassPredictor<M> for NativeClasses {
    fn predict_classes(&self, model: &M, data: &M::Data) -> Result<Vec<M::Label>, M::Error> {
        model.predict_classes(data)
    }
}

/// Binary decision on a single score column: class `1` above the cutoff,
/// `0` otherwise. Rows with several columns are decoded by argmax.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold(pub f32);

impl Default for Threshold {
    fn default() -> Self {
        Threshold(0.5)
    }
}

impl<M: ProbabilisticModel<Label = usize> + ?Sized> ClassPredictor<M> for Threshold {
    fn predict_classes(&self, model: &M, data: &M::Data) -> Result<Vec<usize>, M::Error> {
        let scores = model.predict_proba(data)?;
        Ok(threshold_rows(&scores, self.0))
    }
}

/// Index of the highest score per row.
///
/// Single-column output is treated as a sigmoid probability and thresholded
/// at 0.5.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArgMax;

impl<M: ProbabilisticModel<Label = usize> + ?Sized> ClassPredictor<M> for ArgMax {
    fn predict_classes(&self, model: &M, data: &M::Data) -> Result<Vec<usize>, M::Error> {
        let scores = model.predict_proba(data)?;
        Ok(argmax_rows(&scores))
    }
}

fn argmax(row: &[f32]) -> usize {
    let mut best = 0;
    for (index, score) in row.iter().enumerate().skip(1) {
        // Strict comparison keeps the first index on ties.
        if *score > row[best] {
            best = index;
        }
    }
    best
}

/// Decodes score rows by argmax; ties resolve to the lowest index and
/// single-column rows are thresholded at 0.5.
pub fn argmax_rows(scores: &[Vec<f32>]) -> Vec<usize> {
    threshold_rows(scores, 0.5)
}

/// Decodes single-column score rows against `threshold`.
pub fn threshold_rows(scores: &[Vec<f32>], threshold: f32) -> Vec<usize> {
    scores
        .iter()
        .map(|row| match row.len() {
            1 => usize::from(row[0] > threshold),
            _ => argmax(row),
        })
        .collect()
}
