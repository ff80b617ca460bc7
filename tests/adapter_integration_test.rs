//! Integration tests for the estimator adapter, against a recording stub model
//! and against the burn-backed reference classifier.

use std::cell::RefCell;

use burn::backend::{Autodiff, NdArray};
use burn::tensor::backend::Backend;
use estimator_adapter::adapter::{ArgMax, Threshold};
use estimator_adapter::prelude::*;
use thiserror::Error;

type TrainingBackend = Autodiff<NdArray>;

#[derive(Debug, Error, PartialEq)]
enum StubError {
    #[error("expected {expected} weight arrays, got {actual}")]
    Layout { expected: usize, actual: usize },
    #[error("training failed")]
    Training,
}

#[derive(Debug, Clone, PartialEq)]
struct TrainCall {
    rows: usize,
    labels: Vec<u8>,
    options: FitOptions,
}

/// Records every call and answers predictions from a fixed table.
#[derive(Debug, Default)]
struct StubModel {
    train_calls: Vec<TrainCall>,
    predict_calls: RefCell<usize>,
    predictions: Vec<u8>,
    weights: Vec<Vec<f32>>,
    fail_training: bool,
}

impl StubModel {
    fn predicting(predictions: Vec<u8>) -> Self {
        Self {
            predictions,
            weights: vec![vec![0.5, -0.5], vec![1.5]],
            ..Self::default()
        }
    }
}

impl TrainableModel for StubModel {
    type Data = [Vec<f32>];
    type Label = u8;
    type Weights = Vec<Vec<f32>>;
    type Error = StubError;

    fn train(
        &mut self,
        data: &[Vec<f32>],
        target: &[u8],
        options: &FitOptions,
    ) -> Result<(), StubError> {
        if self.fail_training {
            return Err(StubError::Training);
        }
        self.train_calls.push(TrainCall {
            rows: data.len(),
            labels: target.to_vec(),
            options: *options,
        });
        Ok(())
    }

    fn get_weights(&self) -> Result<Vec<Vec<f32>>, StubError> {
        Ok(self.weights.clone())
    }

    fn set_weights(&mut self, weights: Vec<Vec<f32>>) -> Result<(), StubError> {
        if weights.len() != self.weights.len() {
            return Err(StubError::Layout {
                expected: self.weights.len(),
                actual: weights.len(),
            });
        }
        self.weights = weights;
        Ok(())
    }
}

impl ClassifierModel for StubModel {
    fn predict_classes(&self, _data: &[Vec<f32>]) -> Result<Vec<u8>, StubError> {
        *self.predict_calls.borrow_mut() += 1;
        Ok(self.predictions.clone())
    }
}

fn rows(n: usize) -> Vec<Vec<f32>> {
    (0..n).map(|i| vec![i as f32, 1.0]).collect()
}

#[test]
fn test_fit_forwards_configuration_once() {
    let mut adapter = ModelAdapter::new(StubModel::predicting(vec![]), 12, 4).shuffle(false);

    let returned: *const _ = adapter.fit(&rows(3), &[0, 1, 0]).unwrap();

    assert!(std::ptr::eq(returned, &adapter));
    let calls = &adapter.model().train_calls;
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0],
        TrainCall {
            rows: 3,
            labels: vec![0, 1, 0],
            options: FitOptions {
                epochs: 12,
                batch_size: 4,
                shuffle: false,
                verbosity: Verbosity::PerEpoch,
            },
        }
    );
}

#[test]
fn test_fit_shuffles_by_default_and_chains() {
    let mut adapter = ModelAdapter::new(StubModel::predicting(vec![1, 1]), 1, 8);

    let accuracy = adapter
        .fit(&rows(2), &[1, 0])
        .unwrap()
        .score(&rows(2), &[1, 0])
        .unwrap();

    assert!(adapter.model().train_calls[0].options.shuffle);
    assert!((accuracy - 0.5).abs() < 1e-12);
}

#[test]
fn test_fit_propagates_training_error() {
    let mut model = StubModel::predicting(vec![]);
    model.fail_training = true;
    let mut adapter = ModelAdapter::new(model, 1, 1);

    let result = adapter.fit(&rows(1), &[0]);

    assert_eq!(result.err(), Some(StubError::Training));
}

#[test]
fn test_predict_returns_model_output_unchanged() {
    let adapter = ModelAdapter::new(StubModel::predicting(vec![3, 1, 4, 1, 5]), 1, 1);

    assert_eq!(adapter.predict(&rows(5)).unwrap(), vec![3, 1, 4, 1, 5]);
    assert_eq!(*adapter.model().predict_calls.borrow(), 1);
}

#[test]
fn test_score_perfect_and_zero() {
    let target = [0u8, 1, 2, 1];

    let perfect = ModelAdapter::new(StubModel::predicting(target.to_vec()), 1, 1);
    assert_eq!(perfect.score(&rows(4), &target).unwrap(), 1.0);

    let wrong = ModelAdapter::new(StubModel::predicting(vec![1, 0, 0, 2]), 1, 1);
    assert_eq!(wrong.score(&rows(4), &target).unwrap(), 0.0);
}

#[test]
fn test_score_seven_of_ten() {
    let target = [0u8, 1, 0, 1, 0, 1, 0, 1, 0, 1];
    let predictions = vec![0u8, 1, 0, 1, 0, 1, 0, 0, 1, 0];
    let adapter = ModelAdapter::new(StubModel::predicting(predictions), 1, 1);

    let accuracy = adapter.score(&rows(10), &target).unwrap();

    assert!((accuracy - 0.7).abs() < 1e-12);
}

#[test]
fn test_score_reports_metric_errors() {
    let adapter = ModelAdapter::new(StubModel::predicting(vec![0, 1, 1]), 1, 1);

    let result = adapter.score(&rows(3), &[0, 1]);

    assert!(matches!(
        result,
        Err(ScoreError::Metric(MetricError::LengthMismatch {
            expected: 2,
            actual: 3
        }))
    ));
}

#[test]
fn test_weights_roundtrip_is_idempotent() {
    let mut adapter = ModelAdapter::new(StubModel::predicting(vec![]), 1, 1);
    let before = adapter.get_weights().unwrap();

    adapter.set_weights(before.clone()).unwrap();

    assert_eq!(adapter.get_weights().unwrap(), before);
}

#[test]
fn test_set_weights_propagates_layout_error() {
    let mut adapter = ModelAdapter::new(StubModel::predicting(vec![]), 1, 1);
    let before = adapter.get_weights().unwrap();

    let result = adapter.set_weights(vec![vec![0.0]]);

    assert_eq!(
        result,
        Err(StubError::Layout {
            expected: 2,
            actual: 1
        })
    );
    assert_eq!(adapter.get_weights().unwrap(), before);
}

#[test]
fn test_injected_predictor_replaces_native_classes() {
    let adapter = ModelAdapter::new(StubModel::predicting(vec![0, 0]), 1, 1).with_predictor(
        |_: &StubModel, data: &[Vec<f32>]| -> Result<Vec<u8>, StubError> {
            Ok(data.iter().map(|row| row[0] as u8).collect())
        },
    );

    assert_eq!(adapter.predict(&rows(3)).unwrap(), vec![0, 1, 2]);
    assert_eq!(adapter.score(&rows(3), &[0, 1, 1]).unwrap(), 2.0 / 3.0);
    assert_eq!(*adapter.model().predict_calls.borrow(), 0);
}

#[test]
fn test_adapter_over_borrowed_model() {
    let mut model = StubModel::predicting(vec![1]);
    {
        let mut adapter = ModelAdapter::new(&mut model, 2, 2);
        adapter.fit(&rows(1), &[1]).unwrap();
        assert_eq!(adapter.score(&rows(1), &[1]).unwrap(), 1.0);
    }
    assert_eq!(model.train_calls.len(), 1);
}

#[test]
fn test_from_config() {
    let config = AdapterConfig::from_json(r#"{"epochs": 3, "batch_size": 5, "shuffle": false}"#)
        .expect("config should parse");
    let adapter = ModelAdapter::from_config(StubModel::default(), &config);

    assert_eq!(adapter.epochs(), 3);
    assert_eq!(adapter.batch_size(), 5);
    assert!(!adapter.shuffles());
}

fn evaluate<E: Estimator>(
    estimator: &mut E,
    data: &E::Data,
    target: &[E::Label],
) -> Result<f64, ScoreError<E::Error>> {
    estimator.fit(data, target).map_err(ScoreError::Model)?;
    estimator.score(data, target)
}

#[test]
fn test_adapter_through_estimator_trait() {
    let mut adapter = ModelAdapter::new(StubModel::predicting(vec![1, 0]), 2, 1);

    let data = rows(2);

    let accuracy = evaluate(&mut adapter, data.as_slice(), &[1u8, 1]).unwrap();

    assert!((accuracy - 0.5).abs() < 1e-12);
    assert_eq!(adapter.model().train_calls.len(), 1);
}

fn binary_classifier(seed: u64) -> CompiledModel<TrainingBackend> {
    let device = <TrainingBackend as Backend>::Device::default();
    let graph = ModelGraphConfig::with_feature_size(2)
        .dense(8, Activation::Relu)
        .dense(1, Activation::Sigmoid)
        .build::<TrainingBackend>(&device)
        .expect("Model build should succeed");
    CompiledModel::new(graph, Loss::BinaryCrossEntropy, &device)
        .learning_rate(0.05)
        .seed(seed)
}

fn separable_data() -> (Vec<Vec<f32>>, Vec<usize>) {
    let data = vec![
        vec![0.0, 0.1],
        vec![0.1, 0.0],
        vec![0.2, 0.1],
        vec![0.1, 0.2],
        vec![0.9, 1.0],
        vec![1.0, 0.9],
        vec![0.8, 0.9],
        vec![0.9, 0.8],
    ];
    let target = vec![0, 0, 0, 0, 1, 1, 1, 1];
    (data, target)
}

#[test]
fn test_burn_model_fit_and_score() {
    let (data, target) = separable_data();
    let mut adapter = ModelAdapter::new(binary_classifier(5), 40, 4);

    let accuracy = adapter
        .fit(&data, &target)
        .expect("training should succeed")
        .score(&data, &target)
        .expect("scoring should succeed");

    assert!((0.0..=1.0).contains(&accuracy));
    let history = adapter.model().last_history();
    assert_eq!(history.len(), 40);
    assert!(history.iter().all(|loss| loss.is_finite()));

    let predictions = adapter.predict(&data).unwrap();
    assert_eq!(predictions.len(), data.len());
    assert!(predictions.iter().all(|&label| label <= 1));
}

#[test]
fn test_burn_model_predictors_agree_on_binary_output() {
    let (data, _) = separable_data();
    let adapter = ModelAdapter::new(binary_classifier(9), 1, 1);

    let native = adapter.predict(&data).unwrap();
    let threshold = ModelAdapter::new(adapter.into_inner(), 1, 1)
        .with_predictor(Threshold::default())
        .predict(&data)
        .unwrap();

    assert_eq!(native, threshold);
}

#[test]
fn test_burn_model_checkpoint_restore() {
    let (data, target) = separable_data();
    let mut adapter = ModelAdapter::new(binary_classifier(2), 5, 2).with_predictor(ArgMax);

    let checkpoint = adapter.get_weights().unwrap();
    let before = adapter.model().predict_proba(&data).unwrap();

    adapter.fit(&data, &target).unwrap();
    assert_ne!(adapter.get_weights().unwrap(), checkpoint);

    adapter.set_weights(checkpoint.clone()).unwrap();
    assert_eq!(adapter.get_weights().unwrap(), checkpoint);

    let after = adapter.model().predict_proba(&data).unwrap();
    for (a, b) in before.iter().flatten().zip(after.iter().flatten()) {
        assert!((a - b).abs() < 1e-6);
    }
}

#[test]
fn test_burn_model_rejects_incompatible_weights() {
    let mut adapter = ModelAdapter::new(binary_classifier(4), 1, 1);
    let mut weights = adapter.get_weights().unwrap();
    weights.push(Weight::new(vec![1], vec![0.0]));

    let result = adapter.set_weights(weights);

    assert!(matches!(
        result,
        Err(ModelError::WeightLayout {
            expected: 4,
            actual: 5
        })
    ));
}

#[test]
fn test_burn_model_training_error_passes_through() {
    let mut adapter = ModelAdapter::new(binary_classifier(1), 1, 1);

    let result = adapter.fit(&[vec![0.0, 1.0, 2.0]], &[1]);

    assert!(matches!(
        result,
        Err(ModelError::ShapeMismatch {
            row: 0,
            expected: 2,
            actual: 3
        })
    ));
}

#[test]
fn test_weights_survive_json() {
    let adapter = ModelAdapter::new(binary_classifier(6), 1, 1);
    let weights = adapter.get_weights().unwrap();

    let json = estimator_adapter::weights::to_json(&weights).unwrap();
    let restored = estimator_adapter::weights::from_json(&json).unwrap();

    assert_eq!(restored, weights);
}
