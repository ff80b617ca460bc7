//! The estimator adapter.
//!
//! [`ModelAdapter`] lets any model implementing [`TrainableModel`] take part
//! in code written against the uniform [`Estimator`] contract. Training,
//! prediction and weight handling are forwarded to the wrapped model; the
//! adapter itself only marshals arguments and computes accuracy.
//!
//! # Example
//!
//! ```
//! use estimator_adapter::prelude::*;
//! use burn::backend::{Autodiff, NdArray};
//!
//! type B = Autodiff<NdArray>;
//! let device = <B as burn::tensor::backend::Backend>::Device::default();
//!
//! let graph = ModelGraphConfig::with_feature_size(2)
//!     .dense(4, Activation::Relu)
//!     .dense(1, Activation::Sigmoid)
//!     .build::<B>(&device)
//!     .expect("Failed to build model");
//! let model = CompiledModel::new(graph, Loss::BinaryCrossEntropy, &device).seed(3);
//!
//! let data = vec![vec![0.0, 0.0], vec![1.0, 1.0]];
//! let target = vec![0usize, 1];
//!
//! let mut adapter = ModelAdapter::new(model, 2, 2);
//! let accuracy = adapter.fit(&data, &target).unwrap().score(&data, &target).unwrap();
//! assert!((0.0..=1.0).contains(&accuracy));
//! ```

mod capability;
mod config;
mod estimator;
mod model_adapter;
mod predictor;

pub use capability::{ClassifierModel, ProbabilisticModel, TrainableModel};
pub use config::AdapterConfig;
pub use estimator::Estimator;
pub use model_adapter::ModelAdapter;
pub use predictor::{ArgMax, ClassPredictor, NativeClasses, Threshold, argmax_rows, threshold_rows};
