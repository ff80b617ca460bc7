//! # estimator-adapter
//!
//! Lets a neural-network classifier take part in code written against a
//! uniform fit/predict/score estimator contract.
//!
//! The centrepiece is [`ModelAdapter`]: it wraps any model implementing
//! [`TrainableModel`], forwards training and weight handling to it, and scores
//! predictions by accuracy. How class labels are derived from the model is an
//! injectable step ([`ClassPredictor`]).
//!
//! ## Features
//!
//! - **Explicit capabilities**: models opt in through [`TrainableModel`],
//!   [`ClassifierModel`] and [`ProbabilisticModel`].
//! - **Reference model**: [`CompiledModel`] is a burn-backed dense classifier
//!   implementing all three.
//! - **Opaque checkpoints**: `get_weights` / `set_weights` pass snapshots
//!   through untouched.
//!
//! ## Example
//!
//! ```
//! use estimator_adapter::prelude::*;
//! use burn::backend::{Autodiff, NdArray};
//!
//! type B = Autodiff<NdArray>;
//! let device = <B as burn::tensor::backend::Backend>::Device::default();
//!
//! let graph = ModelGraphConfig::with_feature_size(3)
//!     .dense(4, Activation::Relu)
//!     .dense(2, Activation::Softmax)
//!     .build::<B>(&device)
//!     .expect("Failed to build model");
//! let model = CompiledModel::new(graph, Loss::CategoricalCrossEntropy, &device);
//!
//! let mut adapter = ModelAdapter::new(model, 5, 2).shuffle(false);
//! let checkpoint = adapter.get_weights().unwrap();
//! adapter.set_weights(checkpoint).unwrap();
//! ```

pub mod adapter;
pub mod errors;
pub mod layers;
pub mod metrics;
pub mod model_graph;
pub mod training;
pub mod weights;

// Re-exports for convenience
pub use adapter::{
    AdapterConfig, ClassPredictor, ClassifierModel, Estimator, ModelAdapter, ProbabilisticModel,
    TrainableModel,
};
pub use errors::{MetricError, ModelError, ScoreError};
pub use layers::activation::Activation;
pub use model_graph::{CompiledModel, ModelGraph, ModelGraphConfig};
pub use training::{FitOptions, Loss, Verbosity};
pub use weights::{Weight, Weights};

/// Backend type alias for training with autodiff support.
#[cfg(not(feature = "wgpu"))]
pub type Backend = burn::backend::Autodiff<burn::backend::NdArray>;

/// Backend type alias for training with autodiff support.
#[cfg(feature = "wgpu")]
pub type Backend = burn::backend::Autodiff<burn::backend::Wgpu>;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::adapter::{
        AdapterConfig, ArgMax, ClassPredictor, ClassifierModel, Estimator, ModelAdapter,
        NativeClasses, ProbabilisticModel, Threshold, TrainableModel,
    };
    pub use crate::errors::{MetricError, ModelError, ScoreError};
    pub use crate::layers::activation::Activation;
    pub use crate::metrics::{accuracy_count, accuracy_score};
    pub use crate::model_graph::{CompiledModel, ModelGraph, ModelGraphConfig};
    pub use crate::training::{CompileOptions, FitOptions, Loss, Verbosity};
    pub use crate::weights::{Weight, Weights};
    pub use crate::Backend;
}
