//! ModelGraph and CompiledModel - the reference classifier.
//!
//! `ModelGraph` is a sequential stack of dense layers. `CompiledModel` pairs a
//! graph with its loss, learning rate and device, and implements the
//! capability traits so it can be wrapped by a
//! [`ModelAdapter`](crate::adapter::ModelAdapter).

use crate::adapter::{ClassifierModel, ProbabilisticModel, TrainableModel, argmax_rows};
use crate::errors::ModelError;
use crate::layers::{Activation, Dense, DenseConfig};
use crate::training::{self, CompileOptions, FitOptions, Loss};
use crate::weights::Weights;
use burn::{
    module::Module,
    tensor::{
        Tensor,
        backend::{AutodiffBackend, Backend},
    },
};
use rand::{SeedableRng, rngs::StdRng};

/// Configuration for building a ModelGraph.
#[derive(Debug, Clone)]
pub struct ModelGraphConfig {
    /// Number of input features.
    pub feature_size: usize,
    /// Layer configurations.
    pub layer_configs: Vec<DenseConfig>,
}

impl ModelGraphConfig {
    /// Creates a ModelGraphConfig for inputs of `size` features.
    pub fn with_feature_size(size: usize) -> Self {
        Self {
            feature_size: size,
            layer_configs: Vec::new(),
        }
    }

    /// Adds a dense layer to the configuration.
    pub fn dense(mut self, output_size: usize, activation: Activation) -> Self {
        let input_size = self
            .layer_configs
            .last()
            .map(|config| config.output_size)
            .unwrap_or(self.feature_size);

        self.layer_configs
            .push(DenseConfig::new(input_size, output_size).with_activation(activation));
        self
    }

    /// Builds the ModelGraph with the given device.
    pub fn build<B: Backend>(&self, device: &B::Device) -> Result<ModelGraph<B>, ModelError> {
        if self.feature_size == 0 {
            return Err(ModelError::NoInputBuffer);
        }

        if self.layer_configs.is_empty() {
            return Err(ModelError::NoLayers);
        }

        if let Some(index) = self.layer_configs.iter().position(|c| c.output_size == 0) {
            return Err(ModelError::InvalidConfig {
                message: format!("layer {index} has no output units"),
            });
        }

        let layers: Vec<Dense<B>> = self
            .layer_configs
            .iter()
            .map(|config| config.init(device))
            .collect();

        Ok(ModelGraph {
            feature_size: self.feature_size,
            layers,
        })
    }
}

/// A sequential stack of dense layers.
#[derive(Module, Debug)]
pub struct ModelGraph<B: Backend> {
    /// Number of input features (stored as constant).
    feature_size: usize,
    /// The dense layers in sequence.
    layers: Vec<Dense<B>>,
}

impl<B: Backend> ModelGraph<B> {
    /// Performs a forward pass through all layers.
    pub fn forward(&self, input: Tensor<B, 2>) -> Tensor<B, 2> {
        let mut x = input;
        for layer in &self.layers {
            x = layer.forward(x);
        }
        x
    }

    /// Returns the number of input features.
    pub fn feature_size(&self) -> usize {
        self.feature_size
    }

    /// Returns the output size of the model.
    pub fn output_size(&self) -> usize {
        self.layers.last().map(|l| l.output_size()).unwrap_or(0)
    }

    /// Returns the number of layers.
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// Shapes of every parameter array, in snapshot order.
    pub fn parameter_shapes(&self) -> Vec<Vec<usize>> {
        self.layers
            .iter()
            .flat_map(|layer| layer.parameter_shapes())
            .collect()
    }

    /// Snapshot of all parameters: per layer, kernel then bias.
    pub fn weights(&self) -> Result<Weights, ModelError> {
        let mut weights = Vec::new();
        for layer in &self.layers {
            weights.extend(layer.weights()?);
        }
        Ok(weights)
    }

    /// Loads a snapshot produced by [`ModelGraph::weights`].
    ///
    /// The whole snapshot is checked before any layer is touched, so a failed
    /// load leaves the graph unchanged.
    pub fn load_weights(&mut self, weights: Weights) -> Result<(), ModelError> {
        let shapes = self.parameter_shapes();
        if weights.len() != shapes.len() {
            return Err(ModelError::WeightLayout {
                expected: shapes.len(),
                actual: weights.len(),
            });
        }

        for (index, (weight, shape)) in weights.iter().zip(&shapes).enumerate() {
            if weight.shape() != shape.as_slice() {
                return Err(ModelError::WeightShapeMismatch {
                    index,
                    expected: shape.clone(),
                    actual: weight.shape().to_vec(),
                });
            }
            if weight.len() != weight.shape_len() {
                return Err(ModelError::InvalidWeight {
                    index,
                    message: format!(
                        "{} values do not fill shape {:?}",
                        weight.len(),
                        weight.shape()
                    ),
                });
            }
        }

        let mut arrays = weights.into_iter();
        for layer in &mut self.layers {
            let Some(kernel) = arrays.next() else {
                break;
            };
            let bias = if layer.has_bias() { arrays.next() } else { None };
            layer.load_weights(kernel, bias);
        }
        Ok(())
    }
}

/// A graph ready for training: loss, optimizer settings and device attached.
#[derive(Debug)]
pub struct CompiledModel<B: AutodiffBackend> {
    graph: ModelGraph<B>,
    options: CompileOptions,
    device: B::Device,
    rng: StdRng,
    history: Vec<f32>,
}

impl<B: AutodiffBackend> CompiledModel<B> {
    /// Compiles `graph` with `loss` and the default learning rate.
    pub fn new(graph: ModelGraph<B>, loss: Loss, device: &B::Device) -> Self {
        Self::with_options(graph, CompileOptions::new(loss), device)
    }

    pub fn with_options(graph: ModelGraph<B>, options: CompileOptions, device: &B::Device) -> Self {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            graph,
            options,
            device: device.clone(),
            rng,
            history: Vec::new(),
        }
    }

    /// Sets the learning rate.
    pub fn learning_rate(mut self, lr: f64) -> Self {
        self.options.learning_rate = lr;
        self
    }

    /// Seeds the RNG used for shuffling.
    pub fn seed(mut self, seed: u64) -> Self {
        self.options.seed = Some(seed);
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn graph(&self) -> &ModelGraph<B> {
        &self.graph
    }

    pub fn into_graph(self) -> ModelGraph<B> {
        self.graph
    }

    pub fn compile_options(&self) -> &CompileOptions {
        &self.options
    }

    /// Mean loss per epoch from the most recent `train` call.
    pub fn last_history(&self) -> &[f32] {
        &self.history
    }

    fn check_rows(&self, data: &[Vec<f32>]) -> Result<(), ModelError> {
        let expected = self.graph.feature_size();
        match data.iter().position(|row| row.len() != expected) {
            Some(row) => Err(ModelError::ShapeMismatch {
                row,
                expected,
                actual: data[row].len(),
            }),
            None => Ok(()),
        }
    }

    fn encode_targets(&self, labels: &[usize]) -> Result<Vec<Vec<f32>>, ModelError> {
        let width = self.graph.output_size();
        let loss = self.options.loss;

        if loss == Loss::BinaryCrossEntropy && width != 1 {
            return Err(ModelError::TrainingError {
                message: format!("binary cross entropy needs 1 output unit, model has {width}"),
            });
        }

        let classes = match loss {
            Loss::BinaryCrossEntropy => 2,
            _ if loss.one_hot_targets(width) => width,
            _ => usize::MAX,
        };

        labels
            .iter()
            .enumerate()
            .map(|(row, &label)| {
                if label >= classes {
                    return Err(ModelError::InvalidLabel {
                        row,
                        label,
                        classes,
                    });
                }
                if loss.one_hot_targets(width) {
                    let mut encoded = vec![0.0; width];
                    encoded[label] = 1.0;
                    Ok(encoded)
                } else {
                    Ok(vec![label as f32])
                }
            })
            .collect()
    }

    fn input_tensor(&self, data: &[Vec<f32>]) -> Tensor<B, 2> {
        let flat: Vec<f32> = data.iter().flat_map(|row| row.iter().copied()).collect();
        Tensor::<B, 1>::from_floats(flat.as_slice(), &self.device)
            .reshape([data.len(), self.graph.feature_size()])
    }
}

impl<B: AutodiffBackend> TrainableModel for CompiledModel<B> {
    type Data = [Vec<f32>];
    type Label = usize;
    type Weights = Weights;
    type Error = ModelError;

    fn train(
        &mut self,
        data: &[Vec<f32>],
        target: &[usize],
        options: &FitOptions,
    ) -> Result<(), ModelError> {
        if data.is_empty() {
            return Err(ModelError::EmptyDataset);
        }
        if data.len() != target.len() {
            return Err(ModelError::SampleCountMismatch {
                samples: data.len(),
                labels: target.len(),
            });
        }
        if options.batch_size == 0 {
            return Err(ModelError::TrainingError {
                message: "batch size must be positive".to_string(),
            });
        }
        self.check_rows(data)?;
        let targets = self.encode_targets(target)?;

        let result = training::train(
            self.graph.clone(),
            data,
            &targets,
            &self.options,
            options,
            &mut self.rng,
            &self.device,
        );
        self.graph = result.model;
        self.history = result.loss_history;
        Ok(())
    }

    fn get_weights(&self) -> Result<Weights, ModelError> {
        self.graph.weights()
    }

    fn set_weights(&mut self, weights: Weights) -> Result<(), ModelError> {
        self.graph.load_weights(weights)
    }
}

impl<B: AutodiffBackend> ProbabilisticModel for CompiledModel<B> {
    fn predict_proba(&self, data: &[Vec<f32>]) -> Result<Vec<Vec<f32>>, ModelError> {
        if data.is_empty() {
            return Ok(Vec::new());
        }
        self.check_rows(data)?;

        let output = self.graph.forward(self.input_tensor(data));
        let width = self.graph.output_size();
        let flat = output
            .into_data()
            .to_vec::<f32>()
            .map_err(ModelError::tensor_data)?;

        Ok(flat.chunks(width).map(<[f32]>::to_vec).collect())
    }
}

impl<B: AutodiffBackend> ClassifierModel for CompiledModel<B> {
    fn predict_classes(&self, data: &[Vec<f32>]) -> Result<Vec<usize>, ModelError> {
        Ok(argmax_rows(&self.predict_proba(data)?))
    }
}
