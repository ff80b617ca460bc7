//! Dense (fully connected) layer implementation.

use crate::errors::ModelError;
use crate::layers::Activation;
use crate::weights::Weight;
use burn::{
    module::{Module, Param},
    nn::{Linear, LinearConfig},
    tensor::{Tensor, TensorData, backend::Backend},
};

/// Configuration for a Dense layer.
#[derive(Debug, Clone)]
pub struct DenseConfig {
    /// Number of input features.
    pub input_size: usize,
    /// Number of output features.
    pub output_size: usize,
    /// Activation function to apply after the linear transformation.
    pub activation: Activation,
}

impl DenseConfig {
    /// Creates a new DenseConfig.
    pub fn new(input_size: usize, output_size: usize) -> Self {
        Self {
            input_size,
            output_size,
            activation: Activation::None,
        }
    }

    /// Sets the activation function.
    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = activation;
        self
    }

    /// Initializes the Dense layer with the given device.
    pub fn init<B: Backend>(&self, device: &B::Device) -> Dense<B> {
        let linear = LinearConfig::new(self.input_size, self.output_size).init(device);

        Dense {
            linear,
            input_size: self.input_size,
            output_size: self.output_size,
            activation_id: self.activation.to_id(),
        }
    }
}

/// A dense (fully connected) layer with optional activation.
///
/// It performs: output = activation(input @ kernel + bias), with the kernel
/// stored as `[input_size, output_size]`.
#[derive(Module, Debug)]
pub struct Dense<B: Backend> {
    /// The underlying linear transformation.
    linear: Linear<B>,
    /// Input size (constant metadata).
    input_size: usize,
    /// Output size (constant metadata).
    output_size: usize,
    /// Activation function ID, see [`Activation::to_id`].
    activation_id: u8,
}

impl<B: Backend> Dense<B> {
    /// Performs the forward pass.
    pub fn forward(&self, input: Tensor<B, 2>) -> Tensor<B, 2> {
        let output = self.linear.forward(input);
        Activation::from_id(self.activation_id).apply(output)
    }

    /// Returns the input size of this layer.
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Returns the output size of this layer.
    pub fn output_size(&self) -> usize {
        self.output_size
    }

    /// Returns the activation function.
    pub fn activation(&self) -> Activation {
        Activation::from_id(self.activation_id)
    }

    /// Whether the layer carries a bias vector.
    pub fn has_bias(&self) -> bool {
        self.linear.bias.is_some()
    }

    /// Shapes of the parameter arrays, kernel first, then bias if present.
    pub fn parameter_shapes(&self) -> Vec<Vec<usize>> {
        let mut shapes = vec![vec![self.input_size, self.output_size]];
        if self.has_bias() {
            shapes.push(vec![self.output_size]);
        }
        shapes
    }

    /// Copies the kernel and bias out of the layer.
    pub fn weights(&self) -> Result<Vec<Weight>, ModelError> {
        let kernel = self.linear.weight.val().to_data();
        let mut weights = vec![Weight::new(
            kernel.shape.clone(),
            kernel.to_vec::<f32>().map_err(ModelError::tensor_data)?,
        )];

        if let Some(bias) = &self.linear.bias {
            let bias = bias.val().to_data();
            weights.push(Weight::new(
                bias.shape.clone(),
                bias.to_vec::<f32>().map_err(ModelError::tensor_data)?,
            ));
        }
        Ok(weights)
    }

    /// Replaces the kernel and bias.
    ///
    /// The arrays must already match [`Dense::parameter_shapes`]; the model
    /// checks the complete snapshot before loading any layer.
    pub(crate) fn load_weights(&mut self, kernel: Weight, bias: Option<Weight>) {
        let device = self.linear.weight.val().device();

        let kernel = Tensor::<B, 2>::from_data(
            TensorData::new(kernel.into_values(), [self.input_size, self.output_size]),
            &device,
        );
        self.linear.weight = Param::from_tensor(kernel);

        if let Some(bias) = bias.filter(|_| self.has_bias()) {
            let bias = Tensor::<B, 1>::from_data(
                TensorData::new(bias.into_values(), [self.output_size]),
                &device,
            );
            self.linear.bias = Some(Param::from_tensor(bias));
        }
    }
}
