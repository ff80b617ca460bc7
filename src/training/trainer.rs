//! Training loop implementation.

use super::{CompileOptions, FitOptions, Verbosity};
use crate::model_graph::ModelGraph;
use burn::{
    optim::{AdamConfig, GradientsParams, Optimizer},
    tensor::{ElementConversion, Tensor, backend::AutodiffBackend},
};
use rand::{Rng, seq::SliceRandom};

/// Training result containing the trained model and metrics.
#[derive(Debug)]
pub struct TrainingResult<B: AutodiffBackend> {
    /// The trained model.
    pub model: ModelGraph<B>,
    /// Mean loss per epoch.
    pub loss_history: Vec<f32>,
}

fn batch_tensor<B: AutodiffBackend>(
    rows: &[Vec<f32>],
    indices: &[usize],
    device: &B::Device,
) -> Tensor<B, 2> {
    let width = indices.first().map(|&i| rows[i].len()).unwrap_or(0);
    let flat: Vec<f32> = indices
        .iter()
        .flat_map(|&i| rows[i].iter().copied())
        .collect();

    Tensor::<B, 1>::from_floats(flat.as_slice(), device).reshape([indices.len(), width])
}

/// Trains a model with mini-batch Adam.
///
/// `inputs` and `targets` must be non-empty, of equal length and rectangular;
/// the caller validates them. Sample order is reshuffled with `rng` before
/// every epoch when `options.shuffle` is set.
pub fn train<B: AutodiffBackend, R: Rng + ?Sized>(
    model: ModelGraph<B>,
    inputs: &[Vec<f32>],
    targets: &[Vec<f32>],
    compile: &CompileOptions,
    options: &FitOptions,
    rng: &mut R,
    device: &B::Device,
) -> TrainingResult<B> {
    let num_samples = inputs.len();
    let batch_size = options.batch_size.max(1);
    let num_batches = num_samples.div_ceil(batch_size);

    let mut optimizer = AdamConfig::new().init();
    let mut order: Vec<usize> = (0..num_samples).collect();

    let mut current_model = model;
    let mut loss_history = Vec::with_capacity(options.epochs);

    for epoch in 0..options.epochs {
        if options.shuffle {
            order.shuffle(rng);
        }

        let mut epoch_loss = 0.0f32;
        for (batch, indices) in order.chunks(batch_size).enumerate() {
            let input_tensor = batch_tensor::<B>(inputs, indices, device);
            let target_tensor = batch_tensor::<B>(targets, indices, device);

            // Forward pass
            let predictions = current_model.forward(input_tensor);

            // Compute loss
            let loss = compile.loss.compute(predictions, target_tensor);
            let loss_value: f32 = loss.clone().into_scalar().elem();
            epoch_loss += loss_value * indices.len() as f32;

            if options.verbosity == Verbosity::Progress {
                log::debug!(
                    "Epoch {}/{} batch {}/{}: loss = {:.6}",
                    epoch + 1,
                    options.epochs,
                    batch + 1,
                    num_batches,
                    loss_value
                );
            }

            // Backward pass
            let grads = loss.backward();
            let grads_params = GradientsParams::from_grads(grads, &current_model);

            // Update model parameters
            current_model = optimizer.step(compile.learning_rate, current_model, grads_params);
        }

        let mean_loss = epoch_loss / num_samples as f32;
        loss_history.push(mean_loss);

        let report = match options.verbosity {
            Verbosity::Silent => false,
            Verbosity::Progress => epoch == 0 || epoch + 1 == options.epochs,
            Verbosity::PerEpoch => true,
        };
        if report {
            log::info!(
                "Epoch {}/{}: loss = {:.6}",
                epoch + 1,
                options.epochs,
                mean_loss
            );
        }
    }

    TrainingResult {
        model: current_model,
        loss_history,
    }
}
