//! Neural network layer implementations.
//!
//! The building blocks of the reference classifier: dense (fully connected)
//! layers and their activation functions.

pub mod activation;
pub mod dense;

pub use activation::Activation;
pub use dense::{Dense, DenseConfig};
