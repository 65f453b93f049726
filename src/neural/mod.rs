pub mod activations;

use crate::matrix::{
    ops::{Dot, Transpose},
    Matrix2,
};
use crate::prelude::*;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use self::activations::{sigmoid, sigmoid_derivative};

/// A single-layer perceptron: one weight matrix mapping inputs to sigmoid
/// outputs. No biases, no hidden layers.
#[derive(Debug, Clone)]
pub struct Perceptron {
    synaptic_weights: Matrix2<f64>,
}

impl Perceptron {
    /// Initializes a perceptron given the number of input features and output
    /// neurons. Weights are drawn uniformly at random from (-1, 1) using the
    /// thread-local generator.
    pub fn new(input_dim: u32, output_dim: u32) -> Result<Self> {
        Self::with_rng(input_dim, output_dim, &mut rand::thread_rng())
    }

    /// Like [`Perceptron::new`] but draws initial weights from a
    /// caller-supplied generator, so tests can seed one for determinism.
    pub fn with_rng<R: Rng>(input_dim: u32, output_dim: u32, rng: &mut R) -> Result<Self> {
        if input_dim == 0 || output_dim == 0 {
            return Err(Error::InvalidDimErr);
        }

        let die = Uniform::from(-1.0..1.0);
        let synaptic_weights = Matrix2::from_vec(
            (0..input_dim)
                .map(|_| {
                    (0..output_dim)
                        .map(|_| die.sample(rng))
                        .collect::<Vec<_>>()
                })
                .collect(),
        )?;

        Ok(Self { synaptic_weights })
    }

    /// Returns the number of input features this perceptron accepts
    pub fn input_dim(&self) -> u32 {
        self.synaptic_weights.rows() as u32
    }

    /// Returns the number of output neurons
    pub fn output_dim(&self) -> u32 {
        self.synaptic_weights.cols() as u32
    }

    /// Read-only view of the weight matrix.
    pub fn synaptic_weights(&self) -> &Matrix2<f64> {
        &self.synaptic_weights
    }

    /// Propagates a batch of inputs through the perceptron: `inputs · W`
    /// pushed through the sigmoid. Every output element lies in (0, 1).
    ///
    /// Fails with [`Error::DimensionErr`] if the input's column count doesn't
    /// match [`Perceptron::input_dim`].
    pub fn activate(&self, inputs: &Matrix2<f64>) -> Result<Matrix2<f64>> {
        let mut res = inputs.dot(&self.synaptic_weights)?;
        res.apply(sigmoid);
        Ok(res)
    }

    /// Runs `iterations` full-batch weight updates against the targets.
    ///
    /// Each pass activates the whole batch, scales the residual by the
    /// sigmoid derivative of the activation, projects it back through the
    /// transposed inputs and adds the result straight onto the weights
    /// (effective learning rate of 1). Zero iterations is a valid no-op.
    pub fn train(
        &mut self,
        inputs: &Matrix2<f64>,
        targets: &Matrix2<f64>,
        iterations: usize,
    ) -> Result<()> {
        for _ in 0..iterations {
            let output = self.activate(inputs)?;
            let error = (targets - &output)?;
            let scaled_error = (&error * &output.map(sigmoid_derivative))?;
            let adjustments = inputs.transpose().dot(&scaled_error)?;

            self.synaptic_weights = (&self.synaptic_weights + &adjustments)?;
        }
        Ok(())
    }

    /// Mean-squared error of the activation against the targets.
    pub fn mean_squared_error(
        &self,
        inputs: &Matrix2<f64>,
        targets: &Matrix2<f64>,
    ) -> Result<f64> {
        let outputs = self.activate(inputs)?;
        if outputs.dim() != targets.dim() {
            return Err(Error::DimensionErr);
        }

        let mut sum = 0.0;
        for row in 0..outputs.rows() {
            for col in 0..outputs.cols() {
                let diff = outputs[(row, col)] - targets[(row, col)];
                sum += diff * diff;
            }
        }
        Ok(sum / (targets.rows() * targets.cols()) as f64)
    }
}
