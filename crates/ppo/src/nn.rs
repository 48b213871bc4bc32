use serde::{Deserialize, Serialize};

/// A fully connected neural network layer.
///
/// Weights are stored row-major as `[out_dim, in_dim]`.
#[derive(Clone, Serialize, Deserialize)]
pub struct Dense {
    /// The weight matrix for the layer.
    pub w: Vec<f32>,
    /// The bias vector for the layer.
    pub b: Vec<f32>,
    /// The number of input dimensions.
    pub in_dim: usize,
    /// The number of output dimensions.
    pub out_dim: usize,
}

impl Dense {
    /// Creates a new `Dense` layer with the given weights and biases.
    #[must_use]
    pub fn new(weights: Vec<f32>, bias: Vec<f32>, in_dim: usize, out_dim: usize) -> Self {
        assert_eq!(weights.len(), in_dim * out_dim);
        assert_eq!(bias.len(), out_dim);
        Self {
            w: weights,
            b: bias,
            in_dim,
            out_dim,
        }
    }

    /// Creates a layer with Glorot-initialized weights and zero biases.
    #[must_use]
    pub fn glorot(in_dim: usize, out_dim: usize, rng: &mut fastrand::Rng) -> Self {
        let limit = (6.0 / (in_dim + out_dim) as f32).sqrt();
        let weights = (0..in_dim * out_dim)
            .map(|_| rng.f32() * 2.0 * limit - limit)
            .collect();
        let bias = vec![0.0; out_dim];
        Self::new(weights, bias, in_dim, out_dim)
    }

    /// Performs the forward pass through the layer.
    #[must_use]
    pub fn forward(&self, x: &[f32]) -> Vec<f32> {
        debug_assert_eq!(x.len(), self.in_dim);
        let mut y = self.b.clone();
        for (j, out) in y.iter_mut().enumerate() {
            let row = &self.w[j * self.in_dim..(j + 1) * self.in_dim];
            for (wij, xi) in row.iter().zip(x) {
                *out += wij * xi;
            }
        }
        y
    }
}

/// Numerically stable softmax over a logit vector.
#[must_use]
pub fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|l| (l - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// Index of the largest logit; ties resolve to the lowest index.
#[must_use]
pub fn argmax(values: &[f32]) -> usize {
    let mut best = 0;
    for (i, v) in values.iter().enumerate() {
        if *v > values[best] {
            best = i;
        }
    }
    best
}
