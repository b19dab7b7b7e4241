//! Synthetic condensed dissimilarity matrices for benchmarking.
//!
//! Points are drawn uniformly from the unit hypercube with a seeded
//! [`SmallRng`] and their pairwise Euclidean distances are stored in
//! condensed order, so every run of a benchmark sees the same matrix.

use arbor_core::condensed_len;
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Uniform random point configuration.
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Number of points, which becomes the number of observations.
    pub point_count: usize,
    /// Dimensionality of each point.
    pub dimensions: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Errors raised while generating a synthetic matrix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntheticError {
    /// The requested point count was zero.
    #[error("point count must be greater than zero")]
    ZeroPoints,
    /// The requested dimension count was zero.
    #[error("dimension count must be greater than zero")]
    ZeroDimensions,
    /// The condensed matrix length overflows `usize`.
    #[error("{point_count} points do not fit in a condensed matrix")]
    TooManyPoints {
        /// Requested point count.
        point_count: usize,
    },
}

/// A seeded condensed matrix of Euclidean distances.
#[derive(Clone, Debug)]
pub struct SyntheticMatrix {
    observations: usize,
    condensed: Vec<f64>,
}

impl SyntheticMatrix {
    /// Generates the matrix described by `config`.
    ///
    /// # Errors
    /// Returns [`SyntheticError`] when the point or dimension count is zero,
    /// or when the condensed length overflows.
    pub fn generate(config: &SyntheticConfig) -> Result<Self, SyntheticError> {
        if config.point_count == 0 {
            return Err(SyntheticError::ZeroPoints);
        }
        if config.dimensions == 0 {
            return Err(SyntheticError::ZeroDimensions);
        }
        let len = condensed_len(config.point_count).ok_or(SyntheticError::TooManyPoints {
            point_count: config.point_count,
        })?;

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let points: Vec<Vec<f64>> = (0..config.point_count)
            .map(|_| {
                (0..config.dimensions)
                    .map(|_| rng.gen_range(0.0..1.0))
                    .collect()
            })
            .collect();

        let mut condensed = Vec::with_capacity(len);
        for (row, left) in points.iter().enumerate() {
            condensed.extend(
                points
                    .iter()
                    .skip(row + 1)
                    .map(|right| euclidean(left, right)),
            );
        }
        Ok(Self {
            observations: config.point_count,
            condensed,
        })
    }

    /// Number of observations the matrix describes.
    #[must_use]
    pub const fn observations(&self) -> usize {
        self.observations
    }

    /// Condensed distances in double precision.
    #[must_use]
    pub const fn condensed(&self) -> &[f64] {
        self.condensed.as_slice()
    }

    /// Condensed distances narrowed to single precision.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "single-precision benchmarks deliberately narrow the distances"
    )]
    pub fn condensed_f32(&self) -> Vec<f32> {
        self.condensed.iter().map(|&value| value as f32).collect()
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "Euclidean distance is floating-point by definition"
)]
fn euclidean(left: &[f64], right: &[f64]) -> f64 {
    left.iter()
        .zip(right)
        .map(|(a, b)| (a - b) * (a - b))
        .sum::<f64>()
        .sqrt()
}
