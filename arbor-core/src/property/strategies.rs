//! Strategy builders for clustering property tests.
//!
//! Every generator is driven by a seeded [`SmallRng`] so a failing case can
//! be replayed from its shape and seed alone.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{MatrixFixture, MatrixShape};

/// Smallest generated observation count.
const MIN_OBSERVATIONS: usize = 2;
/// Largest generated observation count. The exhaustive search is cubic, so
/// this stays small.
const MAX_OBSERVATIONS: usize = 40;

fn shape_strategy() -> impl Strategy<Value = MatrixShape> {
    prop_oneof![
        3 => Just(MatrixShape::Euclidean),
        2 => Just(MatrixShape::Uniform),
        2 => Just(MatrixShape::Clustered),
        1 => Just(MatrixShape::Tied),
    ]
}

/// Generates fixtures of every shape.
pub(super) fn matrix_fixture_strategy() -> impl Strategy<Value = MatrixFixture> {
    (shape_strategy(), any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, &mut rng)
    })
}

/// Generates fixtures whose dissimilarities are free of exact ties.
pub(super) fn distinct_fixture_strategy() -> impl Strategy<Value = MatrixFixture> {
    matrix_fixture_strategy().prop_filter("ties make engines diverge", |fixture| {
        fixture.shape.is_distinct()
    })
}

/// Generates a fixture for a specific shape.
pub(super) fn generate_fixture(shape: MatrixShape, rng: &mut SmallRng) -> MatrixFixture {
    let observations = rng.gen_range(MIN_OBSERVATIONS..=MAX_OBSERVATIONS);
    let matrix = match shape {
        MatrixShape::Euclidean => {
            let points = random_points(rng, observations, |rng| {
                (rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0))
            });
            euclidean(&points)
        }
        MatrixShape::Uniform => (0..pair_count(observations))
            .map(|_| rng.gen_range(0.0..100.0))
            .collect(),
        MatrixShape::Clustered => {
            let groups = rng.gen_range(1..=4_usize);
            let centres: Vec<(f64, f64)> = (0..groups)
                .map(|_| (rng.gen_range(-500.0..500.0), rng.gen_range(-500.0..500.0)))
                .collect();
            let points = random_points(rng, observations, |rng| {
                let (x, y) = centres[rng.gen_range(0..groups)];
                (x + rng.gen_range(-5.0..5.0), y + rng.gen_range(-5.0..5.0))
            });
            euclidean(&points)
        }
        MatrixShape::Tied => (0..pair_count(observations))
            .map(|_| f64::from(rng.gen_range(1_u8..=4)))
            .collect(),
    };
    MatrixFixture {
        observations,
        matrix,
        shape,
    }
}

fn pair_count(observations: usize) -> usize {
    observations * (observations - 1) / 2
}

fn random_points(
    rng: &mut SmallRng,
    observations: usize,
    mut point: impl FnMut(&mut SmallRng) -> (f64, f64),
) -> Vec<(f64, f64)> {
    (0..observations).map(|_| point(rng)).collect()
}

/// Builds the condensed Euclidean distance matrix of `points`.
pub(super) fn euclidean(points: &[(f64, f64)]) -> Vec<f64> {
    let mut matrix = Vec::with_capacity(pair_count(points.len()));
    for (index, &(x1, y1)) in points.iter().enumerate() {
        for &(x2, y2) in &points[index + 1..] {
            matrix.push((x1 - x2).hypot(y1 - y2));
        }
    }
    matrix
}
