//! Property 3: relabelling observations relabels the dendrogram.
//!
//! Shuffling the observations and their condensed matrix must produce the
//! same merges, compared as sets of original observations, at the same
//! dissimilarities.

use proptest::test_runner::{TestCaseError, TestCaseResult};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::{Algorithm, Dendrogram, Method, condensed_offset};

use super::{equivalence::cluster, types::MatrixFixture};

const RELATIVE_TOLERANCE: f64 = 1e-9;

pub(super) fn run_permutation_invariance_property(
    fixture: &MatrixFixture,
    seed: u64,
) -> TestCaseResult {
    let observations = fixture.observations;
    let mut permutation: Vec<usize> = (0..observations).collect();
    permutation.shuffle(&mut SmallRng::seed_from_u64(seed));

    let mut shuffled = Vec::with_capacity(fixture.matrix.len());
    for row in 0..observations {
        for column in row + 1..observations {
            shuffled.push(
                fixture.matrix[condensed_offset(observations, permutation[row], permutation[column])],
            );
        }
    }
    let shuffled_fixture = MatrixFixture {
        matrix: shuffled,
        ..fixture.clone()
    };

    for method in Method::ALL {
        let original = merged_sets(&cluster(fixture, method, Algorithm::Auto)?, |leaf| leaf);
        let relabelled = merged_sets(
            &cluster(&shuffled_fixture, method, Algorithm::Auto)?,
            |leaf| permutation[leaf],
        );
        let scale = original
            .iter()
            .map(|(_, dissimilarity)| dissimilarity.abs())
            .fold(1.0, f64::max);
        let matches = original.len() == relabelled.len()
            && original.iter().zip(&relabelled).all(|(left, right)| {
                left.0 == right.0 && (left.1 - right.1).abs() <= RELATIVE_TOLERANCE * scale
            });
        if !matches {
            return Err(TestCaseError::fail(format!(
                "{method} linkage changed under permutation {permutation:?} \
                 (shape={:?}, observations={observations})",
                fixture.shape,
            )));
        }
    }
    Ok(())
}

/// Lists each merge as the sorted original observations it produced.
fn merged_sets(
    dendrogram: &Dendrogram<f64>,
    original: impl Fn(usize) -> usize,
) -> Vec<(Vec<usize>, f64)> {
    let observations = dendrogram.observations();
    let mut members: Vec<Vec<usize>> = (0..observations).map(|leaf| vec![original(leaf)]).collect();
    let mut merges = Vec::with_capacity(dendrogram.len());
    for step in dendrogram {
        let mut merged = members[step.cluster1()].clone();
        merged.extend_from_slice(&members[step.cluster2()]);
        merged.sort_unstable();
        merges.push((merged.clone(), step.dissimilarity()));
        members.push(merged);
    }
    merges
}
