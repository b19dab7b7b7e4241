//! Property 1: every engine agrees with the exhaustive search.
//!
//! The exhaustive search merges the globally closest pair each round, which
//! is the definition of agglomerative clustering. For tie-free inputs every
//! other engine must reproduce its dendrogram up to rounding in the
//! dissimilarities.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Algorithm, Dendrogram, LinkageBuilder, Method};

use super::types::MatrixFixture;

/// Relative tolerance for dissimilarities computed along different merge
/// orders.
const RELATIVE_TOLERANCE: f64 = 1e-9;

pub(super) fn run_engine_equivalence_property(fixture: &MatrixFixture) -> TestCaseResult {
    for method in Method::ALL {
        let reference = cluster(fixture, method, Algorithm::Primitive)?;
        let tolerance = RELATIVE_TOLERANCE * (1.0 + max_dissimilarity(&reference));
        for algorithm in Algorithm::ALL {
            if algorithm == Algorithm::Primitive || !algorithm.supports(method) {
                continue;
            }
            let candidate = cluster(fixture, method, algorithm)?;
            if !candidate.eq_with_epsilon(&reference, tolerance) {
                return Err(TestCaseError::fail(format!(
                    "{algorithm} disagrees with primitive for {method} linkage \
                     (shape={:?}, observations={}):\n  candidate={:?}\n  reference={:?}",
                    fixture.shape,
                    fixture.observations,
                    candidate.steps(),
                    reference.steps(),
                )));
            }
        }
    }
    Ok(())
}

pub(super) fn cluster(
    fixture: &MatrixFixture,
    method: Method,
    algorithm: Algorithm,
) -> Result<Dendrogram<f64>, TestCaseError> {
    let linkage = LinkageBuilder::new()
        .with_method(method)
        .with_algorithm(algorithm)
        .build()
        .map_err(|err| TestCaseError::fail(format!("invalid configuration: {err}")))?;
    let mut matrix = fixture.matrix.clone();
    linkage.run(&mut matrix, fixture.observations).map_err(|err| {
        TestCaseError::fail(format!(
            "{algorithm} failed for {method} linkage: {err} (shape={:?}, observations={})",
            fixture.shape, fixture.observations,
        ))
    })
}

fn max_dissimilarity(dendrogram: &Dendrogram<f64>) -> f64 {
    dendrogram
        .iter()
        .map(|step| step.dissimilarity().abs())
        .fold(0.0, f64::max)
}
