//! Property 2: structural invariants of every dendrogram.
//!
//! Holds for any input, ties included:
//! - exactly `N - 1` steps over `N` observations;
//! - `cluster1 < cluster2`, and both labels already exist at that step;
//! - every label is merged at most once;
//! - each step's size is the sum of its two clusters' sizes, ending at `N`;
//! - reducible methods never decrease the merge dissimilarity.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Algorithm, Dendrogram, Method};

use super::{equivalence::cluster, types::MatrixFixture};

pub(super) fn run_structural_invariants_property(fixture: &MatrixFixture) -> TestCaseResult {
    for method in Method::ALL {
        let dendrogram = cluster(fixture, method, Algorithm::Auto)?;
        check_structure(&dendrogram, fixture.observations).map_err(|reason| {
            TestCaseError::fail(format!(
                "{method} linkage: {reason} (shape={:?}, observations={})",
                fixture.shape, fixture.observations,
            ))
        })?;
        if method.is_reducible() {
            check_monotone(&dendrogram).map_err(|reason| {
                TestCaseError::fail(format!(
                    "{method} linkage: {reason} (shape={:?}, observations={})",
                    fixture.shape, fixture.observations,
                ))
            })?;
        }
    }
    Ok(())
}

pub(super) fn check_structure(
    dendrogram: &Dendrogram<f64>,
    observations: usize,
) -> Result<(), String> {
    if dendrogram.observations() != observations {
        return Err(format!(
            "observation count {} != {observations}",
            dendrogram.observations()
        ));
    }
    if dendrogram.len() != observations - 1 {
        return Err(format!("{} steps for {observations} observations", dendrogram.len()));
    }

    let mut merged = vec![false; 2 * observations - 1];
    for (index, step) in dendrogram.iter().enumerate() {
        let (left, right) = step.clusters();
        let newest = observations + index;
        if left >= right {
            return Err(format!("step {index} is not ordered: ({left}, {right})"));
        }
        if right >= newest {
            return Err(format!("step {index} references future label {right}"));
        }
        for label in [left, right] {
            if std::mem::replace(&mut merged[label], true) {
                return Err(format!("label {label} merged twice"));
            }
        }
        let expected = dendrogram.cluster_size(left).unwrap_or(0)
            + dendrogram.cluster_size(right).unwrap_or(0);
        if step.size() != expected {
            return Err(format!("step {index} has size {} != {expected}", step.size()));
        }
        if !step.dissimilarity().is_finite() || step.dissimilarity() < 0.0 {
            return Err(format!(
                "step {index} has dissimilarity {}",
                step.dissimilarity()
            ));
        }
    }

    match dendrogram.steps().last() {
        Some(root) if root.size() != observations => {
            Err(format!("root has size {} != {observations}", root.size()))
        }
        _ => Ok(()),
    }
}

fn check_monotone(dendrogram: &Dendrogram<f64>) -> Result<(), String> {
    for (index, pair) in dendrogram.steps().windows(2).enumerate() {
        if pair[1].dissimilarity() < pair[0].dissimilarity() {
            return Err(format!(
                "step {} dissimilarity {} is below step {index} dissimilarity {}",
                index + 1,
                pair[1].dissimilarity(),
                pair[0].dissimilarity(),
            ));
        }
    }
    Ok(())
}
