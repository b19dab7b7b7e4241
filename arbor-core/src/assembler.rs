//! Turns raw slot merges into a labelled dendrogram.

use std::cmp::Ordering;

use crate::{
    dendrogram::{Dendrogram, Step},
    error::{LinkageError, Result},
    float::Float,
    labels::LabelForest,
    method::Method,
};

/// How the engine discovered its merges.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum MergeOrder {
    /// Merges were emitted in final order, inversions included.
    Emitted,
    /// Merges were emitted out of order and must be stably sorted by
    /// dissimilarity. Only valid for monotone methods.
    ByDissimilarity,
}

/// Collects the `N - 1` merges reported by an engine.
///
/// Engines report merges between row slots. The assembler buffers them in
/// storage reserved up front, then [`finish`](Self::finish) orders them,
/// replaces slots with sequential labels and sizes, and maps squared
/// dissimilarities back to the caller's scale.
#[derive(Debug)]
pub(crate) struct DendrogramAssembler<T> {
    steps: Vec<Step<T>>,
    observations: usize,
}

impl<T: Float> DendrogramAssembler<T> {
    /// Reserves room for every step of a clustering over `observations`
    /// points.
    ///
    /// # Errors
    /// Returns [`LinkageError::AllocationFailed`] when the step buffer cannot
    /// be reserved.
    pub(crate) fn with_capacity(observations: usize) -> Result<Self> {
        let expected = observations.saturating_sub(1);
        let mut steps = Vec::new();
        steps
            .try_reserve_exact(expected)
            .map_err(|source| LinkageError::AllocationFailed {
                steps: expected,
                source,
            })?;
        Ok(Self {
            steps,
            observations,
        })
    }

    /// Records that slots `left` and `right` merged at `dissimilarity`.
    pub(crate) fn push(&mut self, left: usize, right: usize, dissimilarity: T) {
        debug_assert!(self.steps.len() < self.steps.capacity());
        self.steps.push(Step::new(left, right, dissimilarity, 0));
    }

    #[rustfmt::skip]
    pub(crate) fn len(&self) -> usize { self.steps.len() }

    /// Freezes the recorded merges into a [`Dendrogram`].
    pub(crate) fn finish(
        mut self,
        method: Method,
        order: MergeOrder,
        forest: &mut LabelForest,
    ) -> Dendrogram<T> {
        debug_assert_eq!(self.steps.len(), self.observations.saturating_sub(1));
        if order == MergeOrder::ByDissimilarity {
            self.steps.sort_by(|left, right| {
                left.dissimilarity()
                    .partial_cmp(&right.dissimilarity())
                    .unwrap_or(Ordering::Equal)
            });
        }

        forest.reset(self.observations);
        for step in &mut self.steps {
            let left = forest.find(step.cluster1());
            let right = forest.find(step.cluster2());
            let (_, size) = forest.union(left, right);
            *step = Step::new(left, right, method.finish(step.dissimilarity()), size);
        }

        Dendrogram::from_steps(self.steps, self.observations)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{DendrogramAssembler, MergeOrder};
    use crate::{labels::LabelForest, method::Method};

    fn assemble(
        merges: &[(usize, usize, f64)],
        method: Method,
        order: MergeOrder,
    ) -> Vec<(usize, usize, f64, usize)> {
        let mut assembler =
            DendrogramAssembler::with_capacity(merges.len() + 1).expect("reserve steps");
        for &(left, right, dissimilarity) in merges {
            assembler.push(left, right, dissimilarity);
        }
        let mut forest = LabelForest::default();
        assembler
            .finish(method, order, &mut forest)
            .iter()
            .map(|step| (step.cluster1(), step.cluster2(), step.dissimilarity(), step.size()))
            .collect()
    }

    #[test]
    fn relabels_surviving_slots() {
        let steps = assemble(
            &[(1, 3, 1.0), (0, 3, 2.0), (2, 3, 3.0)],
            Method::Single,
            MergeOrder::Emitted,
        );
        assert_eq!(
            steps,
            vec![(1, 3, 1.0, 2), (0, 4, 2.0, 3), (2, 5, 3.0, 4)]
        );
    }

    #[test]
    fn sorts_out_of_order_merges_stably() {
        let steps = assemble(
            &[(2, 3, 4.0), (0, 1, 1.0), (1, 3, 4.0)],
            Method::Complete,
            MergeOrder::ByDissimilarity,
        );
        assert_eq!(
            steps,
            vec![(0, 1, 1.0, 2), (2, 3, 4.0, 2), (4, 5, 4.0, 4)]
        );
    }

    #[rstest]
    #[case::ward(Method::Ward, 3.0)]
    #[case::average(Method::Average, 9.0)]
    fn maps_squared_dissimilarities_back(#[case] method: Method, #[case] expected: f64) {
        let steps = assemble(&[(0, 1, 9.0)], method, MergeOrder::Emitted);
        assert_eq!(steps, vec![(0, 1, expected, 2)]);
    }

    #[test]
    fn keeps_inversions_in_emitted_order() {
        let steps = assemble(
            &[(0, 1, 4.0), (1, 2, 1.0)],
            Method::Centroid,
            MergeOrder::Emitted,
        );
        assert_eq!(steps, vec![(0, 1, 2.0, 2), (2, 3, 1.0, 3)]);
    }
}
