//! Fixture types for the clustering property tests.

/// Shape of the generated dissimilarities.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum MatrixShape {
    /// Euclidean distances between random points in the plane.
    Euclidean,
    /// Independent uniform dissimilarities with no metric structure.
    Uniform,
    /// Well separated groups of nearby points.
    Clustered,
    /// Small integer dissimilarities with many exact ties.
    Tied,
}

impl MatrixShape {
    /// Returns `true` when exact ties are unlikely enough that every engine
    /// must produce the same dendrogram.
    pub(super) fn is_distinct(self) -> bool {
        !matches!(self, Self::Tied)
    }
}

/// Generated condensed matrix with the context needed to diagnose failures.
#[derive(Clone, Debug)]
pub(super) struct MatrixFixture {
    /// Number of observations.
    pub observations: usize,
    /// Condensed dissimilarities in row order.
    pub matrix: Vec<f64>,
    /// Generator used for the dissimilarities.
    pub shape: MatrixShape,
}
