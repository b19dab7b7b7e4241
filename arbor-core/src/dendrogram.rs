//! Stepwise dendrogram produced by hierarchical clustering.

use std::{ops::Index, slice};

use crate::float::Float;

/// A hierarchical clustering of `N` observations as `N - 1` merge steps.
///
/// Labels follow the SciPy convention: observation `i` is cluster `i`, and
/// the cluster created by step `k` (zero-based) is labelled `N + k`. The
/// final step therefore creates cluster `2N - 2`, which holds every
/// observation.
///
/// A `Dendrogram` is immutable once returned and exclusively owns its steps.
/// Dropping it releases them; [`Dendrogram::into_steps`] transfers ownership
/// of the step buffer instead.
///
/// # Examples
/// ```
/// use arbor_core::{Method, linkage};
///
/// let mut matrix = vec![1.0_f64, 4.0, 2.0];
/// let dendrogram = linkage(&mut matrix, 3, Method::Single)?;
///
/// assert_eq!(dendrogram.len(), 2);
/// assert_eq!(dendrogram.observations(), 3);
/// assert_eq!(dendrogram[0].clusters(), (0, 1));
/// assert_eq!(dendrogram[1].clusters(), (2, 3));
/// assert_eq!(dendrogram.cluster_size(4), Some(3));
/// # Ok::<(), arbor_core::LinkageError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Dendrogram<T> {
    steps: Vec<Step<T>>,
    observations: usize,
}

impl<T> Dendrogram<T> {
    pub(crate) fn from_steps(steps: Vec<Step<T>>, observations: usize) -> Self {
        debug_assert_eq!(steps.len(), observations.saturating_sub(1));
        Self {
            steps,
            observations,
        }
    }

    /// Returns the merge steps in creation order.
    #[must_use]
    #[rustfmt::skip]
    pub fn steps(&self) -> &[Step<T>] { &self.steps }

    /// Returns the number of steps, always `observations - 1` for a
    /// non-empty clustering.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.steps.len() }

    /// Returns `true` when the clustering had a single observation.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.steps.is_empty() }

    /// Returns the number of clustered observations.
    #[must_use]
    #[rustfmt::skip]
    pub fn observations(&self) -> usize { self.observations }

    /// Returns the number of observations in the cluster labelled `label`.
    ///
    /// Leaves have size one. Returns `None` for labels outside
    /// `0..2N - 1`.
    #[must_use]
    pub fn cluster_size(&self, label: usize) -> Option<usize> {
        if label < self.observations {
            return Some(1);
        }
        self.steps
            .get(label - self.observations)
            .map(|step| step.size)
    }

    /// Consumes the dendrogram and returns its step buffer.
    #[must_use]
    pub fn into_steps(self) -> Vec<Step<T>> {
        self.steps
    }

    /// Iterates over the steps in creation order.
    pub fn iter(&self) -> slice::Iter<'_, Step<T>> {
        self.steps.iter()
    }
}

impl<T: Float> Dendrogram<T> {
    /// Compares two dendrograms, allowing each pair of step
    /// dissimilarities to differ by at most `epsilon`.
    #[must_use]
    pub fn eq_with_epsilon(&self, other: &Self, epsilon: T) -> bool {
        self.observations == other.observations
            && self.steps.len() == other.steps.len()
            && self
                .steps
                .iter()
                .zip(&other.steps)
                .all(|(left, right)| left.eq_with_epsilon(right, epsilon))
    }
}

impl<T> Index<usize> for Dendrogram<T> {
    type Output = Step<T>;

    fn index(&self, index: usize) -> &Step<T> {
        &self.steps[index]
    }
}

impl<'a, T> IntoIterator for &'a Dendrogram<T> {
    type Item = &'a Step<T>;
    type IntoIter = slice::Iter<'a, Step<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// A single merge of two clusters.
///
/// `cluster1` is always the smaller label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step<T> {
    cluster1: usize,
    cluster2: usize,
    dissimilarity: T,
    size: usize,
}

impl<T> Step<T> {
    /// Builds a step, normalising the labels so the smaller one comes first.
    pub(crate) fn new(left: usize, right: usize, dissimilarity: T, size: usize) -> Self {
        let (cluster1, cluster2) = if left < right {
            (left, right)
        } else {
            (right, left)
        };
        Self {
            cluster1,
            cluster2,
            dissimilarity,
            size,
        }
    }

    /// Returns the smaller merged label.
    #[must_use]
    #[rustfmt::skip]
    pub fn cluster1(&self) -> usize { self.cluster1 }

    /// Returns the larger merged label.
    #[must_use]
    #[rustfmt::skip]
    pub fn cluster2(&self) -> usize { self.cluster2 }

    /// Returns both merged labels as `(cluster1, cluster2)`.
    #[must_use]
    #[rustfmt::skip]
    pub fn clusters(&self) -> (usize, usize) { (self.cluster1, self.cluster2) }

    /// Returns the number of observations in the merged cluster.
    #[must_use]
    #[rustfmt::skip]
    pub fn size(&self) -> usize { self.size }
}

impl<T: Copy> Step<T> {
    /// Returns the dissimilarity at which the two clusters merged.
    #[must_use]
    #[rustfmt::skip]
    pub fn dissimilarity(&self) -> T { self.dissimilarity }
}

impl<T: Float> Step<T> {
    /// Compares labels and sizes exactly and dissimilarities within
    /// `epsilon`.
    #[must_use]
    pub fn eq_with_epsilon(&self, other: &Self, epsilon: T) -> bool {
        self.clusters() == other.clusters()
            && self.size == other.size
            && (self.dissimilarity - other.dissimilarity).abs() <= epsilon
    }
}
