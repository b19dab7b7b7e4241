//! Linkage methods and their Lance–Williams update rules.
//!
//! When clusters `a` and `b` merge into `ab`, the dissimilarity from `ab` to
//! every other active cluster `c` is derived from `d(a, c)`, `d(b, c)`,
//! `d(a, b)` and the three cluster sizes. [`Method::update`] is the single
//! dispatch point for that rule; the engines never branch on the method
//! otherwise.
//!
//! Ward, centroid and median are evaluated on squared dissimilarities. The
//! matrix is squared once before clustering, the update below runs in
//! squared form, and every emitted dissimilarity is square-rooted once at
//! assembly.

use std::{fmt, str::FromStr, sync::Arc};

use crate::{error::LinkageError, float::Float};

/// Criterion for the dissimilarity between a newly merged cluster and every
/// other cluster.
///
/// # Examples
/// ```
/// use arbor_core::Method;
///
/// let method: Method = "ward".parse().expect("ward is a known method");
/// assert_eq!(method, Method::Ward);
/// assert!(method.is_reducible());
/// assert!(!Method::Centroid.is_reducible());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Method {
    /// Minimum dissimilarity over all cross-cluster pairs of observations.
    Single,
    /// Maximum dissimilarity over all cross-cluster pairs of observations.
    Complete,
    /// Mean dissimilarity over all cross-cluster pairs of observations
    /// (UPGMA).
    Average,
    /// Unweighted mean of the two merged clusters' dissimilarities (WPGMA).
    Weighted,
    /// Ward's minimum variance criterion.
    Ward,
    /// Distance between cluster centroids. May produce inversions.
    Centroid,
    /// Distance between cluster medians (WPGMC). May produce inversions.
    Median,
}

impl Method {
    /// Every supported method, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Single,
        Self::Complete,
        Self::Average,
        Self::Weighted,
        Self::Ward,
        Self::Centroid,
        Self::Median,
    ];

    /// Returns the lowercase name used by [`FromStr`] and [`fmt::Display`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Complete => "complete",
            Self::Average => "average",
            Self::Weighted => "weighted",
            Self::Ward => "ward",
            Self::Centroid => "centroid",
            Self::Median => "median",
        }
    }

    /// Returns `true` when merging two clusters can never bring a third
    /// cluster closer to anything than its current nearest neighbour.
    ///
    /// Reducible methods produce monotone dendrograms and can be clustered
    /// with the nearest-neighbour chain algorithm.
    #[must_use]
    pub const fn is_reducible(self) -> bool {
        !matches!(self, Self::Centroid | Self::Median)
    }

    /// Returns `true` when the update rule runs on squared dissimilarities.
    #[must_use]
    pub const fn operates_on_squares(self) -> bool {
        matches!(self, Self::Ward | Self::Centroid | Self::Median)
    }

    /// Squares every entry when this method operates on squares.
    pub(crate) fn prepare<T: Float>(self, data: &mut [T]) {
        if self.operates_on_squares() {
            for value in data.iter_mut() {
                *value = *value * *value;
            }
        }
    }

    /// Maps an internal dissimilarity back to the caller's scale.
    ///
    /// Squared-space values that cancellation pushed below zero are treated
    /// as zero before the square root.
    #[inline]
    pub(crate) fn finish<T: Float>(self, value: T) -> T {
        if self.operates_on_squares() {
            value.max(T::zero()).sqrt()
        } else {
            value
        }
    }

    /// Computes `d(ab, c)` from `d(a, c)`, `d(b, c)` and `d(a, b)`.
    #[inline]
    pub(crate) fn update<T: Float>(
        self,
        to_left: T,
        to_right: T,
        between: T,
        sizes: MergeSizes,
    ) -> T {
        let size_left = T::from_size(sizes.left);
        let size_right = T::from_size(sizes.right);
        match self {
            Self::Single => to_left.min(to_right),
            Self::Complete => to_left.max(to_right),
            Self::Average => {
                (size_left * to_left + size_right * to_right) / (size_left + size_right)
            }
            Self::Weighted => (to_left + to_right) / T::from_size(2),
            Self::Ward => {
                let size_other = T::from_size(sizes.other);
                ((size_left + size_other) * to_left + (size_right + size_other) * to_right
                    - size_other * between)
                    / (size_left + size_right + size_other)
            }
            Self::Centroid => {
                let merged = size_left + size_right;
                (size_left * to_left + size_right * to_right) / merged
                    - size_left * size_right * between / (merged * merged)
            }
            Self::Median => {
                (to_left + to_right) / T::from_size(2) - between / T::from_size(4)
            }
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = LinkageError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalised = raw.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|method| method.name() == normalised)
            .ok_or_else(|| LinkageError::UnknownMethod {
                name: Arc::from(raw),
            })
    }
}

/// Sizes of the two merging clusters and of the cluster being updated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct MergeSizes {
    pub(crate) left: usize,
    pub(crate) right: usize,
    pub(crate) other: usize,
}
