//! Builder utilities for configuring hierarchical clustering.
//!
//! Exposes the algorithm selection surface and the validation performed
//! before a [`Linkage`] runner is constructed.

use std::{fmt, str::FromStr, sync::Arc};

use crate::{Result, error::LinkageError, linkage::Linkage, method::Method};

/// Selects the merge-order search used by [`Linkage::run`].
///
/// `Auto` resolves deterministically from the method: the
/// nearest-neighbour chain for reducible methods and the generic search
/// for centroid and median. The explicit variants exist for benchmarking and
/// cross-checking.
///
/// Equal dissimilarities are resolved by matrix row, not by dendrogram
/// label. The searches prefer the pair whose rows come first, and the chain
/// additionally keeps its predecessor on a tie. A merged cluster occupies the
/// larger row of its pair, so on tied input it can beat a cluster with a
/// smaller label that sits in a later row.
///
/// # Examples
/// ```
/// use arbor_core::{Algorithm, Method, linkage};
///
/// assert_eq!(Algorithm::Auto.resolve(Method::Ward), Algorithm::NearestNeighborChain);
/// assert_eq!(Algorithm::Auto.resolve(Method::Median), Algorithm::Generic);
/// assert!(!Algorithm::MinimumSpanningTree.supports(Method::Complete));
///
/// // {0, 1} lives in row 1, ahead of observation 3, and wins the second tie.
/// let mut tied = vec![1.0_f64; 6];
/// let dendrogram = linkage(&mut tied, 4, Method::Average)?;
/// let merges: Vec<_> = dendrogram.iter().map(|step| step.clusters()).collect();
/// assert_eq!(merges, [(0, 1), (2, 4), (3, 5)]);
/// # Ok::<(), arbor_core::LinkageError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Let the library pick the fastest algorithm that supports the method.
    Auto,
    /// Nearest-neighbour chain search. Reducible methods only.
    NearestNeighborChain,
    /// Cached nearest-neighbour search with a priority queue. Supports every
    /// method, including those that produce inversions.
    Generic,
    /// Exhaustive `O(N^3)` global-minimum search. Supports every method.
    Primitive,
    /// Prim's minimum spanning tree. Single linkage only.
    MinimumSpanningTree,
}

impl Algorithm {
    /// Every algorithm, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Auto,
        Self::NearestNeighborChain,
        Self::Generic,
        Self::Primitive,
        Self::MinimumSpanningTree,
    ];

    /// Returns the kebab-case name used by [`FromStr`] and [`fmt::Display`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::NearestNeighborChain => "nn-chain",
            Self::Generic => "generic",
            Self::Primitive => "primitive",
            Self::MinimumSpanningTree => "mst",
        }
    }

    /// Returns `true` when this algorithm can compute `method` linkage.
    #[must_use]
    pub const fn supports(self, method: Method) -> bool {
        match self {
            Self::Auto | Self::Generic | Self::Primitive => true,
            Self::NearestNeighborChain => method.is_reducible(),
            Self::MinimumSpanningTree => matches!(method, Method::Single),
        }
    }

    /// Replaces [`Algorithm::Auto`] with the concrete algorithm it selects
    /// for `method`; other variants are returned unchanged.
    #[must_use]
    pub const fn resolve(self, method: Method) -> Self {
        match self {
            Self::Auto if method.is_reducible() => Self::NearestNeighborChain,
            Self::Auto => Self::Generic,
            other => other,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = LinkageError;

    fn from_str(raw: &str) -> Result<Self> {
        let normalised = raw.trim().to_ascii_lowercase();
        let alias = match normalised.as_str() {
            "nnchain" | "nn_chain" | "chain" => "nn-chain",
            "minimum-spanning-tree" | "spanning-tree" => "mst",
            other => other,
        };
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == alias)
            .ok_or_else(|| LinkageError::UnknownAlgorithm {
                name: Arc::from(raw),
            })
    }
}

/// Configures and constructs [`Linkage`] runners.
///
/// # Examples
/// ```
/// use arbor_core::{Algorithm, LinkageBuilder, Method};
///
/// let linkage = LinkageBuilder::new()
///     .with_method(Method::Ward)
///     .with_algorithm(Algorithm::Generic)
///     .build()
///     .expect("generic search supports ward");
/// assert_eq!(linkage.method(), Method::Ward);
/// assert_eq!(linkage.algorithm(), Algorithm::Generic);
/// ```
#[derive(Debug, Clone)]
pub struct LinkageBuilder {
    method: Method,
    algorithm: Algorithm,
}

impl Default for LinkageBuilder {
    fn default() -> Self {
        Self {
            method: Method::Average,
            algorithm: Algorithm::Auto,
        }
    }
}

impl LinkageBuilder {
    /// Creates a builder for average linkage with automatic algorithm
    /// selection.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{Algorithm, LinkageBuilder, Method};
    ///
    /// let builder = LinkageBuilder::new();
    /// assert_eq!(builder.method(), Method::Average);
    /// assert_eq!(builder.algorithm(), Algorithm::Auto);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the linkage method.
    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Returns the configured linkage method.
    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    /// Sets the merge-order search algorithm.
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Returns the configured algorithm.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Validates the configuration and constructs a [`Linkage`] runner.
    ///
    /// # Errors
    /// Returns [`LinkageError::UnsupportedAlgorithm`] when the algorithm
    /// cannot compute the method, for example the nearest-neighbour chain
    /// with centroid linkage.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{Algorithm, LinkageBuilder, LinkageErrorCode, Method};
    ///
    /// let err = LinkageBuilder::new()
    ///     .with_method(Method::Centroid)
    ///     .with_algorithm(Algorithm::NearestNeighborChain)
    ///     .build()
    ///     .expect_err("centroid linkage is not reducible");
    /// assert_eq!(err.code(), LinkageErrorCode::UnsupportedAlgorithm);
    /// ```
    pub fn build(self) -> Result<Linkage> {
        if !self.algorithm.supports(self.method) {
            return Err(LinkageError::UnsupportedAlgorithm {
                method: self.method,
                algorithm: self.algorithm,
            });
        }
        Ok(Linkage::new(self.method, self.algorithm))
    }
}
