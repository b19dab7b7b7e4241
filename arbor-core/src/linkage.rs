//! Hierarchical clustering entry points.
//!
//! Validates the condensed matrix, prepares it for the configured method,
//! dispatches to a merge-order engine and assembles the dendrogram.

use tracing::{debug, instrument};

use crate::{
    Result,
    assembler::{DendrogramAssembler, MergeOrder},
    builder::{Algorithm, LinkageBuilder},
    condensed::{CondensedMatrix, condensed_len, condensed_pair},
    dendrogram::Dendrogram,
    engine::{
        chain::nearest_neighbor_chain, generic::generic, primitive::primitive,
        spanning::minimum_spanning_tree,
    },
    error::LinkageError,
    float::Float,
    method::Method,
    state::LinkageState,
};

/// Clusters `observations` points described by a condensed dissimilarity
/// matrix with the fastest algorithm for `method`.
///
/// `matrix` must hold `observations * (observations - 1) / 2` finite values,
/// the strict upper triangle of the dissimilarity matrix in row order. Its
/// contents are overwritten on success and must be treated as scratch
/// afterwards. Ties are broken by matrix row as described on [`Algorithm`].
///
/// # Errors
/// See [`Linkage::run_with`].
///
/// # Examples
/// ```
/// use arbor_core::{Method, linkage};
///
/// let mut matrix = vec![
///     28.7987, 20.7760, 30.8465, 23.8523, 23.6737,
///     8.3415, 14.8496, 5.8294, 10.2469,
///     14.3255, 3.1238, 6.2060,
///     12.4242, 8.3333,
///     5.3083,
/// ];
/// let dendrogram = linkage(&mut matrix, 6, Method::Average)?;
///
/// assert_eq!(dendrogram.len(), 5);
/// assert_eq!(dendrogram[0].clusters(), (2, 4));
/// assert_eq!(dendrogram[4].clusters(), (0, 9));
/// assert_eq!(dendrogram[4].size(), 6);
/// # Ok::<(), arbor_core::LinkageError>(())
/// ```
pub fn linkage<T: Float>(
    matrix: &mut [T],
    observations: usize,
    method: Method,
) -> Result<Dendrogram<T>> {
    Linkage::new(method, Algorithm::Auto).run(matrix, observations)
}

/// Configured hierarchical clustering runner produced by
/// [`LinkageBuilder`].
///
/// A runner holds no scratch memory and can be shared freely; independent
/// runs on disjoint matrices may proceed in parallel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Linkage {
    method: Method,
    algorithm: Algorithm,
}

impl Default for Linkage {
    fn default() -> Self {
        Self::new(Method::Average, Algorithm::Auto)
    }
}

impl Linkage {
    pub(crate) const fn new(method: Method, algorithm: Algorithm) -> Self {
        Self { method, algorithm }
    }

    /// Returns a builder populated with default parameters.
    #[must_use]
    pub fn builder() -> LinkageBuilder {
        LinkageBuilder::new()
    }

    /// Returns the linkage method applied by this runner.
    #[must_use]
    #[rustfmt::skip]
    pub fn method(&self) -> Method { self.method }

    /// Returns the algorithm requested for this runner, which may be
    /// [`Algorithm::Auto`].
    #[must_use]
    #[rustfmt::skip]
    pub fn algorithm(&self) -> Algorithm { self.algorithm }

    /// Clusters the condensed matrix with freshly allocated scratch space.
    ///
    /// # Errors
    /// See [`Linkage::run_with`].
    pub fn run<T: Float>(&self, matrix: &mut [T], observations: usize) -> Result<Dendrogram<T>> {
        let mut state = LinkageState::new();
        self.run_with(&mut state, matrix, observations)
    }

    /// Clusters the condensed matrix, reusing the buffers held by `state`.
    ///
    /// Every check happens before `matrix` is modified, so on error the
    /// caller's buffer is left exactly as it was.
    ///
    /// # Errors
    /// - [`LinkageError::EmptyInput`] when `observations` is zero.
    /// - [`LinkageError::ObservationOverflow`] when the condensed length for
    ///   `observations` does not fit in `usize`.
    /// - [`LinkageError::MatrixLengthMismatch`] when `matrix` does not hold
    ///   exactly one value per pair.
    /// - [`LinkageError::NonFiniteDissimilarity`] when a value is NaN or
    ///   infinite.
    /// - [`LinkageError::SquaredOverflow`] when ward, centroid or median
    ///   linkage would overflow squaring a value.
    /// - [`LinkageError::AllocationFailed`] when the dendrogram storage cannot
    ///   be reserved.
    #[instrument(
        name = "core.linkage",
        err,
        skip(self, state, matrix),
        fields(
            observations = observations,
            method = %self.method,
            algorithm = %self.algorithm.resolve(self.method)
        ),
    )]
    pub fn run_with<T: Float>(
        &self,
        state: &mut LinkageState<T>,
        matrix: &mut [T],
        observations: usize,
    ) -> Result<Dendrogram<T>> {
        validate(matrix, observations, self.method)?;
        let mut assembler = DendrogramAssembler::with_capacity(observations)?;
        if observations == 1 {
            return Ok(assembler.finish(self.method, MergeOrder::Emitted, &mut state.labels));
        }

        self.method.prepare(matrix);
        let mut matrix = CondensedMatrix::new(matrix, observations);
        let order = match self.algorithm.resolve(self.method) {
            Algorithm::NearestNeighborChain => {
                nearest_neighbor_chain(&mut matrix, self.method, state, &mut assembler);
                MergeOrder::ByDissimilarity
            }
            Algorithm::MinimumSpanningTree => {
                minimum_spanning_tree(&matrix, state, &mut assembler);
                MergeOrder::ByDissimilarity
            }
            Algorithm::Primitive => {
                primitive(&mut matrix, self.method, state, &mut assembler);
                MergeOrder::Emitted
            }
            Algorithm::Generic | Algorithm::Auto => {
                generic(&mut matrix, self.method, state, &mut assembler);
                MergeOrder::Emitted
            }
        };
        debug!(merges = assembler.len(), ?order, "assembling dendrogram");
        Ok(assembler.finish(self.method, order, &mut state.labels))
    }
}

/// Rejects inputs the engines cannot cluster without touching `matrix`.
fn validate<T: Float>(matrix: &[T], observations: usize, method: Method) -> Result<()> {
    if observations == 0 {
        return Err(LinkageError::EmptyInput);
    }
    let expected =
        condensed_len(observations).ok_or(LinkageError::ObservationOverflow { observations })?;
    if matrix.len() != expected {
        return Err(LinkageError::MatrixLengthMismatch {
            observations,
            expected,
            actual: matrix.len(),
        });
    }

    let squares = method.operates_on_squares();
    for (index, &value) in matrix.iter().enumerate() {
        let non_finite = !value.is_finite();
        if non_finite || (squares && !(value * value).is_finite()) {
            let (row, column) = condensed_pair(observations, index).unwrap_or((0, 0));
            return Err(if non_finite {
                LinkageError::NonFiniteDissimilarity { index, row, column }
            } else {
                LinkageError::SquaredOverflow { index, row, column }
            });
        }
    }
    Ok(())
}
