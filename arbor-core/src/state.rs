//! Reusable scratch space for clustering runs.

use crate::{
    engine::heap::NearestHeap, float::Float, labels::LabelForest, registry::ClusterRegistry,
};

/// Working memory shared by every clustering algorithm.
///
/// A run sizes the buffers it needs and leaves them allocated afterwards, so
/// passing the same state to repeated [`Linkage::run_with`] calls amortises
/// allocation across clusterings of similar size. The state carries no
/// information between runs.
///
/// [`Linkage::run_with`]: crate::Linkage::run_with
///
/// # Examples
/// ```
/// use arbor_core::{LinkageBuilder, LinkageState, Method};
///
/// let linkage = LinkageBuilder::new().with_method(Method::Complete).build()?;
/// let mut state = LinkageState::new();
///
/// for _ in 0..3 {
///     let mut matrix = vec![2.0_f32, 5.0, 3.0];
///     let dendrogram = linkage.run_with(&mut state, &mut matrix, 3)?;
///     assert_eq!(dendrogram[1].dissimilarity(), 5.0);
/// }
/// # Ok::<(), arbor_core::LinkageError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct LinkageState<T> {
    pub(crate) registry: ClusterRegistry,
    pub(crate) chain: Vec<usize>,
    pub(crate) heap: NearestHeap<T>,
    pub(crate) nearest: Vec<usize>,
    pub(crate) min_dists: Vec<T>,
    pub(crate) labels: LabelForest,
}

impl<T: Float> LinkageState<T> {
    /// Creates an empty state; buffers grow on first use.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
