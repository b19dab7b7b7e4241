//! Single linkage via a Prim-style minimum spanning tree.
//!
//! Grows the tree from slot 0, keeping for every slot outside the tree its
//! smallest dissimilarity to any slot inside. Each round attaches the closest
//! outside slot and reports it merged with the previously attached slot;
//! after sorting by dissimilarity the union-find relabelling yields the
//! single linkage dendrogram. The matrix is only read.

use tracing::debug;

use crate::{
    assembler::DendrogramAssembler, condensed::CondensedMatrix, float::Float, state::LinkageState,
};

pub(crate) fn minimum_spanning_tree<T: Float>(
    matrix: &CondensedMatrix<'_, T>,
    state: &mut LinkageState<T>,
    assembler: &mut DendrogramAssembler<T>,
) {
    let LinkageState {
        registry,
        min_dists,
        ..
    } = state;
    let observations = matrix.observations();
    registry.reset(observations);
    min_dists.clear();
    min_dists.resize(observations, T::infinity());

    let mut current = 0;
    registry.deactivate(current);
    while registry.active_count() > 0 {
        let mut closest: Option<(usize, T)> = None;
        for slot in registry.iter() {
            let distance = min_dists[slot].min(matrix[[current, slot]]);
            min_dists[slot] = distance;
            if closest.is_none_or(|(_, best)| distance < best) {
                closest = Some((slot, distance));
            }
        }
        let Some((next, dissimilarity)) = closest else {
            break;
        };
        assembler.push(current, next, dissimilarity);
        registry.deactivate(next);
        current = next;
    }

    debug!(merges = assembler.len(), "minimum spanning tree finished");
}
