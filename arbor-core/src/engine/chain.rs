//! Nearest-neighbour chain search for reducible methods.
//!
//! The chain is a path of clusters in which each element is the nearest
//! neighbour of its predecessor. Once the top two elements are each other's
//! nearest neighbours, reducibility guarantees they would be merged by the
//! naive global search as well, so the engine merges them immediately and
//! keeps the rest of the chain. Merges are discovered out of global order and
//! must be sorted by the assembler.

use tracing::debug;

use super::merge_slots;
use crate::{
    assembler::DendrogramAssembler, condensed::CondensedMatrix, float::Float, method::Method,
    state::LinkageState,
};

pub(crate) fn nearest_neighbor_chain<T: Float>(
    matrix: &mut CondensedMatrix<'_, T>,
    method: Method,
    state: &mut LinkageState<T>,
    assembler: &mut DendrogramAssembler<T>,
) {
    debug_assert!(method.is_reducible(), "{method} linkage is not reducible");
    let LinkageState {
        registry, chain, ..
    } = state;
    registry.reset(matrix.observations());
    chain.clear();

    let mut longest_chain = 0;
    while registry.active_count() > 1 {
        if chain.is_empty() {
            let Some(first) = registry.first() else {
                break;
            };
            chain.push(first);
        }

        let top = chain[chain.len() - 1];
        let previous = chain.len().checked_sub(2).map(|index| chain[index]);

        // The predecessor wins ties; otherwise the smallest slot does.
        let mut nearest = previous.map(|slot| (slot, matrix[[top, slot]]));
        for other in registry.iter() {
            if other == top {
                continue;
            }
            let dissimilarity = matrix[[top, other]];
            if nearest.is_none_or(|(_, best)| dissimilarity < best) {
                nearest = Some((other, dissimilarity));
            }
        }
        let Some((neighbor, dissimilarity)) = nearest else {
            break;
        };

        if Some(neighbor) != previous {
            chain.push(neighbor);
            longest_chain = longest_chain.max(chain.len());
            continue;
        }

        chain.truncate(chain.len() - 2);
        let (absorbed, survivor) = if top < neighbor {
            (top, neighbor)
        } else {
            (neighbor, top)
        };
        assembler.push(absorbed, survivor, dissimilarity);
        merge_slots(matrix, registry, method, absorbed, survivor, |_, _| {});
        if chain.is_empty() {
            chain.push(survivor);
        }
    }

    debug!(
        merges = assembler.len(),
        longest_chain, "nearest-neighbour chain finished"
    );
}
