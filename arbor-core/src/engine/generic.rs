//! Generic search that tolerates inversions.
//!
//! Every active slot caches a candidate nearest neighbour among the slots to
//! its right, and a min-heap orders slots by the cached dissimilarity. The
//! cached value is a lower bound on the row minimum; when the heap's top no
//! longer matches the matrix the row is rescanned before it can be merged.
//! Merges are emitted in final order, so centroid and median inversions are
//! reported as they happen.

use tracing::debug;

use super::{heap::NearestHeap, merge_slots};
use crate::{
    assembler::DendrogramAssembler, condensed::CondensedMatrix, float::Float, method::Method,
    registry::ClusterRegistry, state::LinkageState,
};

pub(crate) fn generic<T: Float>(
    matrix: &mut CondensedMatrix<'_, T>,
    method: Method,
    state: &mut LinkageState<T>,
    assembler: &mut DendrogramAssembler<T>,
) {
    let LinkageState {
        registry,
        heap,
        nearest,
        ..
    } = state;
    let observations = matrix.observations();
    registry.reset(observations);
    heap.reset(observations);
    nearest.clear();
    nearest.resize(observations, usize::MAX);
    for slot in 0..observations {
        rescan_row(matrix, registry, heap, nearest, slot);
    }

    let mut rescans = 0_usize;
    let mut inversions = 0_usize;
    let mut previous: Option<T> = None;
    while registry.active_count() > 1 {
        let Some(absorbed) = heap.peek() else {
            break;
        };
        let survivor = nearest[absorbed];
        if matrix[[absorbed, survivor]] != heap.priority(absorbed) {
            rescan_row(matrix, registry, heap, nearest, absorbed);
            rescans += 1;
            continue;
        }

        let dissimilarity = heap.priority(absorbed);
        if previous.is_some_and(|last| dissimilarity < last) {
            inversions += 1;
        }
        previous = Some(dissimilarity);
        assembler.push(absorbed, survivor, dissimilarity);
        heap.remove(absorbed);

        let mut row_minimum: Option<(usize, T)> = None;
        merge_slots(matrix, registry, method, absorbed, survivor, |other, updated| {
            if other > survivor {
                if row_minimum.is_none_or(|(_, best)| updated < best) {
                    row_minimum = Some((other, updated));
                }
                return;
            }
            let current = heap.priority(other);
            if updated < current || (updated == current && survivor < nearest[other]) {
                nearest[other] = survivor;
                heap.set_priority(other, updated);
            } else if nearest[other] == absorbed {
                nearest[other] = survivor;
            }
        });

        match row_minimum {
            Some((neighbor, dissimilarity)) => {
                nearest[survivor] = neighbor;
                heap.set_priority(survivor, dissimilarity);
            }
            None => heap.remove(survivor),
        }
    }

    debug!(
        merges = assembler.len(),
        rescans, inversions, "generic search finished"
    );
}

/// Recomputes the exact nearest neighbour of `slot` among active slots to
/// its right, dropping the slot from the heap when there are none.
fn rescan_row<T: Float>(
    matrix: &CondensedMatrix<'_, T>,
    registry: &ClusterRegistry,
    heap: &mut NearestHeap<T>,
    nearest: &mut [usize],
    slot: usize,
) {
    let mut best: Option<(usize, T)> = None;
    for other in registry.iter_after(slot) {
        let dissimilarity = matrix[[slot, other]];
        if best.is_none_or(|(_, current)| dissimilarity < current) {
            best = Some((other, dissimilarity));
        }
    }
    match best {
        Some((neighbor, dissimilarity)) => {
            nearest[slot] = neighbor;
            heap.set_priority(slot, dissimilarity);
        }
        None => heap.remove(slot),
    }
}
