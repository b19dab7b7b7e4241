//! Exhaustive global-minimum search.
//!
//! Scans every active pair before each merge, so it costs `O(N^3)` time. It
//! makes no assumption about the method and serves as the reference that the
//! faster engines are checked against.

use tracing::debug;

use super::merge_slots;
use crate::{
    assembler::DendrogramAssembler, condensed::CondensedMatrix, float::Float, method::Method,
    state::LinkageState,
};

pub(crate) fn primitive<T: Float>(
    matrix: &mut CondensedMatrix<'_, T>,
    method: Method,
    state: &mut LinkageState<T>,
    assembler: &mut DendrogramAssembler<T>,
) {
    let registry = &mut state.registry;
    registry.reset(matrix.observations());

    while registry.active_count() > 1 {
        // Ascending scan with a strict comparison keeps the smallest pair.
        let mut closest: Option<(usize, usize, T)> = None;
        for row in registry.iter() {
            for column in registry.iter_after(row) {
                let dissimilarity = matrix[[row, column]];
                if closest.is_none_or(|(_, _, best)| dissimilarity < best) {
                    closest = Some((row, column, dissimilarity));
                }
            }
        }
        let Some((absorbed, survivor, dissimilarity)) = closest else {
            break;
        };
        assembler.push(absorbed, survivor, dissimilarity);
        merge_slots(matrix, registry, method, absorbed, survivor, |_, _| {});
    }

    debug!(merges = assembler.len(), "primitive search finished");
}
