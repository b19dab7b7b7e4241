//! Merge-order search strategies.
//!
//! Every engine drives the same loop: pick two active clusters, report the
//! merge to the assembler, rewrite the survivor's row with the method's
//! update rule, and retire the other slot. They differ only in how the pair
//! is found.

pub(crate) mod chain;
pub(crate) mod generic;
pub(crate) mod heap;
pub(crate) mod primitive;
pub(crate) mod spanning;

use crate::{
    condensed::CondensedMatrix,
    float::Float,
    method::{MergeSizes, Method},
    registry::ClusterRegistry,
};

/// Merges slot `absorbed` into slot `survivor`.
///
/// Rewrites `d(x, survivor)` for every other active slot `x` and hands each
/// new value to `visit` before retiring `absorbed`. Returns the merged size.
pub(crate) fn merge_slots<T: Float>(
    matrix: &mut CondensedMatrix<'_, T>,
    registry: &mut ClusterRegistry,
    method: Method,
    absorbed: usize,
    survivor: usize,
    mut visit: impl FnMut(usize, T),
) -> usize {
    let between = matrix[[absorbed, survivor]];
    let (left, right) = (registry.size(absorbed), registry.size(survivor));
    for other in registry.iter() {
        if other == absorbed || other == survivor {
            continue;
        }
        let updated = method.update(
            matrix[[other, absorbed]],
            matrix[[other, survivor]],
            between,
            MergeSizes {
                left,
                right,
                other: registry.size(other),
            },
        );
        matrix[[other, survivor]] = updated;
        visit(other, updated);
    }
    registry.merge(absorbed, survivor)
}
