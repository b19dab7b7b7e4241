//! Arbor core library.
//!
//! Agglomerative hierarchical clustering over condensed dissimilarity
//! matrices. Given the `N * (N - 1) / 2` pairwise dissimilarities of `N`
//! observations, [`linkage`] repeatedly merges the two closest clusters and
//! returns the `N - 1` merges as a [`Dendrogram`].
//!
//! Seven [`Method`]s are supported. The reducible ones (single, complete,
//! average, weighted and ward) run on the nearest-neighbour chain in
//! `O(N^2)` time; centroid and median may produce inversions and run on a
//! generic cached nearest-neighbour search. [`LinkageBuilder`] selects an
//! explicit [`Algorithm`] when needed, and [`LinkageState`] lets repeated
//! runs reuse scratch memory.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod assembler;
mod builder;
mod condensed;
mod dendrogram;
mod engine;
mod error;
mod float;
mod labels;
mod linkage;
mod method;
mod registry;
mod state;

#[cfg(test)]
mod property;
#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    builder::{Algorithm, LinkageBuilder},
    condensed::{condensed_len, condensed_offset, condensed_pair},
    dendrogram::{Dendrogram, Step},
    error::{LinkageError, LinkageErrorCode, Result},
    float::Float,
    linkage::{Linkage, linkage},
    method::Method,
    state::LinkageState,
};
