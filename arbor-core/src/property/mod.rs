//! Property-based tests for the clustering engines.
//!
//! Cross-checks every fast engine against the exhaustive search, validates
//! the structural invariants every dendrogram must satisfy, and checks that
//! relabelling the observations relabels the dendrogram consistently.

mod equivalence;
mod permutation;
mod strategies;
mod structural;
mod types;
