//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of `.expect()`.

use arbor_core::LinkageError;

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic matrix generation failed.
    #[error("synthetic matrix generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Building or running a linkage failed.
    #[error("linkage failed: {0}")]
    Linkage(#[from] LinkageError),
}
