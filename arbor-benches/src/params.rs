//! Benchmark parameter types.
//!
//! Renders the Criterion benchmark identifiers for each linkage run.

use std::fmt;

use arbor_core::{Algorithm, Method};

/// Parameters for a single linkage benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct LinkageBenchParams {
    /// Number of observations in the condensed matrix.
    pub point_count: usize,
    /// Linkage method under test.
    pub method: Method,
    /// Algorithm under test.
    pub algorithm: Algorithm,
}

impl fmt::Display for LinkageBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={},method={},algorithm={}",
            self.point_count, self.method, self.algorithm
        )
    }
}
