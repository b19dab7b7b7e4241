//! Benchmark support crate for arbor.
//!
//! Provides seeded synthetic condensed matrices and parameter types used by
//! the Criterion benchmarks of the linkage entry points.

pub mod error;
pub mod params;
pub mod source;
