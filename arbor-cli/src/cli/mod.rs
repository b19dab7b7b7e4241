//! Command-line interface for clustering condensed matrices.
//!
//! The single `cluster` command reads a condensed dissimilarity matrix from a
//! file or standard input, runs the configured linkage, and renders the
//! dendrogram as a table, CSV, or JSON.

mod commands;
mod input;
mod render;

pub use commands::{
    Cli, CliError, ClusterCommand, ClusterSummary, Command, OutputFormat, Precision, StepRecord,
    run_cli,
};
pub use render::render_summary;
