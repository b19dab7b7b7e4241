//! Renderers for [`ClusterSummary`].

use std::io::{self, Write};

use serde::Serialize;

use super::commands::{ClusterSummary, OutputFormat, StepRecord};

#[derive(Serialize)]
struct JsonDocument<'a> {
    observations: usize,
    method: &'static str,
    algorithm: &'static str,
    precision: &'static str,
    steps: &'a [StepRecord],
}

/// Renders `summary` to `writer` in the requested `format`.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{ClusterSummary, OutputFormat, Precision, StepRecord, render_summary};
/// # use arbor_core::{Algorithm, Method};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ClusterSummary {
///     observations: 2,
///     method: Method::Single,
///     algorithm: Algorithm::NearestNeighborChain,
///     precision: Precision::F64,
///     steps: vec![StepRecord { cluster1: 0, cluster2: 1, dissimilarity: 0.5, size: 2 }],
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, OutputFormat::Csv, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "cluster1,cluster2,dissimilarity,size\n0,1,0.5,2\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(
    summary: &ClusterSummary,
    format: OutputFormat,
    writer: impl Write,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => render_text(summary, writer),
        OutputFormat::Csv => render_csv(summary, writer),
        OutputFormat::Json => render_json(summary, writer),
    }
}

fn render_text(summary: &ClusterSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "observations: {}  method: {}  algorithm: {}",
        summary.observations, summary.method, summary.algorithm
    )?;
    writeln!(
        writer,
        "{:>8}  {:>8}  {:>16}  {:>6}",
        "cluster1", "cluster2", "dissimilarity", "size"
    )?;
    for step in &summary.steps {
        writeln!(
            writer,
            "{:>8}  {:>8}  {:>16.6}  {:>6}",
            step.cluster1, step.cluster2, step.dissimilarity, step.size
        )?;
    }
    Ok(())
}

fn render_csv(summary: &ClusterSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "cluster1,cluster2,dissimilarity,size")?;
    for step in &summary.steps {
        writeln!(
            writer,
            "{},{},{},{}",
            step.cluster1, step.cluster2, step.dissimilarity, step.size
        )?;
    }
    Ok(())
}

fn render_json(summary: &ClusterSummary, mut writer: impl Write) -> io::Result<()> {
    let document = JsonDocument {
        observations: summary.observations,
        method: summary.method.name(),
        algorithm: summary.algorithm.name(),
        precision: summary.precision.name(),
        steps: &summary.steps,
    };
    serde_json::to_writer_pretty(&mut writer, &document)?;
    writeln!(writer)
}
