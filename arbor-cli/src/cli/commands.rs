//! Command implementations and argument parsing for the arbor CLI.

use std::io;
use std::path::PathBuf;
use std::str::FromStr;

use arbor_core::{Algorithm, Float, Linkage, LinkageError, Method, Step};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::input::{infer_observations, parse_matrix, read_input};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "arbor",
    about = "Agglomerative hierarchical clustering of condensed dissimilarity matrices."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Returns the output format requested by the parsed command.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        match &self.command {
            Command::Cluster(cluster) => cluster.format,
        }
    }
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Cluster a condensed dissimilarity matrix and print its dendrogram.
    Cluster(ClusterCommand),
}

/// Options accepted by the `cluster` command.
#[derive(Debug, Args, Clone)]
pub struct ClusterCommand {
    /// Condensed matrix file, or `-` to read standard input. Values are
    /// separated by whitespace or commas; `#` starts a comment.
    pub input: PathBuf,

    /// Linkage method used to update dissimilarities after each merge.
    #[arg(long, short, default_value_t = Method::Average)]
    pub method: Method,

    /// Merge search; `auto` picks the fastest one supporting the method.
    #[arg(long, short, default_value_t = Algorithm::Auto)]
    pub algorithm: Algorithm,

    /// Floating-point precision used while clustering.
    #[arg(long, value_enum, default_value_t = Precision::F64)]
    pub precision: Precision,

    /// Number of observations. Inferred from the value count when omitted.
    #[arg(long, short = 'n', value_parser = clap::value_parser!(usize))]
    pub observations: Option<usize>,

    /// Rendering of the dendrogram on `stdout`.
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Element type the matrix is parsed into before clustering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Precision {
    /// Single precision.
    F32,
    /// Double precision.
    F64,
}

impl Precision {
    /// Returns the name accepted on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }
}

/// Output renderings supported by [`render_summary`](super::render_summary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned table for terminals.
    Text,
    /// Comma-separated values with a header row.
    Csv,
    /// A single JSON document.
    Json,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading the input failed.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure; `-` for standard input.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// A token in the input is not a number.
    #[error("line {line}: `{token}` is not a number")]
    InvalidValue {
        /// One-based line number of the token.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// The input held no values and no observation count was given.
    #[error("input contains no dissimilarities; pass `--observations 1` for a single observation")]
    EmptyMatrix,
    /// The value count is not `N * (N - 1) / 2` for any `N`.
    #[error("{values} values do not form a condensed matrix; pass `--observations` explicitly")]
    NotTriangular {
        /// Number of values read.
        values: usize,
    },
    /// Clustering failed.
    #[error(transparent)]
    Core(#[from] LinkageError),
}

/// One merge of the rendered dendrogram, widened to `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepRecord {
    /// Smaller label of the merged pair.
    pub cluster1: usize,
    /// Larger label of the merged pair.
    pub cluster2: usize,
    /// Dissimilarity at which the pair merged.
    pub dissimilarity: f64,
    /// Number of observations in the new cluster.
    pub size: usize,
}

impl<T: Float> From<&Step<T>> for StepRecord {
    fn from(step: &Step<T>) -> Self {
        Self {
            cluster1: step.cluster1(),
            cluster2: step.cluster2(),
            dissimilarity: step.dissimilarity().into_f64(),
            size: step.size(),
        }
    }
}

/// Outcome of a `cluster` command.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterSummary {
    /// Number of clustered observations.
    pub observations: usize,
    /// Method the dendrogram was built with.
    pub method: Method,
    /// Concrete algorithm that ran, never [`Algorithm::Auto`].
    pub algorithm: Algorithm,
    /// Precision the matrix was clustered at.
    pub precision: Precision,
    /// Merges in dendrogram order.
    pub steps: Vec<StepRecord>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be read or parsed, or when
/// clustering fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{Cli, Command, ClusterCommand, OutputFormat, Precision, run_cli};
/// # use arbor_core::{Algorithm, Method};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "1.0 4.0\n2.0\n")?;
/// let cli = Cli {
///     command: Command::Cluster(ClusterCommand {
///         input: file.path().to_path_buf(),
///         method: Method::Single,
///         algorithm: Algorithm::Auto,
///         precision: Precision::F64,
///         observations: None,
///         format: OutputFormat::Text,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.observations, 3);
/// assert_eq!(summary.steps.len(), 2);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ClusterSummary, CliError> {
    match cli.command {
        Command::Cluster(cluster) => {
            Span::current().record("command", field::display("cluster"));
            run_cluster(cluster)
        }
    }
}

#[instrument(
    name = "cli.cluster",
    err,
    skip(command),
    fields(
        input = field::Empty,
        method = field::Empty,
        algorithm = field::Empty,
        precision = field::Empty,
    ),
)]
pub(super) fn run_cluster(command: ClusterCommand) -> Result<ClusterSummary, CliError> {
    let linkage = Linkage::builder()
        .with_method(command.method)
        .with_algorithm(command.algorithm)
        .build()?;
    let method = linkage.method();
    let algorithm = linkage.algorithm().resolve(method);

    let span = Span::current();
    span.record("input", field::display(command.input.display()));
    span.record("method", field::display(method));
    span.record("algorithm", field::display(algorithm));
    span.record("precision", field::display(command.precision.name()));

    let text = read_input(&command.input)?;
    let (observations, steps) = match command.precision {
        Precision::F32 => cluster_as::<f32>(&text, command.observations, &linkage)?,
        Precision::F64 => cluster_as::<f64>(&text, command.observations, &linkage)?,
    };

    info!(observations, merges = steps.len(), "command completed");
    Ok(ClusterSummary {
        observations,
        method,
        algorithm,
        precision: command.precision,
        steps,
    })
}

fn cluster_as<T: Float + FromStr>(
    text: &str,
    observations: Option<usize>,
    linkage: &Linkage,
) -> Result<(usize, Vec<StepRecord>), CliError> {
    let mut matrix = parse_matrix::<T>(text)?;
    let observations = match observations {
        Some(observations) => observations,
        None => infer_observations(matrix.len())?,
    };
    let dendrogram = linkage.run(&mut matrix, observations)?;
    Ok((observations, dendrogram.iter().map(StepRecord::from).collect()))
}
