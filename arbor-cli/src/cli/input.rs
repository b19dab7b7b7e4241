//! Loading condensed matrices from text.

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::str::FromStr;

use arbor_core::condensed_len;
use tracing::{Span, field, instrument};

use super::commands::CliError;

const STDIN_MARKER: &str = "-";

/// Reads the whole input, from standard input when `path` is `-`.
#[instrument(name = "cli.read_input", err, fields(path = field::Empty, bytes = field::Empty))]
pub(super) fn read_input(path: &Path) -> Result<String, CliError> {
    let span = Span::current();
    span.record("path", field::display(path.display()));
    let io_error = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };

    let text = if path == Path::new(STDIN_MARKER) {
        let mut text = String::new();
        io::stdin().lock().read_to_string(&mut text).map_err(io_error)?;
        text
    } else {
        fs::read_to_string(path).map_err(io_error)?
    };
    span.record("bytes", text.len());
    Ok(text)
}

/// Parses every number in `text`, row by row in condensed order.
///
/// Numbers are separated by whitespace or commas, and `#` comments out the
/// rest of its line. Non-finite spellings such as `NaN` parse here and are
/// rejected by the clustering validation instead.
pub(super) fn parse_matrix<T: FromStr>(text: &str) -> Result<Vec<T>, CliError> {
    let mut values = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let content = line.split_once('#').map_or(line, |(before, _)| before);
        let tokens = content
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty());
        for token in tokens {
            let value = token.parse().map_err(|_| CliError::InvalidValue {
                line: index + 1,
                token: token.to_owned(),
            })?;
            values.push(value);
        }
    }
    Ok(values)
}

/// Finds the `N` with `N * (N - 1) / 2 == values`.
pub(super) fn infer_observations(values: usize) -> Result<usize, CliError> {
    if values == 0 {
        return Err(CliError::EmptyMatrix);
    }
    let mut observations = 2;
    loop {
        match condensed_len(observations) {
            Some(len) if len == values => return Ok(observations),
            Some(len) if len < values => observations += 1,
            _ => return Err(CliError::NotTriangular { values }),
        }
    }
}
