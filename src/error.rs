use std::{io, path::PathBuf, process::ExitStatus};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can abort a sweep or a report run. There is no retry
/// path anywhere: each variant surfaces to the binary, which prints it
/// and exits nonzero.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("config file {} is not valid TOML: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to run {}: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The external executable started but did not exit cleanly. Its
    /// stderr is carried along since that is usually the only diagnostic.
    #[error("{} exited abnormally ({status}): {stderr}", .program.display())]
    ExitFailure {
        program: PathBuf,
        status: ExitStatus,
        stderr: String,
    },

    #[error("{} emitted {got} line(s) for {expected} thread(s)", .program.display())]
    LineCountMismatch {
        program: PathBuf,
        expected: usize,
        got: usize,
    },

    #[error("{} emitted a non-numeric timing field: {line:?}", .program.display())]
    MalformedOutput { program: PathBuf, line: String },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: expected header {expected:?}, found {found:?}", .path.display())]
    HeaderMismatch {
        path: PathBuf,
        expected: String,
        found: String,
    },

    #[error("{}:{line}: {message}", .path.display())]
    Schema {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("no rows to plot ({context})")]
    EmptyTable { context: String },

    /// Non-positive timings cannot feed the log-normalized heatmap.
    #[error("non-positive timing value {value} for machine {machine}, algorithm {algorithm}")]
    NonPositiveTime {
        machine: String,
        algorithm: String,
        value: f64,
    },

    #[error("failed to render {}: {message}", .path.display())]
    Render { path: PathBuf, message: String },
}
