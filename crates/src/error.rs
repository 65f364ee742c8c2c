//! Error types for everything around the widget.
//!
//! The widget itself never fails; these cover loading candidates, parsing the
//! command line and running the terminal program.

use thiserror::Error;

/// Failure while building the candidate universe.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {source_name}: {err}")]
    Io {
        source_name: String,
        #[source]
        err: std::io::Error,
    },
    #[error("candidate #{index} has no usable `name` field")]
    MissingName { index: usize },
    #[error("no candidates to choose from")]
    Empty,
}

/// Bad command-line input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown option `{0}` (see --help)")]
    UnknownFlag(String),
    #[error("option `{0}` requires a value")]
    MissingValue(String),
    #[error("invalid log level `{0}`")]
    BadLogLevel(String),
    #[error("cannot pre-select `{0}`: not among the candidates")]
    UnknownSelection(String),
}

/// Top-level error printed by the binary.
#[derive(Debug, Error)]
pub enum TagselError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("failed to start logger: {0}")]
    Logger(String),
    #[error("program error: {0}")]
    Program(String),
}
