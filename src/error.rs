use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised outside the engine: configuration, terminal and logging.
///
/// The engine itself is total and never returns one of these from
/// `set_direction` or `step`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read config file {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("grid must be at least {min}x{min} cells, got {width}x{height}")]
    GridTooSmall { width: u16, height: u16, min: u16 },

    #[error("initial snake of length {length} does not fit a {width}x{height} grid")]
    InitialSnakeDoesNotFit { length: usize, width: u16, height: u16 },

    #[error("tick interval must be at least {min}ms, got {actual}ms")]
    TickIntervalTooShort { actual: u64, min: u64 },

    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

/// Result alias for fallible shell operations.
pub type Result<T> = std::result::Result<T, Error>;
