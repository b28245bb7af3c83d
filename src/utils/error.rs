//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while walking the chain directory
#[derive(Error, Debug)]
pub enum WalkError {
    #[error("Cannot list directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid block id: {0}")]
    InvalidBlockId(String),
}

/// Errors that can occur while parsing a response file
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Missing response type")]
    MissingType,

    #[error("Missing gas field: {0}")]
    MissingField(&'static str),

    #[error("Invalid value for {field}: {value:?}")]
    InvalidGas { field: &'static str, value: String },
}

/// Errors that can occur during aggregation
#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("Cannot filter on block {block}: {source}")]
    InvalidBlockId {
        block: String,
        #[source]
        source: WalkError,
    },
}

/// Errors raised while writing the JSON report
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Cannot write report {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot encode report: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid report path: {0}")]
    InvalidPath(String),
}

impl OutputError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
