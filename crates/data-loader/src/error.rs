//! Error types for the data-loader crate.

use thiserror::Error;

/// Errors that can occur while loading and parsing the catalog files.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// I/O error occurred while reading a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Line in a data file couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
