//! Errors raised while gathering tickers.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading ticker input.
#[derive(Debug, Error)]
pub enum InputError {
    /// Ticker file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Ticker CSV could not be parsed.
    #[error("Failed to parse CSV {path}: {source}")]
    Csv {
        /// File that was being parsed
        path: PathBuf,
        /// Underlying error
        source: csv::Error,
    },

    /// The requested column is not in the CSV header.
    #[error("Column '{column}' not found in {path}")]
    MissingColumn {
        /// Requested column name
        column: String,
        /// File that was searched
        path: PathBuf,
    },

    /// Nothing was left after cleaning the input.
    #[error("No tickers supplied")]
    NoTickers,
}
