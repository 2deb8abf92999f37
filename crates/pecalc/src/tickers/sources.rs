//! Ticker files on disk.

use super::split_tickers;
use crate::error::InputError;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read tickers from a UTF-8 text file.
///
/// Each line may hold one ticker or several separated by commas; blank lines
/// are skipped.
///
/// # Errors
///
/// Returns [`InputError::Io`] if the file cannot be read.
pub fn load_tickers_from_file(path: &Path) -> Result<Vec<String>, InputError> {
    let content = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let tickers: Vec<String> = content.lines().flat_map(split_tickers).collect();
    debug!(path = %path.display(), count = tickers.len(), "loaded tickers from file");
    Ok(tickers)
}

/// Read the values of `column` from a CSV file with a header row.
///
/// Values are trimmed and empty cells skipped; row order is kept.
///
/// # Errors
///
/// Returns [`InputError::MissingColumn`] if the header has no such column,
/// or [`InputError::Io`] / [`InputError::Csv`] if the file cannot be read.
pub fn load_tickers_from_csv(path: &Path, column: &str) -> Result<Vec<String>, InputError> {
    let csv_error = |source: csv::Error| InputError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let file = fs::File::open(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

    let headers = reader.headers().map_err(csv_error)?;
    let index = headers
        .iter()
        .position(|h| h.trim_start_matches('\u{feff}').trim() == column)
        .ok_or_else(|| InputError::MissingColumn {
            column: column.to_string(),
            path: path.to_path_buf(),
        })?;

    let mut tickers = Vec::new();
    for row in reader.records() {
        let row = row.map_err(csv_error)?;
        if let Some(value) = row.get(index).map(str::trim).filter(|v| !v.is_empty()) {
            tickers.push(value.to_string());
        }
    }

    debug!(path = %path.display(), column, count = tickers.len(), "loaded tickers from CSV");
    Ok(tickers)
}
