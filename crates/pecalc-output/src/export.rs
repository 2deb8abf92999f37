//! CSV and JSON export of valuation records.

use pecalc_valuation::ValuationRecord;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// CSV header, in column order.
pub const CSV_COLUMNS: [&str; 7] = [
    "ticker",
    "price",
    "trailingEps",
    "trailingPE",
    "forwardEps",
    "forwardPE",
    "notes",
];

const UTF8_BOM: &str = "\u{feff}";

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV writer produced invalid UTF-8.
    #[error("Invalid UTF-8 in output: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Comma-separated values format.
    #[default]
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }
}

/// Trait for exporting data in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        let content = self.export_to_string(format)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

/// A batch of records ready for export.
#[derive(Debug, Clone, Copy)]
pub struct ValuationExport<'a> {
    records: &'a [ValuationRecord],
    byte_order_mark: bool,
}

impl<'a> ValuationExport<'a> {
    /// Wrap `records` for export.
    pub const fn new(records: &'a [ValuationRecord]) -> Self {
        Self {
            records,
            byte_order_mark: false,
        }
    }

    /// Prefix CSV output with a UTF-8 byte-order mark so spreadsheet
    /// applications detect the encoding.
    pub const fn with_byte_order_mark(mut self, enabled: bool) -> Self {
        self.byte_order_mark = enabled;
        self
    }

    fn to_csv(&self) -> Result<String, ExportError> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        wtr.write_record(CSV_COLUMNS)?;
        for record in self.records {
            wtr.write_record([
                record.ticker.clone(),
                optional_cell(record.price),
                optional_cell(record.trailing_eps),
                optional_cell(record.trailing_pe),
                optional_cell(record.forward_eps),
                optional_cell(record.forward_pe),
                record.notes.clone(),
            ])?;
        }
        let data = String::from_utf8(wtr.into_inner().map_err(|e| e.into_error())?)?;

        if self.byte_order_mark {
            Ok(format!("{UTF8_BOM}{data}"))
        } else {
            Ok(data)
        }
    }
}

fn optional_cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl Exporter for ValuationExport<'_> {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => self.to_csv(),
            ExportFormat::Json => Ok(serde_json::to_string(self.records)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self.records)?),
        }
    }
}

impl Exporter for [ValuationRecord] {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        ValuationExport::new(self).export_to_string(format)
    }
}
