#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/pecalc/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod export;
pub mod table;

pub use export::{CSV_COLUMNS, ExportError, ExportFormat, Exporter, ValuationExport};
pub use table::{TableOptions, TableStyle, render_table};
