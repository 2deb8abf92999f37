#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/pecalc/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod tickers;

// Re-export main types from sub-crates
pub use pecalc_data as data;
pub use pecalc_output as output;
pub use pecalc_valuation as valuation;

pub use error::InputError;
pub use tickers::{
    TickerList, TickerOptions, load_tickers_from_csv, load_tickers_from_file, split_tickers,
};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
