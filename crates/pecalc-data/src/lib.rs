#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/pecalc/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod mock;
pub mod snapshot;
pub mod yahoo;

pub use error::{DataError, Result};
pub use mock::MockSource;
pub use snapshot::{QuoteSnapshot, QuoteSource, RECENT_HISTORY_RANGE};
pub use yahoo::YahooSource;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
