#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/pecalc/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod batch;
pub mod lookup;
pub mod precision;
pub mod record;

pub use batch::{BatchConfig, DEFAULT_DELAY, run_batch};
pub use lookup::{lookup, price_earnings_ratio};
pub use precision::{ParsePrecisionError, RatioPrecision};
pub use record::ValuationRecord;
