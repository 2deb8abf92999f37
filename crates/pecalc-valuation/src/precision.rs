//! Rounding policy for derived P/E ratios.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Decimal places used by the batch tool.
pub const DEFAULT_DECIMALS: u32 = 6;

// Past this, rounding through a power of ten loses more than it keeps.
const MAX_DECIMALS: u32 = 15;

/// How derived ratios are rounded.
///
/// Only ratios computed from price and EPS are rounded; ratios reported by
/// the provider are passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatioPrecision {
    /// Keep the full `f64` result.
    Exact,
    /// Round half away from zero to this many decimal places.
    Decimals(u32),
}

impl Default for RatioPrecision {
    fn default() -> Self {
        Self::Decimals(DEFAULT_DECIMALS)
    }
}

impl RatioPrecision {
    /// Apply the policy to `value`.
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Exact => value,
            Self::Decimals(places) if places > MAX_DECIMALS => value,
            Self::Decimals(places) => {
                let factor = 10f64.powi(places as i32);
                let scaled = value * factor;
                if scaled.is_finite() {
                    scaled.round() / factor
                } else {
                    value
                }
            }
        }
    }
}

impl fmt::Display for RatioPrecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Decimals(places) => write!(f, "{places}"),
        }
    }
}

/// Error returned when a precision string is neither `exact` nor a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid precision '{0}': expected 'exact' or a number of decimal places")]
pub struct ParsePrecisionError(String);

impl FromStr for RatioPrecision {
    type Err = ParsePrecisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("exact") {
            return Ok(Self::Exact);
        }
        s.parse::<u32>()
            .map(Self::Decimals)
            .map_err(|_| ParsePrecisionError(s.to_string()))
    }
}
