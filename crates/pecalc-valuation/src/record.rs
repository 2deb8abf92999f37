//! The valuation record produced for each ticker.

use serde::{Deserialize, Serialize};

/// Note appended when no trailing P/E could be reported or derived.
pub const TRAILING_EPS_MISSING: &str = "Trailing EPS missing/zero; ";

/// Note appended when no forward P/E could be reported or derived.
pub const FORWARD_EPS_MISSING: &str = "Forward EPS missing/zero; ";

/// Prefix of the note that replaces all others when a lookup fails.
pub const ERROR_PREFIX: &str = "Error: ";

/// Price, earnings and P/E figures for one ticker.
///
/// Records are produced by [`crate::lookup`] and are not modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationRecord {
    /// Ticker as supplied by the caller
    pub ticker: String,
    /// Latest known price
    pub price: Option<f64>,
    /// Trailing twelve-month EPS
    pub trailing_eps: Option<f64>,
    /// Forward EPS
    pub forward_eps: Option<f64>,
    /// Trailing P/E, reported or derived
    #[serde(rename = "trailingPE")]
    pub trailing_pe: Option<f64>,
    /// Forward P/E, reported or derived
    #[serde(rename = "forwardPE")]
    pub forward_pe: Option<f64>,
    /// Diagnostics accumulated during the lookup
    pub notes: String,
}

impl ValuationRecord {
    /// Create an empty record for `ticker`.
    pub fn new(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            ..Self::default()
        }
    }

    /// Whether the lookup failed and `notes` carries the error.
    pub fn has_error(&self) -> bool {
        self.notes.starts_with(ERROR_PREFIX)
    }

    /// Whether no trailing P/E is available because earnings were missing or zero.
    pub fn trailing_earnings_missing(&self) -> bool {
        self.notes.contains(TRAILING_EPS_MISSING)
    }

    /// Whether no forward P/E is available because earnings were missing or zero.
    pub fn forward_earnings_missing(&self) -> bool {
        self.notes.contains(FORWARD_EPS_MISSING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_blank() {
        let record = ValuationRecord::new("GARAN.IS");
        assert_eq!(record.ticker, "GARAN.IS");
        assert!(record.price.is_none());
        assert!(record.trailing_pe.is_none());
        assert!(record.notes.is_empty());
        assert!(!record.has_error());
    }

    #[test]
    fn test_note_markers_text() {
        let mut record = ValuationRecord::new("ISCTR.IS");
        record.notes.push_str(TRAILING_EPS_MISSING);
        record.notes.push_str(FORWARD_EPS_MISSING);
        assert_eq!(
            record.notes,
            "Trailing EPS missing/zero; Forward EPS missing/zero; "
        );
    }

    #[test]
    fn test_note_queries() {
        let mut record = ValuationRecord::new("AKBNK.IS");
        record.notes.push_str(TRAILING_EPS_MISSING);
        assert!(record.trailing_earnings_missing());
        assert!(!record.forward_earnings_missing());

        record.notes = format!("{ERROR_PREFIX}boom");
        assert!(record.has_error());
    }

    #[test]
    fn test_json_field_names() {
        let mut record = ValuationRecord::new("TUPRS.IS");
        record.trailing_pe = Some(4.5);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"ticker":"TUPRS.IS","price":null,"trailingEps":null,"forwardEps":null,"trailingPE":4.5,"forwardPE":null,"notes":""}"#
        );
    }
}
