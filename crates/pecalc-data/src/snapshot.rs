//! Provider-neutral quote snapshot and the [`QuoteSource`] seam.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// History range requested when neither snapshot price is available.
pub const RECENT_HISTORY_RANGE: &str = "5d";

/// Quote fields a provider reports for one symbol.
///
/// Every field is optional: providers routinely omit earnings for banks,
/// loss-making companies and freshly listed symbols.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSnapshot {
    /// Current / regular market price
    pub regular_market_price: Option<f64>,
    /// Previous session close
    pub previous_close: Option<f64>,
    /// Trailing twelve-month earnings per share
    pub trailing_eps: Option<f64>,
    /// Analyst-estimated forward earnings per share
    pub forward_eps: Option<f64>,
    /// Trailing P/E ratio as reported
    #[serde(rename = "trailingPE")]
    pub trailing_pe: Option<f64>,
    /// Forward P/E ratio as reported
    #[serde(rename = "forwardPE")]
    pub forward_pe: Option<f64>,
}

impl QuoteSnapshot {
    /// Set the regular market price.
    pub const fn with_regular_market_price(self, value: f64) -> Self {
        Self {
            regular_market_price: Some(value),
            ..self
        }
    }

    /// Set the previous close.
    pub const fn with_previous_close(self, value: f64) -> Self {
        Self {
            previous_close: Some(value),
            ..self
        }
    }

    /// Set the trailing EPS.
    pub const fn with_trailing_eps(self, value: f64) -> Self {
        Self {
            trailing_eps: Some(value),
            ..self
        }
    }

    /// Set the forward EPS.
    pub const fn with_forward_eps(self, value: f64) -> Self {
        Self {
            forward_eps: Some(value),
            ..self
        }
    }

    /// Set the reported trailing P/E.
    pub const fn with_trailing_pe(self, value: f64) -> Self {
        Self {
            trailing_pe: Some(value),
            ..self
        }
    }

    /// Set the reported forward P/E.
    pub const fn with_forward_pe(self, value: f64) -> Self {
        Self {
            forward_pe: Some(value),
            ..self
        }
    }

    /// Drop NaN and infinite values, which Yahoo emits for some listings.
    pub fn sanitized(self) -> Self {
        let finite = |v: Option<f64>| v.filter(|x| x.is_finite());
        Self {
            regular_market_price: finite(self.regular_market_price),
            previous_close: finite(self.previous_close),
            trailing_eps: finite(self.trailing_eps),
            forward_eps: finite(self.forward_eps),
            trailing_pe: finite(self.trailing_pe),
            forward_pe: finite(self.forward_pe),
        }
    }
}

/// A remote source of quote snapshots and short price histories.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetch the current quote snapshot for `symbol`.
    async fn snapshot(&self, symbol: &str) -> Result<QuoteSnapshot>;

    /// Fetch daily closes for the last [`RECENT_HISTORY_RANGE`], oldest first.
    async fn recent_closes(&self, symbol: &str) -> Result<Vec<f64>>;
}
