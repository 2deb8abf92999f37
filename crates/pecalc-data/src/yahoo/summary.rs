//! Quote snapshots from the Yahoo Finance quote-summary endpoint.

use super::YahooSource;
use crate::error::{DataError, Result};
use crate::snapshot::QuoteSnapshot;
use tracing::debug;

impl YahooSource {
    /// Fetch price, EPS and P/E fields for a single symbol.
    ///
    /// Fields are taken from three quote-summary modules:
    /// * `financialData`: current price
    /// * `summaryDetail`: previous close, trailing P/E, forward P/E
    /// * `defaultKeyStatistics`: trailing EPS, forward EPS, forward P/E fallback
    pub async fn fetch_snapshot(&self, symbol: &str) -> Result<QuoteSnapshot> {
        if symbol.is_empty() {
            return Err(DataError::InvalidSymbol("Empty symbol".to_string()));
        }

        let summary = {
            let mut connector = self.connector.lock().await;
            connector.get_ticker_info(symbol).await?
        };

        let data = summary
            .quote_summary
            .and_then(|qs| qs.result)
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| DataError::MissingData {
                symbol: symbol.to_string(),
                reason: "empty quote summary".to_string(),
            })?;

        let detail = data.summary_detail.as_ref();
        let stats = data.default_key_statistics.as_ref();
        let financial = data.financial_data.as_ref();

        let snapshot = QuoteSnapshot {
            regular_market_price: financial.and_then(|fd| fd.current_price),
            previous_close: detail.and_then(|sd| sd.previous_close),
            trailing_eps: stats.and_then(|ks| ks.trailing_eps),
            forward_eps: stats.and_then(|ks| ks.forward_eps),
            trailing_pe: detail.and_then(|sd| sd.trailing_pe),
            forward_pe: detail
                .and_then(|sd| sd.forward_pe)
                .or_else(|| stats.and_then(|ks| ks.forward_pe)),
        }
        .sanitized();

        debug!(
            symbol,
            price = ?snapshot.regular_market_price,
            trailing_eps = ?snapshot.trailing_eps,
            forward_eps = ?snapshot.forward_eps,
            "quote summary parsed"
        );

        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires network access"]
    async fn test_fetch_snapshot() {
        let source = YahooSource::new().unwrap();
        let snapshot = source.fetch_snapshot("AAPL").await.unwrap();
        assert!(snapshot.regular_market_price.is_some() || snapshot.previous_close.is_some());
    }

    #[tokio::test]
    async fn test_invalid_symbol() {
        let source = YahooSource::new().unwrap();
        let result = source.fetch_snapshot("").await;
        assert!(matches!(result, Err(DataError::InvalidSymbol(_))));
    }
}
