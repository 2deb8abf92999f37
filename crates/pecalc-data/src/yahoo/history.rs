//! Short daily price history used as the last price fallback.

use super::YahooSource;
use crate::error::{DataError, Result};
use crate::snapshot::RECENT_HISTORY_RANGE;

impl YahooSource {
    /// Fetch daily closes over [`RECENT_HISTORY_RANGE`], oldest first.
    ///
    /// Non-finite closes (halted sessions) are skipped.
    pub async fn fetch_recent_closes(&self, symbol: &str) -> Result<Vec<f64>> {
        if symbol.is_empty() {
            return Err(DataError::InvalidSymbol("Empty symbol".to_string()));
        }

        let response = self
            .chart
            .get_quote_range(symbol, "1d", RECENT_HISTORY_RANGE)
            .await?;

        let quotes = response.quotes()?;

        Ok(quotes
            .iter()
            .map(|q| q.close)
            .filter(|close| close.is_finite())
            .collect())
    }
}
