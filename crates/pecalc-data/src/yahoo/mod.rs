//! Yahoo Finance data provider.

pub mod history;
pub mod summary;

use crate::error::Result;
use crate::snapshot::{QuoteSnapshot, QuoteSource};
use async_trait::async_trait;
use tokio::sync::Mutex;
use yahoo_finance_api as yahoo;

/// Yahoo Finance quote source.
///
/// The quote-summary endpoint needs a mutable connector (it refreshes the
/// crumb cookie), so that connector sits behind an async mutex. Chart
/// requests only need `&self` and use their own connector without locking.
pub struct YahooSource {
    connector: Mutex<yahoo::YahooConnector>,
    chart: yahoo::YahooConnector,
}

impl std::fmt::Debug for YahooSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YahooSource").finish_non_exhaustive()
    }
}

impl YahooSource {
    /// Create a new Yahoo Finance source.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        Ok(Self {
            connector: Mutex::new(yahoo::YahooConnector::new()?),
            chart: yahoo::YahooConnector::new()?,
        })
    }
}

#[async_trait]
impl QuoteSource for YahooSource {
    async fn snapshot(&self, symbol: &str) -> Result<QuoteSnapshot> {
        self.fetch_snapshot(symbol).await
    }

    async fn recent_closes(&self, symbol: &str) -> Result<Vec<f64>> {
        self.fetch_recent_closes(symbol).await
    }
}
