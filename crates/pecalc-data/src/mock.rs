//! In-memory quote source for tests and offline demos.

use crate::error::{DataError, Result};
use crate::snapshot::{QuoteSnapshot, QuoteSource};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Debug, Clone, Default)]
struct MockTicker {
    snapshot: Option<std::result::Result<QuoteSnapshot, String>>,
    closes: Option<std::result::Result<Vec<f64>, String>>,
}

/// Scripted [`QuoteSource`].
///
/// Unknown symbols fail both calls with [`DataError::MissingData`], which is
/// how Yahoo behaves for delisted or mistyped tickers.
#[derive(Debug, Default)]
pub struct MockSource {
    tickers: HashMap<String, MockTicker>,
    latency: Duration,
    snapshot_calls: AtomicUsize,
    history_calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockSource {
    /// Create an empty mock source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `snapshot` for `symbol`.
    pub fn with_snapshot(mut self, symbol: &str, snapshot: QuoteSnapshot) -> Self {
        self.entry(symbol).snapshot = Some(Ok(snapshot));
        self
    }

    /// Fail snapshot requests for `symbol` with `message`.
    pub fn with_snapshot_error(mut self, symbol: &str, message: &str) -> Self {
        self.entry(symbol).snapshot = Some(Err(message.to_string()));
        self
    }

    /// Serve `closes` (oldest first) as the recent history of `symbol`.
    pub fn with_closes(mut self, symbol: &str, closes: Vec<f64>) -> Self {
        self.entry(symbol).closes = Some(Ok(closes));
        self
    }

    /// Fail history requests for `symbol` with `message`.
    pub fn with_history_error(mut self, symbol: &str, message: &str) -> Self {
        self.entry(symbol).closes = Some(Err(message.to_string()));
        self
    }

    /// Delay every call by `latency`.
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Number of snapshot requests served so far.
    pub fn snapshot_calls(&self) -> usize {
        self.snapshot_calls.load(Ordering::SeqCst)
    }

    /// Number of history requests served so far.
    pub fn history_calls(&self) -> usize {
        self.history_calls.load(Ordering::SeqCst)
    }

    /// Highest number of calls observed in flight at the same time.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn entry(&mut self, symbol: &str) -> &mut MockTicker {
        self.tickers.entry(symbol.to_string()).or_default()
    }

    fn missing(symbol: &str) -> DataError {
        DataError::MissingData {
            symbol: symbol.to_string(),
            reason: "unknown symbol".to_string(),
        }
    }

    async fn simulate_call(&self) {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl QuoteSource for MockSource {
    async fn snapshot(&self, symbol: &str) -> Result<QuoteSnapshot> {
        self.snapshot_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_call().await;

        match self.tickers.get(symbol).and_then(|t| t.snapshot.as_ref()) {
            Some(Ok(snapshot)) => Ok(*snapshot),
            Some(Err(message)) => Err(DataError::YahooApi(message.clone())),
            None if self.tickers.contains_key(symbol) => Ok(QuoteSnapshot::default()),
            None => Err(Self::missing(symbol)),
        }
    }

    async fn recent_closes(&self, symbol: &str) -> Result<Vec<f64>> {
        self.history_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_call().await;

        match self.tickers.get(symbol).and_then(|t| t.closes.as_ref()) {
            Some(Ok(closes)) => Ok(closes.clone()),
            Some(Err(message)) => Err(DataError::YahooApi(message.clone())),
            None if self.tickers.contains_key(symbol) => Ok(Vec::new()),
            None => Err(Self::missing(symbol)),
        }
    }
}
