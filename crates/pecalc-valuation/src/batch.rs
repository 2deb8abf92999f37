//! Paced batch lookups over a ticker list.

use crate::lookup::lookup;
use crate::precision::RatioPrecision;
use crate::record::ValuationRecord;
use futures::stream::{self, StreamExt};
use pecalc_data::QuoteSource;
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

/// Default pause after each lookup.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

/// Configuration for a batch run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchConfig {
    /// Pause after each lookup. Zero disables pacing.
    pub delay: Duration,
    /// Lookups in flight at once; values below 1 are treated as 1.
    pub concurrency: usize,
    /// Rounding of derived ratios.
    pub precision: RatioPrecision,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            concurrency: 1,
            precision: RatioPrecision::default(),
        }
    }
}

impl BatchConfig {
    /// Set the pause after each lookup.
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the number of lookups in flight.
    pub const fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Set the rounding of derived ratios.
    pub const fn with_precision(mut self, precision: RatioPrecision) -> Self {
        self.precision = precision;
        self
    }
}

/// Look up every ticker and return the records in input order.
///
/// Each in-flight slot sleeps `config.delay` after its lookup, so with the
/// default concurrency of 1 requests are strictly sequential and spaced.
/// `on_record` is called in input order as records become available.
pub async fn run_batch<S, F>(
    source: &S,
    tickers: &[String],
    config: &BatchConfig,
    mut on_record: F,
) -> Vec<ValuationRecord>
where
    S: QuoteSource + ?Sized,
    F: FnMut(usize, &ValuationRecord),
{
    let precision = config.precision;
    let delay = config.delay;

    let records: Vec<ValuationRecord> = stream::iter(tickers)
        .map(move |ticker| async move {
            let record = lookup(source, ticker, precision).await;
            if !delay.is_zero() {
                sleep(delay).await;
            }
            record
        })
        .buffered(config.concurrency.max(1))
        .enumerate()
        .map(|(index, record)| {
            on_record(index, &record);
            record
        })
        .collect()
        .await;

    let failed = records.iter().filter(|r| r.has_error()).count();
    info!(
        tickers = records.len(),
        failed,
        concurrency = config.concurrency.max(1),
        "batch finished"
    );

    records
}
