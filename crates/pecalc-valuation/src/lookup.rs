//! Per-ticker valuation lookup.

use crate::precision::RatioPrecision;
use crate::record::{ERROR_PREFIX, FORWARD_EPS_MISSING, TRAILING_EPS_MISSING, ValuationRecord};
use pecalc_data::{DataError, QuoteSnapshot, QuoteSource};
use tracing::{debug, warn};

/// Look up price, EPS and P/E for `ticker`.
///
/// Always returns a record. A failing snapshot request is logged and treated
/// as an empty snapshot; a failing history request (only made when the
/// snapshot has no price) replaces `notes` with the error message and leaves
/// the remaining fields as they were at that point.
///
/// Derived ratios are rounded with `precision`; reported ratios are kept as-is.
pub async fn lookup<S>(source: &S, ticker: &str, precision: RatioPrecision) -> ValuationRecord
where
    S: QuoteSource + ?Sized,
{
    let mut record = ValuationRecord::new(ticker);

    if let Err(err) = populate(source, &mut record, precision).await {
        warn!(ticker, error = %err, "valuation lookup failed");
        record.notes = format!("{ERROR_PREFIX}{err}");
    }

    debug!(
        ticker,
        price = ?record.price,
        trailing_pe = ?record.trailing_pe,
        forward_pe = ?record.forward_pe,
        notes = %record.notes,
        "valuation lookup finished"
    );

    record
}

/// `price / eps`, when both are known and `eps` is non-zero.
pub fn price_earnings_ratio(
    price: Option<f64>,
    eps: Option<f64>,
    precision: RatioPrecision,
) -> Option<f64> {
    match (price, eps) {
        (Some(price), Some(eps)) if eps != 0.0 => Some(precision.apply(price / eps)),
        _ => None,
    }
}

async fn populate<S>(
    source: &S,
    record: &mut ValuationRecord,
    precision: RatioPrecision,
) -> Result<(), DataError>
where
    S: QuoteSource + ?Sized,
{
    let snapshot = match source.snapshot(&record.ticker).await {
        Ok(snapshot) => snapshot.sanitized(),
        Err(err) => {
            warn!(
                ticker = %record.ticker,
                error = %err,
                "quote snapshot unavailable, continuing without it"
            );
            QuoteSnapshot::default()
        }
    };

    record.price = match snapshot.regular_market_price.or(snapshot.previous_close) {
        Some(price) => Some(price),
        None => latest_close(source, &record.ticker).await?,
    };

    record.trailing_eps = snapshot.trailing_eps;
    record.forward_eps = snapshot.forward_eps;

    record.trailing_pe = snapshot
        .trailing_pe
        .or_else(|| price_earnings_ratio(record.price, record.trailing_eps, precision));
    record.forward_pe = snapshot
        .forward_pe
        .or_else(|| price_earnings_ratio(record.price, record.forward_eps, precision));

    if record.trailing_pe.is_none() && !is_nonzero(record.trailing_eps) {
        record.notes.push_str(TRAILING_EPS_MISSING);
    }
    if record.forward_pe.is_none() && !is_nonzero(record.forward_eps) {
        record.notes.push_str(FORWARD_EPS_MISSING);
    }

    Ok(())
}

async fn latest_close<S>(source: &S, ticker: &str) -> Result<Option<f64>, DataError>
where
    S: QuoteSource + ?Sized,
{
    let closes = source.recent_closes(ticker).await?;
    Ok(closes.into_iter().rev().find(|close| close.is_finite()))
}

fn is_nonzero(value: Option<f64>) -> bool {
    value.is_some_and(|v| v != 0.0)
}
