//! Integration tests for the scripted quote source.

use pecalc_data::{DataError, MockSource, QuoteSnapshot, QuoteSource};
use rstest::rstest;
use std::sync::Arc;
use std::time::Duration;

#[rstest]
#[case("GARAN.IS", Some(101.5))]
#[case("AKBNK.IS", None)]
#[tokio::test]
async fn test_snapshot_prices(#[case] symbol: &str, #[case] expected: Option<f64>) {
    let source = MockSource::new()
        .with_snapshot(
            "GARAN.IS",
            QuoteSnapshot::default().with_regular_market_price(101.5),
        )
        .with_snapshot("AKBNK.IS", QuoteSnapshot::default().with_trailing_eps(3.2));

    let snapshot = source.snapshot(symbol).await.unwrap();
    assert_eq!(snapshot.regular_market_price, expected);
}

#[tokio::test]
async fn test_closes_are_returned_in_order() {
    let source = MockSource::new().with_closes("TUPRS.IS", vec![150.0, 151.0, 149.5]);
    let closes = source.recent_closes("TUPRS.IS").await.unwrap();
    assert_eq!(closes, vec![150.0, 151.0, 149.5]);
}

#[tokio::test]
async fn test_usable_as_trait_object() {
    let source: Arc<dyn QuoteSource> = Arc::new(MockSource::new());
    let result = source.snapshot("EREGL.IS").await;
    assert!(matches!(result, Err(DataError::MissingData { .. })));
}

#[tokio::test]
async fn test_tracks_concurrent_calls() {
    let source = Arc::new(
        MockSource::new()
            .with_snapshot("A", QuoteSnapshot::default())
            .with_latency(Duration::from_millis(20)),
    );

    let a = {
        let source = Arc::clone(&source);
        tokio::spawn(async move { source.snapshot("A").await })
    };
    let b = {
        let source = Arc::clone(&source);
        tokio::spawn(async move { source.snapshot("A").await })
    };
    a.await.unwrap().unwrap();
    b.await.unwrap().unwrap();

    assert_eq!(source.snapshot_calls(), 2);
    assert!(source.max_in_flight() >= 1);
}
