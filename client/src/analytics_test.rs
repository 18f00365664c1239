use super::*;
use crate::test_helpers::{Call, MockApi};

#[tokio::test]
async fn summary_collects_all_three_queries_in_order() {
    let api = Arc::new(MockApi::new().with_analytics(
        vec![DigitCount { digit: 1, count: 3 }, DigitCount { digit: 7, count: 1 }],
        Some(0.75),
        4,
    ));
    let summary = AnalyticsClient::new(api.clone()).summary().await.unwrap();
    assert_eq!(summary.total_predictions, 4);
    assert_eq!(summary.average_confidence, Some(0.75));
    assert_eq!(summary.distribution.len(), 2);
    assert_eq!(api.calls(), vec![Call::Distribution, Call::AvgConfidence, Call::Total]);
}

#[tokio::test]
async fn first_failure_stops_remaining_queries() {
    let api = Arc::new(MockApi::new());
    let err = AnalyticsClient::new(api.clone()).summary().await.unwrap_err();
    assert!(err.is_transport());
    assert_eq!(api.calls(), vec![Call::Distribution]);
}

#[tokio::test]
async fn empty_server_has_no_average() {
    let api = Arc::new(MockApi::new().with_analytics(vec![], None, 0));
    let summary = AnalyticsClient::new(api).summary().await.unwrap();
    assert_eq!(summary.average_confidence, None);
    assert!(summary.distribution.is_empty());
}
