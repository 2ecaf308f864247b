//! Fetch-and-shape against the fake upstream.

use pretty_assertions::assert_eq;
use serde_json::json;

use manhattan_violations::config::Config;
use manhattan_violations::inspection::{fetch_critical_violations, InspectionClient};
use manhattan_violations::AppError;

use crate::support::{config_for, record, unreachable_url, Canned, FakeUpstream};

#[tokio::test]
async fn page_limit_is_sent_as_query_parameter() {
    let upstream = FakeUpstream::start(Canned::json(json!([]))).await;
    let config = Config {
        page_limit: 250,
        ..config_for(&upstream.url)
    };
    let client = InspectionClient::new(&config).unwrap();

    fetch_critical_violations(&client).await.unwrap();

    assert_eq!(upstream.limits(), vec!["250".to_string()]);
}

#[tokio::test]
async fn identical_payloads_shape_identically() {
    let upstream = FakeUpstream::start(Canned::json(json!([
        record("A", "Manhattan", "Critical", "2024-01-01"),
        record("B", "Manhattan", "Critical", "2024-01-01"),
        record("C", "Manhattan", "Not Critical", "2024-03-01"),
        record("D", "Manhattan", "Critical", "2024-02-01"),
    ])))
    .await;
    let client = InspectionClient::new(&config_for(&upstream.url)).unwrap();

    let first = fetch_critical_violations(&client).await.unwrap();
    let second = fetch_critical_violations(&client).await.unwrap();

    assert_eq!(first, second);
    let names: Vec<&str> = first.iter().map(|r| r.restaurant_name.as_str()).collect();
    assert_eq!(names, vec!["D", "A", "B"]);
}

#[tokio::test]
async fn network_failure_yields_empty_sequence() {
    let client = InspectionClient::new(&config_for(&unreachable_url())).unwrap();

    let records = fetch_critical_violations(&client).await.unwrap();

    assert!(records.is_empty());
}

#[tokio::test]
async fn decode_failure_propagates() {
    let upstream =
        FakeUpstream::start(Canned::raw(axum::http::StatusCode::OK, "not json")).await;
    let client = InspectionClient::new(&config_for(&upstream.url)).unwrap();

    let err = fetch_critical_violations(&client).await.unwrap_err();

    assert!(matches!(err, AppError::Fetch(_)), "unexpected error: {err}");
}
