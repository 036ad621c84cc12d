//! Retry behavior tests.
//!
//! # Invariants
//! - 429, 502, 503, 504 trigger retry with exponential backoff
//! - Other error statuses are returned immediately
//! - `max_retries = 0` means a single attempt

mod common;

use alignak_backend_client::ClientError;
use common::*;
use serde_json::json;
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_retry_on_503_then_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/command"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/command"))
        .respond_with(ResponseTemplate::new(200).set_body_json(items_page(vec![
            json!({"_id": "c1", "name": "check_ping"}),
        ])))
        .mount(&mock_server)
        .await;

    let http = Client::new();
    let start = std::time::Instant::now();
    let commands = endpoints::get_all(&http, &mock_server.uri(), "t", "command", &[], 50, 3)
        .await
        .unwrap();

    assert_eq!(commands.len(), 1);
    // First backoff is 2^0 = 1 second.
    assert!(start.elapsed() >= std::time::Duration::from_secs(1));
}

#[tokio::test]
async fn test_retry_on_429_exhausted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/host"))
        .respond_with(ResponseTemplate::new(429))
        .expect(2)
        .mount(&mock_server)
        .await;

    let http = Client::new();
    let err = endpoints::get_all(&http, &mock_server.uri(), "t", "host", &[], 50, 1)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::MaxRetriesExceeded(2)));
}

#[tokio::test]
async fn test_zero_retries_is_single_attempt() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/host"))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&mock_server)
        .await;

    let http = Client::new();
    let err = endpoints::get_all(&http, &mock_server.uri(), "t", "host", &[], 50, 0)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::MaxRetriesExceeded(1)));
}

#[tokio::test]
async fn test_no_retry_on_500() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/host"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let http = Client::new();
    let err = endpoints::get_all(&http, &mock_server.uri(), "t", "host", &[], 50, 3)
        .await
        .unwrap_err();

    match err {
        ClientError::ApiError {
            status, message, ..
        } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("Expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_connection_refused_is_http_error() {
    let http = Client::new();
    // Nothing listens on port 9 on the test host.
    let err = endpoints::get_all(&http, "http://127.0.0.1:9", "t", "host", &[], 50, 0)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::HttpError(_)));
    assert!(err.is_connection_error());
}
