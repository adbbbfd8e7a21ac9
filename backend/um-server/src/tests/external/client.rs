use crate::external::{ExternalClient, ExternalError, extract_users};

use um_config::{ExternalConfig, RetryConfig};

use googletest::prelude::*;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(url: Option<String>, max_attempts: u32) -> ExternalClient {
    let external = ExternalConfig {
        url,
        api_key: Some("test-key".into()),
        timeout_secs: 5,
    };
    let retry = RetryConfig {
        max_attempts,
        initial_delay_ms: 10,
        max_delay_secs: 1,
        backoff_multiplier: 2.0,
        jitter: false,
    };
    ExternalClient::new(&external, &retry).unwrap()
}

#[test]
fn given_bare_array_when_extracting_users_then_returns_all() {
    let users = extract_users(json!([{ "userID": 1 }, { "userID": 2 }])).unwrap();

    assert_that!(users.len(), eq(2));
}

#[test]
fn given_data_wrapper_when_extracting_users_then_returns_inner_array() {
    let users = extract_users(json!({ "data": [{ "userID": 1 }] })).unwrap();

    assert_that!(users.len(), eq(1));
}

#[test]
fn given_unrecognised_shape_when_extracting_users_then_shape_error() {
    let result = extract_users(json!({ "users": [] }));

    assert!(matches!(result, Err(ExternalError::Shape { .. })));
}

#[tokio::test]
async fn given_no_url_when_fetching_then_not_configured() {
    let client = client_for(None, 1);

    let result = client.fetch_users().await;

    assert!(!client.is_configured());
    assert!(matches!(result, Err(ExternalError::NotConfigured { .. })));
}

#[tokio::test]
async fn given_upstream_array_when_fetching_then_sends_bearer_and_returns_users() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "userID": 1, "firstName": "Ann" },
            { "userID": 2, "firstName": "Ben" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(Some(format!("{}/users", server.uri())), 3);
    let users = client.fetch_users().await.unwrap();

    assert_that!(users.len(), eq(2));
}

#[tokio::test]
async fn given_one_unavailable_response_when_fetching_then_retries_and_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [{ "userID": 7 }] })))
        .mount(&server)
        .await;

    let client = client_for(Some(server.uri()), 3);
    let users = client.fetch_users().await.unwrap();

    assert_that!(users.len(), eq(1));
}

#[tokio::test]
async fn given_unauthorized_when_fetching_then_fails_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(Some(server.uri()), 3);
    let result = client.fetch_users().await;

    assert!(matches!(result, Err(ExternalError::Status { status: 401, .. })));
}

#[tokio::test]
async fn given_non_json_body_when_fetching_then_shape_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = client_for(Some(server.uri()), 1);
    let result = client.fetch_users().await;

    assert!(matches!(result, Err(ExternalError::Shape { .. })));
}
