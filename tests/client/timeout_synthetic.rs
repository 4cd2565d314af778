use std::sync::Arc;
use std::time::Duration;

use coinfront::{ApiClient, ApiError, MemoryCredentialStore, RequestOptions};
use httpmock::Method::GET;

use crate::common::{
    RecordingSleeper, base_url, client_for, client_with, setup_server, unreachable_url,
};

#[tokio::test]
async fn slow_response_times_out_with_408_and_is_not_retried() {
    let server = setup_server();

    let slow = server.mock(|when, then| {
        when.method(GET).path("/market/stats");
        then.status(200)
            .header("content-type", "application/json")
            .body("{}")
            .delay(Duration::from_millis(1500));
    });

    let sleeper = Arc::new(RecordingSleeper::default());
    let client = ApiClient::builder()
        .base_url(base_url(&server))
        .timeout(Duration::from_millis(200))
        .sleeper(sleeper.clone())
        .build()
        .unwrap();

    let err = client.get("/market/stats", None).await.unwrap_err();

    assert!(matches!(err, ApiError::Timeout), "got {err:?}");
    assert_eq!(err.status(), 408);
    assert_eq!(err.status_text(), "Request Timeout");
    assert!(sleeper.delays().is_empty());
    slow.assert_calls(1);
}

#[tokio::test]
async fn per_request_timeout_override_applies() {
    let server = setup_server();

    server.mock(|when, then| {
        when.method(GET).path("/assets");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]")
            .delay(Duration::from_millis(1500));
    });

    let (client, _sleeper) = client_for(&server);
    assert_eq!(client.timeout(), Duration::from_millis(10_000));

    let options = RequestOptions::default().timeout(Duration::from_millis(150));
    let err = client.get("/assets", Some(options)).await.unwrap_err();
    assert_eq!(err.status(), 408);
}

#[tokio::test]
async fn connection_refused_is_a_transport_failure_without_retry() {
    let (client, sleeper) = client_with(
        unreachable_url(),
        Arc::new(MemoryCredentialStore::default()),
    );

    let err = client.get("/assets?limit=2", None).await.unwrap_err();

    assert!(matches!(err, ApiError::Transport { .. }), "got {err:?}");
    assert_eq!(err.status(), 0);
    assert_eq!(err.status_text(), "Network Error");
    assert!(err.body().is_none());
    assert!(sleeper.delays().is_empty());
}
