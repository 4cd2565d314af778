use coinfront::CredentialStore;
use coinfront::crypto::LOGIN_PATH;
use coinfront::DataMode;
use httpmock::Method::GET;

use crate::common::{base_url, harness, setup_server};

#[tokio::test]
async fn unauthorized_clears_token_and_redirects_once() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/market/stats")
            .header("authorization", "Bearer expired");
        then.status(401)
            .header("content-type", "application/json")
            .body(r#"{"message":"Session expired"}"#);
    });

    let h = harness(base_url(&server), DataMode::Live, Some("expired"));
    assert!(h.service.market_stats().await.is_none());

    mock.assert_calls(1);
    assert_eq!(h.credentials.token(), None);
    assert_eq!(h.navigator.paths(), vec![LOGIN_PATH.to_string()]);
    assert_eq!(h.notifier.messages(), vec!["Session expired"]);
}

#[tokio::test]
async fn forbidden_keeps_the_session() {
    let server = setup_server();

    server.mock(|when, then| {
        when.method(GET).path("/assets");
        then.status(403);
    });

    let h = harness(base_url(&server), DataMode::Live, Some("valid"));
    assert!(h.service.top_assets(3).await.is_empty());

    assert_eq!(h.credentials.token().as_deref(), Some("valid"));
    assert!(h.navigator.paths().is_empty());
    assert_eq!(h.notifier.messages(), vec!["Request failed with status 403"]);
}

#[tokio::test]
async fn request_after_unauthorized_goes_out_without_token() {
    let server = setup_server();

    let authed = server.mock(|when, then| {
        when.method(GET)
            .path("/assets")
            .header("authorization", "Bearer expired");
        then.status(401);
    });
    let anonymous = server.mock(|when, then| {
        when.method(GET).path("/assets");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });

    let h = harness(base_url(&server), DataMode::Live, Some("expired"));
    assert!(h.service.top_assets(3).await.is_empty());
    assert!(h.service.top_assets(3).await.is_empty());

    authed.assert_calls(1);
    anonymous.assert_calls(1);
    assert_eq!(h.navigator.paths().len(), 1);
    assert_eq!(h.notifier.messages().len(), 1);
}
