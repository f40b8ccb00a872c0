use crate::e2e::helpers;

use helpers::{webflow_mock, TestContext, AUTHORIZE_URL};
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_redirect_to_webflow_without_code(ctx: &TestContext) {
    let response = ctx.client.get("/auth").await.unwrap();

    response.assert_status(StatusCode::FOUND);

    let location = response.header("location").expect("Missing Location header");
    assert!(
        location.starts_with(AUTHORIZE_URL),
        "Location should point to Webflow OAuth, got: {}",
        location
    );
    assert!(location.contains("response_type=code"));
    assert!(location.contains(&format!("client_id={}", webflow_mock::CLIENT_ID)));
    assert!(location.contains("redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fauth"));
    assert!(location.contains("scope=sites%3Aread"));

    // Redirecting must not touch Webflow or the store
    assert_eq!(ctx.webflow.token_request_count(), 0);
    assert_eq!(ctx.stored_token().await, None);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_treat_empty_code_as_missing(ctx: &TestContext) {
    let response = ctx.client.get("/auth?code=").await.unwrap();

    response.assert_status(StatusCode::FOUND);
    assert_eq!(ctx.webflow.token_request_count(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_redirect_to_the_same_url_every_time(ctx: &TestContext) {
    let first = ctx.client.get("/auth").await.unwrap();
    let second = ctx.client.get("/auth").await.unwrap();

    assert_eq!(first.header("location"), second.header("location"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_install_with_valid_code(ctx: &TestContext) {
    let response = ctx.client.get("/auth?code=abc123").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.text(), ctx.index_html());
    assert_eq!(ctx.stored_token().await.as_deref(), Some("tok_xyz"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_send_client_credentials_in_exchange(ctx: &TestContext) {
    ctx.client.get("/auth?code=abc123").await.unwrap();

    let requests = ctx.webflow.state.token_requests.lock().clone();
    assert_eq!(requests.len(), 1);

    let form = &requests[0];
    assert_eq!(form.get("client_id").map(String::as_str), Some(webflow_mock::CLIENT_ID));
    assert_eq!(
        form.get("client_secret").map(String::as_str),
        Some(webflow_mock::CLIENT_SECRET)
    );
    assert_eq!(form.get("code").map(String::as_str), Some("abc123"));
    assert_eq!(
        form.get("grant_type").map(String::as_str),
        Some("authorization_code")
    );
    assert_eq!(
        form.get("redirect_uri").map(String::as_str),
        Some(helpers::REDIRECT_URI)
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_invalid_code_without_storing(ctx: &TestContext) {
    let response = ctx.client.get("/auth?code=expired").await.unwrap();

    response
        .assert_status(StatusCode::BAD_GATEWAY)
        .assert_error_message("Invalid authorization code");
    assert!(response.header("location").is_none());
    assert_eq!(ctx.stored_token().await, None);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_error_reported_in_body(ctx: &TestContext) {
    let response = ctx
        .client
        .get(&format!("/auth?code={}", webflow_mock::ERROR_IN_BODY_CODE))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_GATEWAY)
        .assert_error_message("already been used");
    assert_eq!(ctx.stored_token().await, None);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_keep_previous_token_when_reinstall_fails(ctx: &TestContext) {
    ctx.client
        .get("/auth?code=abc123")
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    ctx.client
        .get("/auth?code=bogus")
        .await
        .unwrap()
        .assert_status(StatusCode::BAD_GATEWAY);

    assert_eq!(ctx.stored_token().await.as_deref(), Some("tok_xyz"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_keep_only_the_latest_token(ctx: &TestContext) {
    ctx.client
        .get("/auth?code=abc123")
        .await
        .unwrap()
        .assert_status(StatusCode::OK);
    ctx.client
        .get("/auth?code=def456")
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    assert_eq!(ctx.stored_token().await.as_deref(), Some("tok_second"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_malformed_query_with_json_error(ctx: &TestContext) {
    let response = ctx
        .client
        .get("/auth?code=abc123&code=def456")
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("duplicate field");
    assert_eq!(ctx.webflow.token_request_count(), 0);
    assert_eq!(ctx.stored_token().await, None);
}
