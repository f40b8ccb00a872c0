use crate::e2e::helpers;

use helpers::{webflow_mock, TestContext, UNREACHABLE_URL};
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_listing_before_install(ctx: &TestContext) {
    let response = ctx.client.get("/sites").await.unwrap();

    response
        .assert_status(StatusCode::UNAUTHORIZED)
        .assert_error_message("App not installed");

    // No upstream call without a token
    assert!(ctx.webflow.sites_requests().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_sites_with_stored_token(ctx: &TestContext) {
    ctx.client
        .get("/auth?code=abc123")
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    let response = ctx.client.get("/sites").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.text(), webflow_mock::SITES_BODY);
    assert!(response
        .header("content-type")
        .is_some_and(|ct| ct.starts_with("application/json")));
    assert_eq!(
        ctx.webflow.sites_requests(),
        vec![Some("Bearer tok_xyz".to_string())]
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_use_the_latest_token(ctx: &TestContext) {
    ctx.client.get("/auth?code=abc123").await.unwrap();
    ctx.client.get("/auth?code=def456").await.unwrap();

    ctx.client.get("/sites").await.unwrap();

    assert_eq!(
        ctx.webflow.sites_requests(),
        vec![Some("Bearer tok_second".to_string())]
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_pass_upstream_errors_through(ctx: &TestContext) {
    // Webflow rejects this token, its reply is relayed untouched
    ctx.client.get("/auth?code=def456").await.unwrap();

    let response = ctx.client.get("/sites").await.unwrap();

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("msg").and_then(|v| v.as_str()), Some("Not Authorized"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_bad_gateway_when_webflow_is_unreachable(ctx: &TestContext) {
    ctx.client
        .get("/auth?code=abc123")
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    let offline = ctx.client_with_api_url(UNREACHABLE_URL).await;
    let response = offline.get("/sites").await.unwrap();

    response
        .assert_status(StatusCode::BAD_GATEWAY)
        .assert_error_message("Webflow request failed");
    assert_eq!(ctx.stored_token().await.as_deref(), Some("tok_xyz"));
}
