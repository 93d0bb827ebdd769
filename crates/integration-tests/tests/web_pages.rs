//! End-to-end tests for the web application's public pages.

#![allow(clippy::unwrap_used)]

use recipe_roulette_core::constants::APP_NAME;
use recipe_roulette_integration_tests::TestServer;
use reqwest::StatusCode;

#[tokio::test]
async fn home_page_renders() {
    let server = TestServer::spawn().await;

    let resp = reqwest::get(server.url("/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.text().await.unwrap();
    assert!(body.contains(APP_NAME));
    assert!(body.contains("Under Construction"));
    // Cuisine teaser list is rendered from shared constants
    assert!(body.contains("Italian"));
    assert!(body.contains("Thai"));
}

#[tokio::test]
async fn health_returns_ok() {
    let server = TestServer::spawn().await;

    let resp = reqwest::get(server.url("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn unknown_path_is_404() {
    let server = TestServer::spawn().await;

    let resp = reqwest::get(server.url("/definitely-not-a-page"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn responses_carry_request_id() {
    let server = TestServer::spawn().await;

    let resp = reqwest::get(server.url("/health")).await.unwrap();
    let request_id = resp.headers().get("x-request-id").unwrap();
    assert!(!request_id.to_str().unwrap().is_empty());
}

#[tokio::test]
async fn upstream_request_id_is_echoed() {
    let server = TestServer::spawn().await;

    let client = reqwest::Client::new();
    let resp = client
        .get(server.url("/health"))
        .header("x-request-id", "proxy-supplied-id")
        .send()
        .await
        .unwrap();

    let request_id = resp.headers().get("x-request-id").unwrap();
    assert_eq!(request_id.to_str().unwrap(), "proxy-supplied-id");
}

#[tokio::test]
async fn responses_carry_security_headers() {
    let server = TestServer::spawn().await;

    let resp = reqwest::get(server.url("/")).await.unwrap();
    let headers = resp.headers();

    assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
    assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
    assert_eq!(headers.get("referrer-policy").unwrap(), "no-referrer");
    assert!(headers.get("content-security-policy").is_some());
}
