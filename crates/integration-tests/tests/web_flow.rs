//! Integration tests for the purchase-viewer web flow.
//!
//! These tests require:
//! - A running web server (cargo run -p redline-web)
//! - Reachable sheet exports configured on that server
//!
//! Run with: cargo test -p redline-integration-tests -- --ignored

use reqwest::{Client, StatusCode};

/// Base URL for the web server (configurable via environment).
fn base_url() -> String {
    std::env::var("REDLINE_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

fn client() -> Client {
    Client::builder()
        .build()
        .expect("Failed to create HTTP client")
}

/// Submit the login form and return the response body.
async fn submit_password(client: &Client, password: &str) -> (StatusCode, String) {
    let resp = client
        .post(format!("{}/purchases", base_url()))
        .form(&[("password", password)])
        .send()
        .await
        .expect("Failed to submit login form");
    let status = resp.status();
    let body = resp.text().await.expect("Failed to read response body");
    (status, body)
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
#[ignore = "Requires running web server"]
async fn test_health_is_ok() {
    let resp = client()
        .get(format!("{}/health", base_url()))
        .send()
        .await
        .expect("Failed to reach health endpoint");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.expect("body"), "ok");
}

#[tokio::test]
#[ignore = "Requires running web server and reachable sheet exports"]
async fn test_readiness_checks_sheets() {
    let resp = client()
        .get(format!("{}/health/ready", base_url()))
        .send()
        .await
        .expect("Failed to reach readiness endpoint");

    assert_eq!(resp.status(), StatusCode::OK);
}

// ============================================================================
// Login flow
// ============================================================================

#[tokio::test]
#[ignore = "Requires running web server"]
async fn test_landing_page_shows_login_form() {
    let resp = client()
        .get(base_url())
        .send()
        .await
        .expect("Failed to fetch landing page");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("body");
    assert!(body.contains("Customer Login"));
    assert!(body.contains("name=\"password\""));
}

#[tokio::test]
#[ignore = "Requires running web server and reachable sheet exports"]
async fn test_invalid_password_shows_error() {
    let (status, body) =
        submit_password(&client(), "definitely-not-a-real-password-7f3a").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Invalid password"));
    // Failed logins land back on the login form, with support contact shown.
    assert!(body.contains("Customer Login"));
    assert!(body.contains("support and inquiries"));
}

#[tokio::test]
#[ignore = "Requires running web server"]
async fn test_empty_password_renders_landing_page() {
    let (status, body) = submit_password(&client(), "").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Customer Login"));
    assert!(!body.contains("Invalid password"));
}

#[tokio::test]
#[ignore = "Requires running web server and REDLINE_MASTER_PASSWORD"]
async fn test_master_password_views_all_sales() {
    let master = std::env::var("REDLINE_MASTER_PASSWORD")
        .expect("REDLINE_MASTER_PASSWORD must be set for this test");

    let (status, body) = submit_password(&client(), &master).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Welcome, Master User!"));
    assert!(body.contains("Master Access"));
    // Master metrics use the seller-facing labels.
    assert!(body.contains("Total Revenue") || body.contains("No purchases found"));
}
