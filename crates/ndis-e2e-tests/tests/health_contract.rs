//! E2E tests for the liveness contract.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::{FRONTEND_ORIGIN, TestHarness};

/// The liveness probe returns exactly `{"status": "ok"}`.
#[tokio::test]
async fn e2e_health_returns_exact_payload() {
    let h = TestHarness::with_defaults();

    let (status, _, body) = h.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({"status": "ok"}));
}

/// Query parameters and extra request headers do not change the payload.
#[tokio::test]
async fn e2e_health_ignores_request_noise() {
    let h = TestHarness::with_defaults();

    let (status, _, body) = h.get("/health?deep=true&token=abc").await;
    assert_eq!(status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({"status": "ok"}));

    let (status, _, body) = h.get_with_origin("/health", FRONTEND_ORIGIN).await;
    assert_eq!(status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({"status": "ok"}));
}

/// The probe is side-effect-free: repeated calls keep answering identically.
#[tokio::test]
async fn e2e_health_is_idempotent() {
    let h = TestHarness::with_defaults();

    for _ in 0..5 {
        let (status, _, body) = h.get("/health").await;
        assert_eq!(status, StatusCode::OK);
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, json!({"status": "ok"}));
    }
}
