//! Shared test harness for end-to-end tests.
//!
//! Builds the full router from a [`ServiceConfig`] and drives it through
//! `tower::oneshot`, exercising the real bootstrap path without binding a
//! socket.

use axum::Router;
use axum::body::Body;
use axum::http::header::{ACCESS_CONTROL_REQUEST_METHOD, ORIGIN};
use axum::http::{HeaderMap, Method, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use ndis_api::config::ServiceConfig;
use ndis_api::routes::build_router;

/// The frontend origin allowed by the default configuration.
#[allow(dead_code)]
pub const FRONTEND_ORIGIN: &str = "http://localhost:3000";

/// Harness around a router built from a given configuration.
pub struct TestHarness {
    pub router: Router,
}

#[allow(dead_code)]
impl TestHarness {
    /// Harness with the default configuration: the local frontend origin,
    /// credentials allowed, wildcard methods and headers.
    pub fn with_defaults() -> Self {
        Self::from_config(&ServiceConfig::default())
    }

    /// Harness from an explicit configuration.
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self {
            router: build_router(config).expect("config must bootstrap"),
        }
    }

    /// Issue a request; returns status, response headers, and raw body.
    pub async fn request(&self, request: Request<Body>) -> (StatusCode, HeaderMap, Vec<u8>) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec();
        (status, headers, body)
    }

    /// GET `path` with no extra headers.
    pub async fn get(&self, path: &str) -> (StatusCode, HeaderMap, Vec<u8>) {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// GET `path` with an `Origin` header.
    pub async fn get_with_origin(
        &self,
        path: &str,
        origin: &str,
    ) -> (StatusCode, HeaderMap, Vec<u8>) {
        self.request(
            Request::get(path)
                .header(ORIGIN, origin)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// CORS preflight for `method path` from `origin`.
    pub async fn preflight(
        &self,
        path: &str,
        origin: &str,
        method: Method,
    ) -> (StatusCode, HeaderMap, Vec<u8>) {
        self.request(
            Request::builder()
                .method(Method::OPTIONS)
                .uri(path)
                .header(ORIGIN, origin)
                .header(ACCESS_CONTROL_REQUEST_METHOD, method.as_str())
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }
}
