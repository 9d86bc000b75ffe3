//! CORS is open to any origin.

use reqwest::{Method, StatusCode};

use crate::common;

#[tokio::test]
async fn simple_requests_allow_any_origin() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .get(&base_url)
        .header("origin", "http://frontdesk.example")
        .send()
        .await
        .unwrap();

    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}

#[tokio::test]
async fn preflight_is_answered_with_mirrored_headers() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .request(Method::OPTIONS, format!("{}/api/visitors", base_url))
        .header("origin", "http://frontdesk.example")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "x-visitor-id")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(
        resp.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );

    let methods: &str = resp
        .headers()
        .get("access-control-allow-methods")
        .and_then(|v| v.to_str().ok())
        .unwrap();
    for method in ["GET", "HEAD", "PUT", "PATCH", "POST", "DELETE"] {
        assert!(methods.contains(method), "{method} missing from {methods}");
    }

    assert_eq!(
        resp.headers().get("access-control-allow-headers").unwrap(),
        "x-visitor-id"
    );
}
