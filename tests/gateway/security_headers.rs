//! Every response carries the fixed security header set.

use crate::common;

const EXPECTED: [(&str, &str); 6] = [
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "SAMEORIGIN"),
    ("referrer-policy", "no-referrer"),
    ("strict-transport-security", "max-age=15552000; includeSubDomains"),
    ("cross-origin-opener-policy", "same-origin"),
    ("x-xss-protection", "0"),
];

fn assert_security_headers(resp: &reqwest::Response) {
    for (name, value) in EXPECTED {
        assert_eq!(
            resp.headers().get(name).and_then(|v| v.to_str().ok()),
            Some(value),
            "header {name}"
        );
    }

    let csp: &str = resp
        .headers()
        .get("content-security-policy")
        .and_then(|v| v.to_str().ok())
        .expect("missing content-security-policy");
    assert!(csp.starts_with("default-src 'self';"));
    assert!(csp.contains("object-src 'none'"));

    assert!(resp.headers().get("x-powered-by").is_none());
}

#[tokio::test]
async fn successful_responses_have_security_headers() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::get(&base_url).await.unwrap();

    assert!(resp.status().is_success());
    assert_security_headers(&resp);
}

#[tokio::test]
async fn error_responses_have_security_headers() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::get(format!("{}/missing", base_url))
        .await
        .unwrap();

    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
    assert_security_headers(&resp);
}
