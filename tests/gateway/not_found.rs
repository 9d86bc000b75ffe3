//! Unmatched routes are forwarded to the terminal error handler as 404s.

use reqwest::StatusCode;
use serde_json::Value;

use crate::common;

async fn assert_not_found(resp: reqwest::Response) {
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "application/json"
    );

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["status"], "NOT_FOUND");
    assert_eq!(json["code"], 404);
    assert!(json["data"].is_null());
    assert_eq!(json["messages"][0], "Not Found");
    assert!(json["date"].is_string());
}

#[tokio::test]
async fn returns_404_for_nonexistent_route() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::get(format!("{}/does-not-exist", base_url))
        .await
        .expect("Failed to execute request.");

    assert_not_found(resp).await;
}

#[tokio::test]
async fn feature_mounts_are_not_served_yet() {
    let base_url: String = common::spawn_app();
    let client: reqwest::Client = reqwest::Client::new();

    for path in ["/api/auth", "/api/visitors", "/api/visitors/1"] {
        let resp: reqwest::Response = client
            .get(format!("{}{}", base_url, path))
            .send()
            .await
            .unwrap();
        assert_not_found(resp).await;
    }
}

#[tokio::test]
async fn other_methods_on_root_are_not_found() {
    let base_url: String = common::spawn_app();
    let client: reqwest::Client = reqwest::Client::new();

    let resp: reqwest::Response = client.post(&base_url).send().await.unwrap();
    assert_not_found(resp).await;

    let resp: reqwest::Response = client.delete(&base_url).send().await.unwrap();
    assert_not_found(resp).await;
}
