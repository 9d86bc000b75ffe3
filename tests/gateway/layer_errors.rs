//! Errors raised by handlers or tower layers reach the terminal handler.

use std::time::Duration;

use axum::{routing::get, Router};
use reqwest::StatusCode;
use serde_json::Value;
use visitor_ticketing_api::config::{environment::EnvironmentVariables, state::AppState};
use visitor_ticketing_api::utils::error_handler::AppError;

use crate::common;

async fn slow_handler() -> &'static str {
    tokio::time::sleep(Duration::from_secs(3)).await;
    "too late"
}

async fn failing_handler() -> Result<&'static str, AppError> {
    Err(AppError::Internal("ticket printer offline".to_string()))
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/slow", get(slow_handler))
        .route("/fail", get(failing_handler))
}

fn spawn() -> String {
    common::spawn_app_with(
        EnvironmentVariables {
            default_timeout_seconds: 1,
            ..EnvironmentVariables::default()
        },
        routes(),
    )
}

#[tokio::test]
async fn returns_408_when_request_times_out() {
    let base_url: String = spawn();

    let resp: reqwest::Response = tokio::time::timeout(
        Duration::from_secs(5),
        reqwest::get(format!("{}/slow", base_url)),
    )
    .await
    .expect("Client timed out waiting for server.")
    .expect("Request failed unexpectedly.");

    assert_eq!(resp.status(), StatusCode::REQUEST_TIMEOUT);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["status"], "REQUEST_TIMEOUT");
    assert_eq!(json["code"], 408);
}

#[tokio::test]
async fn returns_500_on_internal_error() {
    let base_url: String = spawn();

    let resp: reqwest::Response = reqwest::get(format!("{}/fail", base_url))
        .await
        .expect("Failed to make request.");

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["status"], "INTERNAL_SERVER_ERROR");
    assert_eq!(json["code"], 500);
    assert_eq!(json["messages"][0], "ticket printer offline");
}
