use axum::{http::StatusCode, Json};
use serde::Serialize;
use tracing::instrument;

pub const STATUS_MESSAGE: &str = "Visitor Ticketing System API is running.";

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub message: &'static str,
}

// Liveness check served at the root path
#[instrument]
pub async fn root_handler() -> (StatusCode, Json<StatusResponse>) {
    (StatusCode::OK, Json(StatusResponse { message: STATUS_MESSAGE }))
}
