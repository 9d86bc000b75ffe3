// JSON envelope used for every error response leaving the gateway

use axum::{
    body::Body,
    http::{header::{CONTENT_LENGTH, CONTENT_TYPE}, response::Parts, HeaderValue, Response, StatusCode},
};
use chrono::Utc;
use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer, Value};
use tracing::{debug, error};

/// Standard JSON error body
#[derive(Debug, Serialize)]
pub struct ResponseFormat {
    pub status: String,          // HTTP status text (e.g. "NOT_FOUND")
    pub code: u16,               // HTTP status code
    pub data: Value,             // Always null for errors
    pub messages: Vec<String>,   // Client-facing error messages
    pub date: String,            // ISO timestamp
}

impl ResponseFormat {
    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status_label(status),
            code: status.as_u16(),
            data: Value::Null,
            messages: vec![message.into()],
            date: Utc::now().to_rfc3339(),
        }
    }
}

/// "Not Found" -> "NOT_FOUND"
pub fn status_label(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("UNKNOWN STATUS")
        .to_uppercase()
        .replace(' ', "_")
}

fn to_two_space_indented_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut writer: Vec<u8> = Vec::new();
    let mut ser: Serializer<&mut Vec<u8>, PrettyFormatter<'_>> =
        Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"  "));

    value.serialize(&mut ser)?;

    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&writer).into_owned())
}

fn log_formatted_response(wrapped: &ResponseFormat) {
    match to_two_space_indented_json(wrapped) {
        Ok(spaced_json) => debug!("\nError response:\n{}", spaced_json),
        Err(err) => error!("Failed to format response JSON: {:?}", err),
    }
}

/// Replaces the body of `parts` with the serialized envelope
pub fn build_json_response(mut parts: Parts, wrapped: &ResponseFormat) -> Response<Body> {
    log_formatted_response(wrapped);

    let json_body: Vec<u8> = match serde_json::to_vec(wrapped) {
        Ok(body) => body,
        Err(err) => {
            error!("Failed to serialize error response: {err}");
            parts.status = StatusCode::INTERNAL_SERVER_ERROR;
            b"{}".to_vec()
        }
    };

    parts.headers.remove(CONTENT_LENGTH);
    parts.headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Response::from_parts(parts, Body::from(json_body))
}
