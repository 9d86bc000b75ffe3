// Buffers and parses JSON / URL-encoded request bodies

use axum::{
    body::{to_bytes, Body, Bytes},
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use http_body_util::LengthLimitError;
use serde::Serialize;
use serde_json::Value;

use crate::config::state::AppState;
use crate::utils::error_handler::{find_cause, AppError};

/// Parsed request body, stored in the request extensions for handlers
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ParsedBody {
    Json(Value),
    /// Flat key/value pairs in request order (no nested keys)
    Form(Vec<(String, String)>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Json,
    Form,
}

/// Decides from the content type whether the body should be parsed at all
pub fn body_kind(headers: &HeaderMap) -> Option<BodyKind> {
    let content_type: &str = headers.get(CONTENT_TYPE)?.to_str().ok()?;
    let mime: String = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    // Only the exact JSON essence; `+json` suffixes pass through untouched
    if mime == "application/json" {
        Some(BodyKind::Json)
    } else if mime == "application/x-www-form-urlencoded" {
        Some(BodyKind::Form)
    } else {
        None
    }
}

/// Empty bodies yield `None`. JSON bodies must be an object or an array.
pub fn parse_body(kind: BodyKind, bytes: &[u8]) -> Result<Option<ParsedBody>, AppError> {
    if bytes.is_empty() {
        return Ok(None);
    }

    match kind {
        BodyKind::Json => {
            let value: Value = serde_json::from_slice(bytes)
                .map_err(|err| AppError::BadRequest(format!("Malformed JSON body: {err}")))?;

            if !(value.is_object() || value.is_array()) {
                return Err(AppError::BadRequest(
                    "JSON body must be an object or an array".to_string(),
                ));
            }
            Ok(Some(ParsedBody::Json(value)))
        }
        BodyKind::Form => Ok(Some(ParsedBody::Form(
            url::form_urlencoded::parse(bytes).into_owned().collect(),
        ))),
    }
}

pub async fn body_parser(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let Some(kind) = body_kind(req.headers()) else {
        return Ok(next.run(req).await);
    };

    let limit: usize = state.environment.max_request_body_size;
    let (mut parts, body) = req.into_parts();

    let bytes: Bytes = to_bytes(body, limit).await.map_err(|err| {
        if find_cause::<LengthLimitError>(&err).is_some() {
            AppError::PayloadTooLarge
        } else {
            AppError::BadRequest(format!("Failed to read request body: {err}"))
        }
    })?;

    if let Some(parsed) = parse_body(kind, &bytes)? {
        parts.extensions.insert(parsed);
    }

    // Handlers still get the raw bytes
    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}
