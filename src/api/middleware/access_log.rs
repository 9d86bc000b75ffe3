/*
    * One access-log line per request, in Apache "combined" format,
    * written through the application logger at INFO.
*/

use std::{net::SocketAddr, time::Instant};
use axum::{
    body::{Body, HttpBody},
    extract::ConnectInfo,
    http::{header, HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, Utc};
use tracing::info;

/// Everything a combined log line needs, captured around one request
#[derive(Debug, Clone)]
pub struct CombinedLogEntry {
    pub remote_addr: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub request_line: String,
    pub status: u16,
    pub content_length: Option<u64>,
    pub referer: Option<String>,
    pub user_agent: Option<String>,
}

impl CombinedLogEntry {
    /// `127.0.0.1 - - [10/Oct/2000:13:55:36 +0000] "GET / HTTP/1.1" 200 58 "-" "curl/8.0"`
    pub fn to_line(&self) -> String {
        format!(
            "{} - - [{}] \"{}\" {} {} \"{}\" \"{}\"",
            self.remote_addr.as_deref().unwrap_or("-"),
            self.timestamp.format("%d/%b/%Y:%H:%M:%S %z"),
            self.request_line,
            self.status,
            self.content_length
                .map(|len| len.to_string())
                .unwrap_or_else(|| "-".to_string()),
            self.referer.as_deref().unwrap_or("-"),
            self.user_agent.as_deref().unwrap_or("-"),
        )
    }
}

fn header_string(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

fn response_length(response: &Response) -> Option<u64> {
    header_string(response.headers(), header::CONTENT_LENGTH)
        .and_then(|len| len.parse().ok())
        .or_else(|| response.body().size_hint().exact())
}

pub async fn access_log(req: Request<Body>, next: Next) -> Response {
    let started: Instant = Instant::now();
    let timestamp: DateTime<Utc> = Utc::now();

    // Only present when served with connect info (see core::server::serve_app)
    let remote_addr: Option<String> = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string());
    let request_line: String = format!("{} {} {:?}", req.method(), req.uri(), req.version());
    let referer: Option<String> = header_string(req.headers(), header::REFERER);
    let user_agent: Option<String> = header_string(req.headers(), header::USER_AGENT);

    let response: Response = next.run(req).await;

    let entry = CombinedLogEntry {
        remote_addr,
        timestamp,
        request_line,
        status: response.status().as_u16(),
        content_length: response_length(&response),
        referer,
        user_agent,
    };
    info!(elapsed_ms = started.elapsed().as_millis() as u64, "{}", entry.to_line());

    response
}
