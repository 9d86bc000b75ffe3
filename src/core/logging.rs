// Tracing subscriber for the gateway process

use tracing_subscriber::{fmt, fmt::format::FmtSpan, EnvFilter};

/// Application logs at INFO, per-request spans from tower-http at DEBUG
pub const DEFAULT_LOG_FILTER: &str = "visitor_ticketing_api=info,tower_http=debug";

/// `RUST_LOG` when it is set and valid, otherwise [`DEFAULT_LOG_FILTER`]
pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs the global subscriber. Request spans are reported when they close,
/// which puts each request's latency next to its access-log line.
pub fn init_tracing() {
    fmt()
        .with_env_filter(log_filter())
        .with_span_events(FmtSpan::CLOSE)
        .init();
}
