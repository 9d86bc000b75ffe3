// Application router assembly, serving and shutdown

use std::{future::Future, io, net::SocketAddr, time::Duration};
use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    middleware::{from_fn, from_fn_with_state},
    Router,
};
use tokio::{net::TcpListener, signal};
use tower::{timeout::TimeoutLayer, ServiceBuilder};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{error, info, Level};

use crate::api::{
    api_routes,
    fallback::not_found_handler,
    middleware::{
        access_log::access_log,
        body_parser::body_parser,
        cors::{cors_layer, preflight_no_content},
        security_headers::with_security_headers,
    },
};
use crate::config::state::AppState;
use crate::utils::error_handler::{error_handler, handle_global_error};

/// Creates the application router with the default route table
pub fn create_app(state: AppState) -> Router {
    create_app_with(state, Router::new())
}

/// Same middleware stack as [`create_app`], with `routes` mounted next to
/// the default route table.
///
/// Stages, outermost first: security headers, preflight status, CORS,
/// tracing and access log, terminal error handler, layer error mapping,
/// timeout, body parsing, routes, 404 fallback.
pub fn create_app_with(state: AppState, routes: Router<AppState>) -> Router {
    let env = state.environment.clone();

    let router: Router = api_routes()
        .merge(routes)
        .fallback(not_found_handler)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(from_fn(access_log))
                .layer(from_fn(error_handler))
                .layer(HandleErrorLayer::new(handle_global_error))
                .layer(TimeoutLayer::new(Duration::from_secs(env.default_timeout_seconds)))
                .layer(DefaultBodyLimit::max(env.max_request_body_size))
                .layer(from_fn_with_state(state.clone(), body_parser)),
        )
        .with_state(state)
        .layer(cors_layer())
        .layer(from_fn(preflight_no_content));

    with_security_headers(router)
}

/// Logs where the server ended up listening
pub fn on_listening(listener: &TcpListener) -> io::Result<SocketAddr> {
    let addr: SocketAddr = listener.local_addr()?;
    info!("Server listening on port {}", addr.port());
    Ok(addr)
}

/// Serves `app` until `shutdown` resolves. Peer addresses are made
/// available to the access log.
pub async fn serve_app<F>(listener: TcpListener, app: Router, shutdown: F) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown)
        .await
}

/// Handles graceful shutdown signals (Ctrl+C and TERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                error!("Failed to install TERM signal handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Shutting down via Ctrl+C"),
        _ = terminate => info!("Shutting down via TERM signal"),
    }
}
