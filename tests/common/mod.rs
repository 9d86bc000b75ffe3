//! tests/common/mod.rs
//! Shared helper to spawn the gateway on an ephemeral port.

use axum::Router;
use tokio::net::TcpListener as TokioTcpListener;
use visitor_ticketing_api::config::{environment::EnvironmentVariables, state::AppState};
use visitor_ticketing_api::core::server::{create_app_with, serve_app};

/// Spawns the default app on a random unused port and returns its base URL.
pub fn spawn_app() -> String {
    spawn_app_with(EnvironmentVariables::default(), Router::new())
}

/// Spawns the app with a custom configuration and extra routes mounted.
pub fn spawn_app_with(env: EnvironmentVariables, routes: Router<AppState>) -> String {
    let app: Router = create_app_with(AppState::new(env), routes);

    // * Bind an ephemeral port using std::net::TcpListener.
    let std_listener: std::net::TcpListener = std::net::TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    std_listener.set_nonblocking(true).unwrap();

    let tokio_listener: TokioTcpListener = TokioTcpListener::from_std(std_listener)
        .expect("Failed to convert to tokio listener");

    let addr: std::net::SocketAddr = tokio_listener.local_addr().unwrap();

    // * Serve until the test runtime goes away.
    tokio::spawn(async move {
        serve_app(tokio_listener, app, std::future::pending())
            .await
            .expect("Server failed");
    });

    // * Return the base URL, e.g. "http://127.0.0.1:12345".
    format!("http://{}", addr)
}
