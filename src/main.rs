use axum::Router;
use tokio::net::TcpListener;
use tracing::error;

use visitor_ticketing_api::config::{environment::load_dotenv, state::AppState};
use visitor_ticketing_api::core::{
    listener::setup_listener,
    logging::init_tracing,
    server::{create_app, on_listening, serve_app, shutdown_signal},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env first, so RUST_LOG from it reaches the subscriber
    load_dotenv();
    init_tracing();

    let state: AppState = AppState::from_env()?;

    let listener: TcpListener = match setup_listener(&state.environment).await {
        Ok(listener) => listener,
        Err(err) if err.is_known_bind_failure() => {
            error!("{err}");
            std::process::exit(1);
        }
        // Anything else is fatal
        Err(err) => return Err(err.into()),
    };

    on_listening(&listener)?;

    let app: Router = create_app(state);
    serve_app(listener, app, shutdown_signal()).await?;

    Ok(())
}
