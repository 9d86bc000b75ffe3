/*
    * Registers the health check: one GET route at `/`. Other methods on `/`
    * are unmatched routes, same as unknown paths.
*/

use axum::{routing::get, Router};

use crate::api::{fallback::not_found_handler, health::handler::root_handler};
use crate::config::state::AppState;

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(root_handler).fallback(not_found_handler))
}
