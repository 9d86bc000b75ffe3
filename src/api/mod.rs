/*
    * HTTP surface: route groups, the 404 fallback and the request middlewares.
*/

pub mod fallback;
pub mod health;
pub mod middleware;

use axum::Router;

use crate::config::state::AppState;

/// Route table mounted by `create_app`
pub fn api_routes() -> Router<AppState> {
    // Feature routers are nested here as they are built,
    // e.g. `.nest("/api/visitors", visitor_routes())`
    Router::new().merge(health::routes::health_routes())
}
