// Catch-all for unmatched routes

use axum::http::{Method, Uri};
use tracing::debug;

use crate::utils::error_handler::AppError;

/// Forwards a generic "Not Found" error to the terminal error handler
pub async fn not_found_handler(method: Method, uri: Uri) -> AppError {
    debug!("No route for {method} {uri}");
    AppError::NotFound
}
