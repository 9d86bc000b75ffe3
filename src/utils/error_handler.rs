// Typed gateway errors and the terminal error handler

use std::error::Error;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    BoxError,
};
// Axum uses http_body_util for length-limiting
use http_body_util::LengthLimitError;
// tower's error type for timeouts
use tower::timeout::error::Elapsed;
use tracing::{error, warn};

use crate::utils::response_handler::{build_json_response, ResponseFormat};

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Errors any pipeline stage may raise. They are rendered only by
/// [`error_handler`], never by the stage that raised them.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,

    #[error("{0}")]
    BadRequest(String),

    #[error("Request body too large")]
    PayloadTooLarge,

    #[error("Request timeout")]
    RequestTimeout,

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut response: Response = self.status_code().into_response();

        // Picked up by error_handler further out in the stack
        response.extensions_mut().insert(self);
        response
    }
}

/// Terminal stage: logs any forwarded `AppError` and formats the
/// client-facing body. Responses without an error pass through untouched.
pub async fn error_handler(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response: Response = next.run(req).await;

    let Some(err) = response.extensions().get::<AppError>().cloned() else {
        return response;
    };

    let status: StatusCode = err.status_code();
    if status.is_server_error() {
        error!(%method, %uri, status = status.as_u16(), "{err}");
    } else {
        warn!(%method, %uri, status = status.as_u16(), "{err}");
    }

    let (parts, _) = response.into_parts();
    build_json_response(parts, &ResponseFormat::error(status, err.to_string()))
}

/// Maps errors raised by tower layers to an `AppError`
pub async fn handle_global_error(err: BoxError) -> AppError {
    // 413 if the body was too large
    if find_cause::<LengthLimitError>(&*err).is_some() {
        return AppError::PayloadTooLarge;
    }

    // 408 if the request took too long
    if err.is::<Elapsed>() {
        return AppError::RequestTimeout;
    }

    // The detail stays in the logs; clients only see the generic message
    error!("Unhandled layer error: {err}");
    AppError::Internal(INTERNAL_ERROR_MESSAGE.to_string())
}

/// Finds a specific error type in an error chain, starting with `err` itself
pub fn find_cause<'a, T: Error + 'static>(err: &'a (dyn Error + 'static)) -> Option<&'a T> {
    let mut current: Option<&'a (dyn Error + 'static)> = Some(err);

    while let Some(e) = current {
        if let Some(typed) = e.downcast_ref::<T>() {
            return Some(typed);
        }
        current = e.source();
    }

    None
}
