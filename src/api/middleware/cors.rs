use axum::{
    extract::Request,
    http::{header::ACCESS_CONTROL_REQUEST_METHOD, Method, StatusCode},
    middleware::Next,
    response::Response,
};
use tower_http::cors::{AllowHeaders, Any, CorsLayer};

/// Open CORS policy: any origin, the common methods, and whatever request
/// headers the preflight asks for.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers(AllowHeaders::mirror_request())
}

fn is_preflight(req: &Request) -> bool {
    req.method() == Method::OPTIONS && req.headers().contains_key(ACCESS_CONTROL_REQUEST_METHOD)
}

/// Wraps [`cors_layer`]: answered preflights go out as 204 No Content
pub async fn preflight_no_content(req: Request, next: Next) -> Response {
    let preflight: bool = is_preflight(&req);
    let mut response: Response = next.run(req).await;

    if preflight && response.status() == StatusCode::OK {
        *response.status_mut() = StatusCode::NO_CONTENT;
    }

    response
}
