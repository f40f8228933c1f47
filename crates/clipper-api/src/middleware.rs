//! API middleware.

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderValue, Method, Request, Response, StatusCode};
use axum::middleware::Next;
use axum::response::IntoResponse;
use tracing::info;
use uuid::Uuid;

use crate::state::AppState;

/// Pick the `Access-Control-Allow-Origin` value for a request origin.
///
/// The first configured domain is the fallback when the caller origin is
/// absent or not recognized; any `http://localhost*` origin is always echoed.
pub fn resolve_allow_origin(request_origin: Option<&str>, domains: &[String]) -> String {
    let fallback = domains.first().cloned().unwrap_or_default();

    match request_origin {
        None | Some("") => fallback,
        Some(origin) if origin.starts_with("http://localhost") => origin.to_string(),
        Some(origin) if domains.iter().any(|d| d == origin) => origin.to_string(),
        Some(_) => fallback,
    }
}

/// CORS middleware.
///
/// Stamps the allow headers on every response and stops `OPTIONS` preflights
/// here with an empty 204.
pub async fn cors(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response<Body> {
    let origin = request
        .headers()
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let allow_origin = resolve_allow_origin(origin.as_deref(), &state.config.cors_domains);

    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(request).await
    };

    let headers = response.headers_mut();
    if let Ok(value) = allow_origin.parse() {
        headers.insert("Access-Control-Allow-Origin", value);
    }
    headers.insert(
        "Access-Control-Allow-Methods",
        HeaderValue::from_static("GET, POST"),
    );
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_static("*"),
    );

    response
}

/// Request ID middleware.
pub async fn request_id(mut request: Request<Body>, next: Next) -> Response<Body> {
    // Generate or extract request ID
    let request_id = request
        .headers()
        .get("X-Request-ID")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    request.extensions_mut().insert(request_id.clone());

    let mut response = next.run(request).await;

    if let Ok(header_value) = request_id.parse() {
        response.headers_mut().insert("X-Request-ID", header_value);
    }

    response
}

/// Request logging middleware.
pub async fn request_logging(request: Request<Body>, next: Next) -> Response<Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = std::time::Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let duration = start.elapsed();

    // Skip health check logging
    if uri.path() != "/health" {
        info!(
            method = %method,
            uri = %uri,
            status = %status,
            duration_ms = %duration.as_millis(),
            "Request completed"
        );
    }

    response
}
