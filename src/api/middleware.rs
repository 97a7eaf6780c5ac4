//! Shared HTTP middleware

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
    Router,
};
use std::time::Instant;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

/// Header carrying the request id in both directions
pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Tag each request with an id and log its outcome under `service`
///
/// An incoming `x-request-id` is reused so the orchestrator's calls can be
/// followed across both services; otherwise a fresh UUID is minted. The id
/// is echoed back on the response.
pub async fn request_id_middleware(service: &'static str, request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let span = info_span!(
        "request",
        service,
        request_id = %request_id,
        method = %method,
        path = %path,
    );

    let mut response = next.run(request).instrument(span).await;

    info!(
        service,
        request_id = %request_id,
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        duration_ms = start.elapsed().as_millis(),
        "Request completed"
    );

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(REQUEST_ID_HEADER.clone(), value);
    }
    response
}

/// Wrap a service router with request ids, HTTP tracing and permissive CORS
pub fn with_http_layers(router: Router, service: &'static str) -> Router {
    router
        .layer(axum::middleware::from_fn(move |request: Request, next: Next| {
            request_id_middleware(service, request, next)
        }))
        .layer(
            TraceLayer::new_for_http().make_span_with(move |request: &axum::http::Request<_>| {
                info_span!(
                    "http_request",
                    service,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(CorsLayer::permissive())
}
