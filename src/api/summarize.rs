//! Summarization Service handlers
//!
//! - `POST /summarize` - summarize `{input}` into `{summary}`
//! - `GET /health` - check the primary model (always 200)
//! - `GET /` - banner

use crate::api::middleware::with_http_layers;
use crate::error::AppError;
use crate::models::{BannerResponse, HealthReport, SummarizeRequest, SummarizeResponse};
use crate::summarizer::SummarizationService;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

/// Build the summarization service router
pub fn summarizer_router(service: Arc<SummarizationService>) -> Router {
    let router = Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/summarize", post(summarize))
        .with_state(service);

    with_http_layers(router, "summarizer")
}

/// GET / - liveness banner
pub async fn root() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: "Email Summarizer API is running".to_string(),
    })
}

/// POST /summarize
///
/// # Returns
/// * `Ok(Json<SummarizeResponse>)` - The first candidate's summary
/// * `Err(AppError)` - 400 for a malformed body, 500 when every candidate failed
pub async fn summarize(
    State(service): State<Arc<SummarizationService>>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<SummarizeResponse>, AppError> {
    let Json(request) = payload?;
    let response = service.summarize(&request).await?;
    Ok(Json(response))
}

/// GET /health
pub async fn health_check(State(service): State<Arc<SummarizationService>>) -> Json<HealthReport> {
    Json(service.health().await)
}
