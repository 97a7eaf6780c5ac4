//! Mail Retrieval Service handlers
//!
//! - `POST /read_emails` - `{filter, count}` to `[{subject, body}]`
//! - `GET /` - banner

use crate::api::middleware::with_http_layers;
use crate::error::AppError;
use crate::mail::MailService;
use crate::models::{BannerResponse, EmailMessage, MailFetchRequest};
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

/// Build the mail retrieval service router
pub fn mail_router(service: Arc<MailService>) -> Router {
    let router = Router::new()
        .route("/", get(root))
        .route("/read_emails", post(read_emails))
        .with_state(service);

    with_http_layers(router, "mail")
}

/// GET / - liveness banner
pub async fn root() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: "Mail Retrieval API is running".to_string(),
    })
}

/// POST /read_emails
///
/// # Returns
/// * `Ok(Json<Vec<EmailMessage>>)` - At most `count` messages, possibly none
/// * `Err(AppError)` - 400 for a malformed body or `count == 0`, 502 when
///   the provider fails
pub async fn read_emails(
    State(service): State<Arc<MailService>>,
    payload: Result<Json<MailFetchRequest>, JsonRejection>,
) -> Result<Json<Vec<EmailMessage>>, AppError> {
    let Json(request) = payload?;
    request.validate().map_err(AppError::InvalidRequest)?;

    let emails = service.fetch(&request).await?;
    Ok(Json(emails))
}
