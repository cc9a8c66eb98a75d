use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use hashlink_core::{ShortCode, ShortenParams};
use tracing::{debug, info};

use crate::error::{AppError, Result};
use crate::model::{ShortenRequest, ShortenResponse};
use crate::state::AppState;

/// `POST /v1/short`
///
/// The body is read and decoded by hand so that each failing stage keeps its
/// own error message.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<Response> {
    let body = body.map_err(AppError::ReadBody)?;
    let request: ShortenRequest =
        serde_json::from_slice(&body).map_err(AppError::UnmarshalJson)?;

    let host = request_host(&headers).unwrap_or_else(|| state.default_host().to_string());
    let shortened = state
        .shortener()
        .shorten(ShortenParams {
            original_url: request.url,
            scheme: state.scheme().to_string(),
            host,
        })
        .await?;
    info!(code = %shortened.code, "shortened url");

    let payload = serde_json::to_vec(&ShortenResponse {
        short_url: shortened.short_url,
    })
    .map_err(AppError::MarshalResponse)?;

    Ok(([(header::CONTENT_TYPE, "application/json")], payload).into_response())
}

/// `GET /{code}`
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Response> {
    // Lookups are by exact key, so codes are not validated here.
    let code = ShortCode::new_unchecked(code);

    match state.redirector().resolve(&code).await? {
        // An empty stored URL has nowhere to redirect to and counts as missing.
        Some(url) if !url.is_empty() => {
            let location =
                HeaderValue::try_from(url).map_err(|e| AppError::InvalidLocation(e.to_string()))?;
            debug!(code = %code, "redirecting");
            Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
        }
        _ => Ok(not_found_handler().await),
    }
}

pub async fn not_found_handler() -> Response {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

fn request_host(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .filter(|host| !host.is_empty())
        .map(str::to_string)
}
