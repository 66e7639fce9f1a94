use crate::error::{AppError, Result};
use crate::model::{ShortenRequest, ShortenResponse};
use crate::state::AppState;
use crate::validate::is_valid_url;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use pinhole_core::ShortCode;
use tracing::info;

/// `POST /shorten`
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>)> {
    let Json(request) = payload.map_err(|rejection| {
        AppError::BadRequest(format!("invalid request body: {}", rejection.body_text()))
    })?;

    if !is_valid_url(&request.long_url) {
        return Err(AppError::BadRequest(
            "invalid or empty 'long_url' provided, must be a valid http(s) url".to_string(),
        ));
    }

    let code = state.shortener().shorten(&request.long_url)?;
    let short_url = code.to_url(state.base_url().as_str());

    Ok((StatusCode::CREATED, Json(ShortenResponse { short_url })))
}

/// `GET /{short_code}`, answered with a 301 to the original URL.
pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse> {
    let code = ShortCode::new(short_code)?;
    let long_url = state.shortener().resolve(&code)?;

    info!(code = %code, url = %long_url, "redirecting");
    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, long_url)]))
}

/// `GET /` carries no code to resolve.
pub async fn missing_code_handler() -> AppError {
    AppError::BadRequest("short code not provided in url path".to_string())
}
