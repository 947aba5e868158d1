//! Extracts the per-request `LinkContext` from the scheme and host the client used.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};

use crate::server::{error::AppError, model::link::LinkContext, state::AppState};

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Base URL seen by the client, if the request carries a usable `Host` header.
fn request_base(headers: &HeaderMap) -> Option<LinkContext> {
    let host = headers.get(header::HOST)?.to_str().ok()?.trim();
    if host.is_empty() {
        return None;
    }

    let scheme = headers
        .get(FORWARDED_PROTO)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| matches!(*value, "http" | "https"))
        .unwrap_or("http");

    LinkContext::parse(&format!("{}://{}", scheme, host))
}

impl FromRequestParts<AppState> for LinkContext {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(links) = request_base(&parts.headers) {
            return Ok(links);
        }

        let app_url = state.app_url().await;
        LinkContext::parse(&app_url)
            .ok_or_else(|| AppError::InternalError(format!("APP_URL {} is not a base URL", app_url)))
    }
}
