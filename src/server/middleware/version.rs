//! API version negotiation for the speaker and talk routes.
//!
//! A client selects a version with the `ver` query parameter or the `Camp-Version`
//! header. When both are present they must agree.

use std::fmt;

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::server::error::AppError;

pub const VERSION_QUERY: &str = "ver";
pub const VERSION_HEADER: &str = "camp-version";
pub const SUPPORTED_VERSIONS_HEADER: &str = "api-supported-versions";
pub const SUPPORTED_VERSIONS: &str = "1.0, 1.1, 2.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiVersion {
    V1_0,
    #[default]
    V1_1,
    V2_0,
}

impl ApiVersion {
    /// Accepts `1.0`, `1.1`, `2.0` and the shorthands `1` and `2`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" | "1.0" => Some(Self::V1_0),
            "1.1" => Some(Self::V1_1),
            "2" | "2.0" => Some(Self::V2_0),
            _ => None,
        }
    }

    /// Resolves the requested version from the raw query and header values.
    ///
    /// # Returns
    /// - `Ok(ApiVersion)` - Requested version, or 1.1 when none was given
    /// - `Err(AppError::BadRequest)` - Unknown version or query and header disagree
    pub fn negotiate(query: Option<&str>, header: Option<&str>) -> Result<Self, AppError> {
        let from_query = query.map(Self::parse_requested).transpose()?;
        let from_header = header.map(Self::parse_requested).transpose()?;

        match (from_query, from_header) {
            (Some(q), Some(h)) if q != h => Err(AppError::BadRequest(format!(
                "The HTTP resource does not support the API versions '{}' and '{}'",
                q, h
            ))),
            (Some(version), _) | (None, Some(version)) => Ok(version),
            (None, None) => Ok(Self::default()),
        }
    }

    fn parse_requested(raw: &str) -> Result<Self, AppError> {
        Self::parse(raw).ok_or_else(|| {
            AppError::BadRequest(format!(
                "The HTTP resource does not support the API version '{}'",
                raw.trim()
            ))
        })
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::V1_0 => "1.0",
            Self::V1_1 => "1.1",
            Self::V2_0 => "2.0",
        };
        f.write_str(text)
    }
}

impl<S> FromRequestParts<S> for ApiVersion
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = parts.uri.query().and_then(|query| {
            url::form_urlencoded::parse(query.as_bytes())
                .find(|(key, _)| key.eq_ignore_ascii_case(VERSION_QUERY))
                .map(|(_, value)| value.into_owned())
        });

        let header = match parts.headers.get(VERSION_HEADER) {
            Some(value) => Some(value.to_str().map_err(|_| {
                AppError::BadRequest("Camp-Version header is not valid text".to_string())
            })?),
            None => None,
        };

        Self::negotiate(query.as_deref(), header)
    }
}
