//! `If-Match` / `If-None-Match` request headers.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap, HeaderName},
};

use crate::server::model::row_version::{EntityTag, TagCondition};

/// Preconditions presented with a talk request. A header that is absent leaves its
/// field `None`; repeated headers are combined into one list.
#[derive(Debug, Clone, Default)]
pub struct Preconditions {
    pub if_match: Option<TagCondition>,
    pub if_none_match: Option<TagCondition>,
}

impl Preconditions {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            if_match: condition(headers, header::IF_MATCH),
            if_none_match: condition(headers, header::IF_NONE_MATCH),
        }
    }

    /// `false` only when `If-Match` was sent and no listed tag equals `current`.
    pub fn if_match_holds(&self, current: &EntityTag) -> bool {
        self.if_match
            .as_ref()
            .is_none_or(|condition| condition.matches(current))
    }
}

fn condition(headers: &HeaderMap, name: HeaderName) -> Option<TagCondition> {
    let values: Vec<&str> = headers
        .get_all(name)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .collect();

    if values.is_empty() {
        return None;
    }

    Some(TagCondition::parse(&values.join(",")))
}

impl<S> FromRequestParts<S> for Preconditions
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}
