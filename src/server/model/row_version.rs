//! Optimistic concurrency tokens and the entity tags derived from them.

use base64::{engine::general_purpose, Engine as _};

const ROW_VERSION_LEN: usize = 16;

/// Opaque per-row concurrency token.
///
/// A fresh token is generated on every write. The bytes are only ever compared
/// for equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowVersion(Vec<u8>);

impl RowVersion {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Random token for a newly inserted row.
    pub fn generate() -> Self {
        let bytes: [u8; ROW_VERSION_LEN] = rand::random();
        Self(bytes.to_vec())
    }

    /// Random token guaranteed to differ from `self`.
    pub fn next(&self) -> Self {
        loop {
            let candidate = Self::generate();
            if candidate != *self {
                return candidate;
            }
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn tag(&self) -> EntityTag {
        EntityTag(general_purpose::STANDARD.encode(&self.0))
    }
}

/// Strong entity tag: the base64 text of a row version.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityTag(String);

impl EntityTag {
    /// Parses one tag as sent by a client.
    ///
    /// Surrounding whitespace and one pair of double quotes are removed. Weak
    /// tags (`W/"..."`) and empty values yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with("W/") {
            return None;
        }

        let unquoted = trimmed
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .unwrap_or(trimmed);

        if unquoted.is_empty() {
            None
        } else {
            Some(Self(unquoted.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Quoted form for the `ETag` response header.
    pub fn header_value(&self) -> String {
        format!("\"{}\"", self.0)
    }
}

/// Tag list of an `If-Match` or `If-None-Match` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagCondition {
    /// `*`, satisfied by any current representation.
    Any,
    Tags(Vec<EntityTag>),
}

impl TagCondition {
    /// Parses a comma-separated header value. Weak and empty items are dropped, so a
    /// list of only weak tags matches nothing.
    pub fn parse(raw: &str) -> Self {
        if raw.trim() == "*" {
            return Self::Any;
        }

        Self::Tags(raw.split(',').filter_map(EntityTag::parse).collect())
    }

    pub fn matches(&self, tag: &EntityTag) -> bool {
        match self {
            Self::Any => true,
            Self::Tags(tags) => tags.contains(tag),
        }
    }
}
