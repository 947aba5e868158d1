//! Talk fixtures for creating in-memory test data.

use chrono::{DateTime, TimeZone, Utc};
use entity::talk;

/// Default talk title.
pub const DEFAULT_TITLE: &str = "Building APIs in Rust";

/// Default talk abstract.
pub const DEFAULT_ABSTRACT: &str = "A tour of routing, extractors and error handling";

/// Default talk category.
pub const DEFAULT_CATEGORY: &str = "Web Development";

/// Default starting time (2024-05-01 09:00 UTC).
pub fn default_starting_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Creates a talk entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - speaker_id: `1`
/// - title: `"Building APIs in Rust"`
/// - category: `"Web Development"`
/// - starting_time: `2024-05-01T09:00:00Z`
pub fn entity() -> talk::Model {
    TalkEntityBuilder::default().build()
}

/// Creates a talk entity builder for customization.
pub fn entity_builder() -> TalkEntityBuilder {
    TalkEntityBuilder::default()
}

/// Builder for creating customized talk entity models.
pub struct TalkEntityBuilder {
    id: i32,
    speaker_id: i32,
    title: String,
    abstract_text: String,
    category: String,
    level: Option<String>,
    room: Option<String>,
    starting_time: DateTime<Utc>,
    row_version: Vec<u8>,
}

impl Default for TalkEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            speaker_id: 1,
            title: DEFAULT_TITLE.to_string(),
            abstract_text: DEFAULT_ABSTRACT.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            level: None,
            room: None,
            starting_time: default_starting_time(),
            row_version: 1u64.to_be_bytes().to_vec(),
        }
    }
}

impl TalkEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn speaker_id(mut self, speaker_id: i32) -> Self {
        self.speaker_id = speaker_id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn level(mut self, level: Option<String>) -> Self {
        self.level = level;
        self
    }

    pub fn room(mut self, room: Option<String>) -> Self {
        self.room = room;
        self
    }

    pub fn row_version(mut self, row_version: Vec<u8>) -> Self {
        self.row_version = row_version;
        self
    }

    /// Builds the talk entity model.
    pub fn build(self) -> talk::Model {
        talk::Model {
            id: self.id,
            speaker_id: self.speaker_id,
            title: self.title,
            abstract_text: self.abstract_text,
            category: self.category,
            level: self.level,
            prerequisites: None,
            starting_time: self.starting_time,
            room: self.room,
            row_version: self.row_version,
        }
    }
}
