//! Camp fixtures for creating in-memory test data.

use chrono::NaiveDate;
use entity::camp;

/// Default test camp moniker.
pub const DEFAULT_MONIKER: &str = "ncdl2024";

/// Default test camp name.
pub const DEFAULT_NAME: &str = "NC Dev Lab";

/// Default camp length in days.
pub const DEFAULT_LENGTH: i32 = 3;

/// Default camp description, long enough to pass validation.
pub const DEFAULT_DESCRIPTION: &str = "A three day gathering of developers in North Carolina";

/// Default event date (2024-05-01).
pub fn default_event_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap_or_default()
}

/// Creates a camp entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - moniker: `"ncdl2024"`
/// - name: `"NC Dev Lab"`
/// - event_date: `2024-05-01`
/// - length: `3`
/// - location_id: `None`
/// - row_version: `[0, 0, 0, 0, 0, 0, 0, 1]`
///
/// # Example
///
/// ```rust,ignore
/// let camp = fixture::camp::entity();
/// assert_eq!(camp.moniker, "ncdl2024");
/// ```
pub fn entity() -> camp::Model {
    CampEntityBuilder::default().build()
}

/// Creates a camp entity builder for customization.
pub fn entity_builder() -> CampEntityBuilder {
    CampEntityBuilder::default()
}

/// Builder for creating customized camp entity models.
pub struct CampEntityBuilder {
    id: i32,
    moniker: String,
    name: String,
    event_date: NaiveDate,
    length: i32,
    description: String,
    location_id: Option<i32>,
    row_version: Vec<u8>,
}

impl Default for CampEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            moniker: DEFAULT_MONIKER.to_string(),
            name: DEFAULT_NAME.to_string(),
            event_date: default_event_date(),
            length: DEFAULT_LENGTH,
            description: DEFAULT_DESCRIPTION.to_string(),
            location_id: None,
            row_version: 1u64.to_be_bytes().to_vec(),
        }
    }
}

impl CampEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn moniker(mut self, moniker: impl Into<String>) -> Self {
        self.moniker = moniker.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn event_date(mut self, event_date: NaiveDate) -> Self {
        self.event_date = event_date;
        self
    }

    pub fn length(mut self, length: i32) -> Self {
        self.length = length;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn location_id(mut self, location_id: Option<i32>) -> Self {
        self.location_id = location_id;
        self
    }

    pub fn row_version(mut self, row_version: Vec<u8>) -> Self {
        self.row_version = row_version;
        self
    }

    /// Builds the camp entity model.
    pub fn build(self) -> camp::Model {
        camp::Model {
            id: self.id,
            moniker: self.moniker,
            name: self.name,
            event_date: self.event_date,
            length: self.length,
            description: self.description,
            location_id: self.location_id,
            row_version: self.row_version,
        }
    }
}
