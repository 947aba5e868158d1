//! Speaker fixtures for creating in-memory test data.

use entity::speaker;

/// Default speaker name.
pub const DEFAULT_NAME: &str = "Shawn Wildermuth";

/// Default speaker bio, long enough to pass validation.
pub const DEFAULT_BIO: &str = "Shawn has been building software for over twenty years";

/// Creates a speaker entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - camp_id: `1`
/// - user_id: `None`
/// - name: `"Shawn Wildermuth"`
/// - all optional contact fields: `None`
pub fn entity() -> speaker::Model {
    SpeakerEntityBuilder::default().build()
}

/// Creates a speaker entity builder for customization.
pub fn entity_builder() -> SpeakerEntityBuilder {
    SpeakerEntityBuilder::default()
}

/// Builder for creating customized speaker entity models.
pub struct SpeakerEntityBuilder {
    id: i32,
    camp_id: i32,
    user_id: Option<i32>,
    name: String,
    company_name: Option<String>,
    bio: String,
    row_version: Vec<u8>,
}

impl Default for SpeakerEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            camp_id: 1,
            user_id: None,
            name: DEFAULT_NAME.to_string(),
            company_name: None,
            bio: DEFAULT_BIO.to_string(),
            row_version: 1u64.to_be_bytes().to_vec(),
        }
    }
}

impl SpeakerEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn camp_id(mut self, camp_id: i32) -> Self {
        self.camp_id = camp_id;
        self
    }

    pub fn user_id(mut self, user_id: Option<i32>) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn company_name(mut self, company_name: Option<String>) -> Self {
        self.company_name = company_name;
        self
    }

    pub fn bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = bio.into();
        self
    }

    pub fn row_version(mut self, row_version: Vec<u8>) -> Self {
        self.row_version = row_version;
        self
    }

    /// Builds the speaker entity model.
    pub fn build(self) -> speaker::Model {
        speaker::Model {
            id: self.id,
            camp_id: self.camp_id,
            user_id: self.user_id,
            name: self.name,
            company_name: self.company_name,
            phone_number: None,
            website_url: None,
            twitter_name: None,
            github_name: None,
            bio: self.bio,
            head_shot_url: None,
            row_version: self.row_version,
        }
    }
}
