//! Speaker domain models and parameters.

use crate::{
    model::speaker::SpeakerDto,
    server::{
        error::validation::ValidationErrors,
        model::{link::LinkContext, row_version::RowVersion, talk::Talk},
        util::validate::{Rules, Validate},
    },
};

#[derive(Debug, Clone)]
pub struct Speaker {
    pub id: i32,
    pub camp_id: i32,
    /// Moniker of the owning camp, used for links and route checks.
    pub camp_moniker: String,
    pub user_id: Option<i32>,
    /// User name of the linked owner, if any.
    pub owner: Option<String>,
    pub name: String,
    pub company_name: Option<String>,
    pub phone_number: Option<String>,
    pub website_url: Option<String>,
    pub twitter_name: Option<String>,
    pub github_name: Option<String>,
    pub bio: String,
    pub head_shot_url: Option<String>,
    pub row_version: RowVersion,
    /// Present only when talks were requested.
    pub talks: Option<Vec<Talk>>,
}

impl Speaker {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The speaker row
    /// - `camp_moniker` - Moniker of the camp referenced by `entity.camp_id`
    /// - `owner` - User row referenced by `entity.user_id`, if loaded
    pub fn from_entity(
        entity: entity::speaker::Model,
        camp_moniker: String,
        owner: Option<entity::camp_user::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            camp_id: entity.camp_id,
            camp_moniker,
            user_id: entity.user_id,
            owner: owner.map(|user| user.user_name),
            name: entity.name,
            company_name: entity.company_name,
            phone_number: entity.phone_number,
            website_url: entity.website_url,
            twitter_name: entity.twitter_name,
            github_name: entity.github_name,
            bio: entity.bio,
            head_shot_url: entity.head_shot_url,
            row_version: RowVersion::from_bytes(entity.row_version),
            talks: None,
        }
    }

    /// Whether `user_name` is the speaker's linked owner. Unowned speakers have no owner.
    pub fn is_owned_by(&self, user_name: &str) -> bool {
        self.owner.as_deref() == Some(user_name)
    }

    /// Case-insensitive comparison against the route moniker.
    pub fn belongs_to_camp(&self, moniker: &str) -> bool {
        self.camp_moniker.to_lowercase() == moniker.to_lowercase()
    }

    pub fn into_dto(self, links: &LinkContext) -> SpeakerDto {
        SpeakerDto {
            url: links.speaker(&self.camp_moniker, self.id),
            name: Some(self.name),
            company_name: self.company_name,
            phone_number: self.phone_number,
            website_url: self.website_url,
            twitter_name: self.twitter_name,
            github_name: self.github_name,
            bio: Some(self.bio),
            head_shot_url: self.head_shot_url,
            talks: self
                .talks
                .map(|talks| talks.into_iter().map(|talk| talk.into_dto(links)).collect()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateSpeakerParams {
    pub camp_id: i32,
    /// Authenticated user creating the speaker; becomes its owner.
    pub user_id: i32,
    pub name: String,
    pub company_name: Option<String>,
    pub phone_number: Option<String>,
    pub website_url: Option<String>,
    pub twitter_name: Option<String>,
    pub github_name: Option<String>,
    pub bio: String,
    pub head_shot_url: Option<String>,
}

impl CreateSpeakerParams {
    /// Validates the DTO and converts it to creation parameters.
    pub fn from_dto(camp_id: i32, user_id: i32, dto: SpeakerDto) -> Result<Self, ValidationErrors> {
        dto.validate()?;

        let (Some(name), Some(bio)) = (dto.name, dto.bio) else {
            return Err(ValidationErrors::malformed("Speaker is incomplete"));
        };

        Ok(Self {
            camp_id,
            user_id,
            name,
            company_name: dto.company_name,
            phone_number: dto.phone_number,
            website_url: dto.website_url,
            twitter_name: dto.twitter_name,
            github_name: dto.github_name,
            bio,
            head_shot_url: dto.head_shot_url,
        })
    }
}

/// Null-ignoring merge of a PUT body onto an existing speaker.
#[derive(Debug, Clone)]
pub struct UpdateSpeakerParams {
    dto: SpeakerDto,
}

impl UpdateSpeakerParams {
    pub fn from_dto(dto: SpeakerDto) -> Result<Self, ValidationErrors> {
        dto.validate()?;
        Ok(Self { dto })
    }

    pub fn apply(self, speaker: &mut Speaker) {
        let dto = self.dto;

        if let Some(name) = dto.name {
            speaker.name = name;
        }
        if let Some(bio) = dto.bio {
            speaker.bio = bio;
        }
        merge(&mut speaker.company_name, dto.company_name);
        merge(&mut speaker.phone_number, dto.phone_number);
        merge(&mut speaker.website_url, dto.website_url);
        merge(&mut speaker.twitter_name, dto.twitter_name);
        merge(&mut speaker.github_name, dto.github_name);
        merge(&mut speaker.head_shot_url, dto.head_shot_url);
    }
}

impl Validate for SpeakerDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Rules::new()
            .required("name", self.name.as_deref())
            .min_length("name", self.name.as_deref(), 5)
            .required("bio", self.bio.as_deref())
            .min_length("bio", self.bio.as_deref(), 25)
            .max_length("bio", self.bio.as_deref(), 4000)
            .finish()
    }
}

fn merge(target: &mut Option<String>, value: Option<String>) {
    if value.is_some() {
        *target = value;
    }
}
