use chrono::{DateTime, Utc};

use crate::{
    model::talk::{LinkDto, TalkDto},
    server::{
        error::validation::ValidationErrors,
        model::{link::LinkContext, row_version::RowVersion},
        util::validate::{Rules, Validate},
    },
};

#[derive(Debug, Clone)]
pub struct Talk {
    pub id: i32,
    pub speaker_id: i32,
    pub camp_moniker: String,
    pub title: String,
    pub abstract_text: String,
    pub category: String,
    pub level: Option<String>,
    pub prerequisites: Option<String>,
    pub starting_time: DateTime<Utc>,
    pub room: Option<String>,
    pub row_version: RowVersion,
}

impl Talk {
    pub fn from_entity(entity: entity::talk::Model, camp_moniker: String) -> Self {
        Self {
            id: entity.id,
            speaker_id: entity.speaker_id,
            camp_moniker,
            title: entity.title,
            abstract_text: entity.abstract_text,
            category: entity.category,
            level: entity.level,
            prerequisites: entity.prerequisites,
            starting_time: entity.starting_time,
            room: entity.room,
            row_version: RowVersion::from_bytes(entity.row_version),
        }
    }

    /// Converts domain model to DTO, including self, update and speaker links.
    pub fn into_dto(self, links: &LinkContext) -> TalkDto {
        let talk_url = links.talk(&self.camp_moniker, self.speaker_id, self.id);
        let speaker_url = links.speaker(&self.camp_moniker, self.speaker_id);

        TalkDto {
            url: talk_url.clone(),
            links: vec![
                link(talk_url.clone(), "Self", "GET"),
                link(talk_url, "Update", "PUT"),
                link(speaker_url, "Speaker", "GET"),
            ],
            title: Some(self.title),
            abstract_text: Some(self.abstract_text),
            category: Some(self.category),
            level: self.level,
            prerequisites: self.prerequisites,
            starting_time: Some(self.starting_time),
            room: self.room,
        }
    }
}

fn link(href: String, rel: &str, verb: &str) -> LinkDto {
    LinkDto {
        href,
        rel: rel.to_string(),
        verb: verb.to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct CreateTalkParams {
    pub speaker_id: i32,
    pub title: String,
    pub abstract_text: String,
    pub category: String,
    pub level: Option<String>,
    pub prerequisites: Option<String>,
    pub starting_time: DateTime<Utc>,
    pub room: Option<String>,
}

impl CreateTalkParams {
    /// Validates the DTO; a missing starting time defaults to now.
    pub fn from_dto(speaker_id: i32, dto: TalkDto) -> Result<Self, ValidationErrors> {
        dto.validate()?;

        let (Some(title), Some(abstract_text), Some(category)) =
            (dto.title, dto.abstract_text, dto.category)
        else {
            return Err(ValidationErrors::malformed("Talk is incomplete"));
        };

        Ok(Self {
            speaker_id,
            title,
            abstract_text,
            category,
            level: dto.level,
            prerequisites: dto.prerequisites,
            starting_time: dto.starting_time.unwrap_or_else(Utc::now),
            room: dto.room,
        })
    }
}

/// Null-ignoring merge of a PUT body onto an existing talk.
#[derive(Debug, Clone)]
pub struct UpdateTalkParams {
    dto: TalkDto,
}

impl UpdateTalkParams {
    pub fn from_dto(dto: TalkDto) -> Result<Self, ValidationErrors> {
        dto.validate()?;
        Ok(Self { dto })
    }

    pub fn apply(self, talk: &mut Talk) {
        let dto = self.dto;

        if let Some(title) = dto.title {
            talk.title = title;
        }
        if let Some(abstract_text) = dto.abstract_text {
            talk.abstract_text = abstract_text;
        }
        if let Some(category) = dto.category {
            talk.category = category;
        }
        if let Some(starting_time) = dto.starting_time {
            talk.starting_time = starting_time;
        }
        if dto.level.is_some() {
            talk.level = dto.level;
        }
        if dto.prerequisites.is_some() {
            talk.prerequisites = dto.prerequisites;
        }
        if dto.room.is_some() {
            talk.room = dto.room;
        }
    }
}

impl Validate for TalkDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Rules::new()
            .required("title", self.title.as_deref())
            .required("abstract", self.abstract_text.as_deref())
            .required("category", self.category.as_deref())
            .finish()
    }
}
