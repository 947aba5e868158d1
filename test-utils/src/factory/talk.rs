//! Talk factory for creating test talk entities.

use crate::factory::helpers::{next_id, next_row_version};
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test talks with customizable fields.
pub struct TalkFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::talk::Model,
}

impl<'a> TalkFactory<'a> {
    /// Creates a new TalkFactory for the given speaker.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `speaker_id` - Speaker giving the talk
    pub fn new(db: &'a DatabaseConnection, speaker_id: i32) -> Self {
        let id = next_id();
        let entity = fixture::talk::entity_builder()
            .speaker_id(speaker_id)
            .title(format!("Talk {}", id))
            .row_version(next_row_version())
            .build();

        Self { db, entity }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.entity.title = title.into();
        self
    }

    pub fn room(mut self, room: Option<String>) -> Self {
        self.entity.room = room;
        self
    }

    /// Builds and inserts the talk entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::talk::Model)` - Created talk entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::talk::Model, DbErr> {
        entity::talk::ActiveModel {
            speaker_id: ActiveValue::Set(self.entity.speaker_id),
            title: ActiveValue::Set(self.entity.title),
            abstract_text: ActiveValue::Set(self.entity.abstract_text),
            category: ActiveValue::Set(self.entity.category),
            level: ActiveValue::Set(self.entity.level),
            prerequisites: ActiveValue::Set(self.entity.prerequisites),
            starting_time: ActiveValue::Set(self.entity.starting_time),
            room: ActiveValue::Set(self.entity.room),
            row_version: ActiveValue::Set(self.entity.row_version),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a talk with default values for the given speaker.
pub async fn create_talk(
    db: &DatabaseConnection,
    speaker_id: i32,
) -> Result<entity::talk::Model, DbErr> {
    TalkFactory::new(db, speaker_id).build().await
}
