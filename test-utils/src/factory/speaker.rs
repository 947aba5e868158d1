//! Speaker factory for creating test speaker entities.

use crate::factory::helpers::{next_id, next_row_version};
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test speakers with customizable fields.
pub struct SpeakerFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::speaker::Model,
}

impl<'a> SpeakerFactory<'a> {
    /// Creates a new SpeakerFactory for the given camp.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `camp_id` - Camp the speaker belongs to
    pub fn new(db: &'a DatabaseConnection, camp_id: i32) -> Self {
        let id = next_id();
        let entity = fixture::speaker::entity_builder()
            .camp_id(camp_id)
            .name(format!("Speaker Number {}", id))
            .row_version(next_row_version())
            .build();

        Self { db, entity }
    }

    pub fn user_id(mut self, user_id: Option<i32>) -> Self {
        self.entity.user_id = user_id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn company_name(mut self, company_name: Option<String>) -> Self {
        self.entity.company_name = company_name;
        self
    }

    /// Builds and inserts the speaker entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::speaker::Model)` - Created speaker entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::speaker::Model, DbErr> {
        entity::speaker::ActiveModel {
            camp_id: ActiveValue::Set(self.entity.camp_id),
            user_id: ActiveValue::Set(self.entity.user_id),
            name: ActiveValue::Set(self.entity.name),
            company_name: ActiveValue::Set(self.entity.company_name),
            phone_number: ActiveValue::Set(self.entity.phone_number),
            website_url: ActiveValue::Set(self.entity.website_url),
            twitter_name: ActiveValue::Set(self.entity.twitter_name),
            github_name: ActiveValue::Set(self.entity.github_name),
            bio: ActiveValue::Set(self.entity.bio),
            head_shot_url: ActiveValue::Set(self.entity.head_shot_url),
            row_version: ActiveValue::Set(self.entity.row_version),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unowned speaker in the given camp.
pub async fn create_speaker(
    db: &DatabaseConnection,
    camp_id: i32,
) -> Result<entity::speaker::Model, DbErr> {
    SpeakerFactory::new(db, camp_id).build().await
}
