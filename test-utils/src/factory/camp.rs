//! Camp factory for creating test camp entities.

use crate::factory::helpers::{next_id, next_row_version};
use crate::fixture;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test camps with customizable fields.
///
/// Defaults come from `fixture::camp` with a unique moniker per camp.
///
/// # Example
///
/// ```rust,ignore
/// let camp = CampFactory::new(&db)
///     .moniker("atl2026")
///     .with_location("Atlanta", "USA")
///     .build()
///     .await?;
/// ```
pub struct CampFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::camp::Model,
    location: Option<(String, String)>,
}

impl<'a> CampFactory<'a> {
    /// Creates a new CampFactory with default values from fixture.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `CampFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::camp::entity_builder()
            .moniker(format!("camp{}", id))
            .name(format!("Code Camp {}", id))
            .row_version(next_row_version())
            .build();

        Self {
            db,
            entity,
            location: None,
        }
    }

    pub fn moniker(mut self, moniker: impl Into<String>) -> Self {
        self.entity.moniker = moniker.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn event_date(mut self, event_date: NaiveDate) -> Self {
        self.entity.event_date = event_date;
        self
    }

    pub fn length(mut self, length: i32) -> Self {
        self.entity.length = length;
        self
    }

    /// Inserts a location with the given city and country and links it to the camp.
    pub fn with_location(mut self, city_town: impl Into<String>, country: impl Into<String>) -> Self {
        self.location = Some((city_town.into(), country.into()));
        self
    }

    /// Builds and inserts the camp entity (and its location, if any) into the database.
    ///
    /// # Returns
    /// - `Ok(entity::camp::Model)` - Created camp entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::camp::Model, DbErr> {
        let location_id = match self.location {
            Some((city_town, country)) => Some(
                entity::location::ActiveModel {
                    city_town: ActiveValue::Set(Some(city_town)),
                    country: ActiveValue::Set(Some(country)),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
                .id,
            ),
            None => None,
        };

        entity::camp::ActiveModel {
            moniker: ActiveValue::Set(self.entity.moniker),
            name: ActiveValue::Set(self.entity.name),
            event_date: ActiveValue::Set(self.entity.event_date),
            length: ActiveValue::Set(self.entity.length),
            description: ActiveValue::Set(self.entity.description),
            location_id: ActiveValue::Set(location_id),
            row_version: ActiveValue::Set(self.entity.row_version),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a camp with default values.
///
/// Shorthand for `CampFactory::new(db).build().await`.
pub async fn create_camp(db: &DatabaseConnection) -> Result<entity::camp::Model, DbErr> {
    CampFactory::new(db).build().await
}
