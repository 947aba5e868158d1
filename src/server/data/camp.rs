use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};

use crate::server::{
    data::speaker::SpeakerRepository,
    model::{
        camp::{Camp, CampParams, Location},
        row_version::RowVersion,
    },
};

pub struct CampRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CampRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all camps with their locations, ordered by event date
    pub async fn get_all(&self) -> Result<Vec<Camp>, DbErr> {
        let camps = entity::prelude::Camp::find()
            .find_also_related(entity::prelude::Location)
            .order_by_asc(entity::camp::Column::EventDate)
            .order_by_asc(entity::camp::Column::Id)
            .all(self.db)
            .await?;

        Ok(camps
            .into_iter()
            .map(|(camp, location)| Camp::from_entity(camp, location))
            .collect())
    }

    /// Finds a camp by moniker ignoring case, optionally with speakers and their talks
    pub async fn find_by_moniker(
        &self,
        moniker: &str,
        include_speakers: bool,
    ) -> Result<Option<Camp>, DbErr> {
        let result = entity::prelude::Camp::find()
            .filter(moniker_matches(moniker))
            .find_also_related(entity::prelude::Location)
            .one(self.db)
            .await?;

        let Some((camp, location)) = result else {
            return Ok(None);
        };

        let mut camp = Camp::from_entity(camp, location);

        if include_speakers {
            let speakers = SpeakerRepository::new(self.db)
                .get_by_camp(camp.id, &camp.moniker, true)
                .await?;
            camp.speakers = Some(speakers);
        }

        Ok(Some(camp))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Camp>, DbErr> {
        let result = entity::prelude::Camp::find_by_id(id)
            .find_also_related(entity::prelude::Location)
            .one(self.db)
            .await?;

        Ok(result.map(|(camp, location)| Camp::from_entity(camp, location)))
    }

    /// Checks whether another camp already uses the moniker (case-insensitive)
    pub async fn moniker_exists(
        &self,
        moniker: &str,
        excluding_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Camp::find().filter(moniker_matches(moniker));

        if let Some(id) = excluding_id {
            query = query.filter(entity::camp::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Inserts a camp and its location in one transaction
    pub async fn create(&self, params: CampParams) -> Result<Camp, DbErr> {
        let txn = self.db.begin().await?;

        let location_id = if params.location.is_empty() {
            None
        } else {
            Some(insert_location(&txn, &params.location).await?)
        };

        let camp = entity::camp::ActiveModel {
            moniker: ActiveValue::Set(params.moniker),
            name: ActiveValue::Set(params.name),
            event_date: ActiveValue::Set(params.event_date),
            length: ActiveValue::Set(params.length),
            description: ActiveValue::Set(params.description),
            location_id: ActiveValue::Set(location_id),
            row_version: ActiveValue::Set(RowVersion::generate().into_bytes()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        self.find_by_id(camp.id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Camp with id {} not found after creation",
            camp.id
        )))
    }

    /// Writes every field of `camp` if its row version is still current
    ///
    /// The location row is updated, created or left absent to match `camp.location`.
    /// Returns None when the stored row version no longer matches (or the camp is gone);
    /// nothing is written in that case.
    pub async fn update(&self, camp: &Camp) -> Result<Option<Camp>, DbErr> {
        let txn = self.db.begin().await?;

        let location_id = match camp.location_id {
            Some(id) => {
                let mut location = location_active_model(&camp.location);
                location.id = ActiveValue::Unchanged(id);
                location.update(&txn).await?;
                Some(id)
            }
            None if !camp.location.is_empty() => Some(insert_location(&txn, &camp.location).await?),
            None => None,
        };

        let result = entity::prelude::Camp::update_many()
            .set(entity::camp::ActiveModel {
                moniker: ActiveValue::Set(camp.moniker.clone()),
                name: ActiveValue::Set(camp.name.clone()),
                event_date: ActiveValue::Set(camp.event_date),
                length: ActiveValue::Set(camp.length),
                description: ActiveValue::Set(camp.description.clone()),
                location_id: ActiveValue::Set(location_id),
                row_version: ActiveValue::Set(camp.row_version.next().into_bytes()),
                ..Default::default()
            })
            .filter(entity::camp::Column::Id.eq(camp.id))
            .filter(entity::camp::Column::RowVersion.eq(camp.row_version.as_bytes().to_vec()))
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(None);
        }

        txn.commit().await?;

        self.find_by_id(camp.id).await
    }

    /// Deletes a camp with its speakers, their talks and its location
    ///
    /// Returns the ids of the deleted talks, or None without deleting anything when
    /// the camp's row version changed.
    pub async fn delete(&self, camp: &Camp) -> Result<Option<Vec<i32>>, DbErr> {
        let txn = self.db.begin().await?;

        let speaker_ids: Vec<i32> = entity::prelude::Speaker::find()
            .filter(entity::speaker::Column::CampId.eq(camp.id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|speaker| speaker.id)
            .collect();

        let mut talk_ids = Vec::new();
        if !speaker_ids.is_empty() {
            talk_ids = entity::prelude::Talk::find()
                .filter(entity::talk::Column::SpeakerId.is_in(speaker_ids.iter().copied()))
                .all(&txn)
                .await?
                .into_iter()
                .map(|talk| talk.id)
                .collect();

            entity::prelude::Talk::delete_many()
                .filter(entity::talk::Column::SpeakerId.is_in(speaker_ids))
                .exec(&txn)
                .await?;
        }

        entity::prelude::Speaker::delete_many()
            .filter(entity::speaker::Column::CampId.eq(camp.id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Camp::delete_many()
            .filter(entity::camp::Column::Id.eq(camp.id))
            .filter(entity::camp::Column::RowVersion.eq(camp.row_version.as_bytes().to_vec()))
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(None);
        }

        if let Some(location_id) = camp.location_id {
            entity::prelude::Location::delete_by_id(location_id)
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;

        Ok(Some(talk_ids))
    }
}

fn moniker_matches(moniker: &str) -> Condition {
    Condition::all().add(Expr::cust_with_values(
        "LOWER(\"camp\".\"moniker\") = ?",
        [moniker.to_lowercase()],
    ))
}

fn location_active_model(location: &Location) -> entity::location::ActiveModel {
    entity::location::ActiveModel {
        address1: ActiveValue::Set(location.address1.clone()),
        address2: ActiveValue::Set(location.address2.clone()),
        address3: ActiveValue::Set(location.address3.clone()),
        city_town: ActiveValue::Set(location.city_town.clone()),
        state_province: ActiveValue::Set(location.state_province.clone()),
        postal_code: ActiveValue::Set(location.postal_code.clone()),
        country: ActiveValue::Set(location.country.clone()),
        ..Default::default()
    }
}

async fn insert_location(txn: &DatabaseTransaction, location: &Location) -> Result<i32, DbErr> {
    let location = location_active_model(location).insert(txn).await?;
    Ok(location.id)
}
