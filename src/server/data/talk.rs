use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::{
    row_version::RowVersion,
    talk::{CreateTalkParams, Talk},
};

pub struct TalkRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TalkRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a speaker's talks ordered by title
    pub async fn get_by_speaker(
        &self,
        speaker_id: i32,
        camp_moniker: &str,
    ) -> Result<Vec<Talk>, DbErr> {
        let mut talks = self.get_by_speakers(&[speaker_id], camp_moniker).await?;
        Ok(talks.remove(&speaker_id).unwrap_or_default())
    }

    /// Gets the talks of several speakers of one camp, grouped by speaker id
    ///
    /// Each group is ordered by title. Speakers without talks have no entry.
    pub async fn get_by_speakers(
        &self,
        speaker_ids: &[i32],
        camp_moniker: &str,
    ) -> Result<HashMap<i32, Vec<Talk>>, DbErr> {
        if speaker_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let talks = entity::prelude::Talk::find()
            .filter(entity::talk::Column::SpeakerId.is_in(speaker_ids.iter().copied()))
            .order_by_asc(entity::talk::Column::Title)
            .order_by_asc(entity::talk::Column::Id)
            .all(self.db)
            .await?;

        let mut grouped: HashMap<i32, Vec<Talk>> = HashMap::new();
        for talk in talks {
            grouped
                .entry(talk.speaker_id)
                .or_default()
                .push(Talk::from_entity(talk, camp_moniker.to_string()));
        }

        Ok(grouped)
    }

    /// Gets a talk by id with the moniker of the camp its speaker belongs to
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Talk>, DbErr> {
        let Some((talk, Some(speaker))) = entity::prelude::Talk::find_by_id(id)
            .find_also_related(entity::prelude::Speaker)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let camp = entity::prelude::Camp::find_by_id(speaker.camp_id)
            .one(self.db)
            .await?;

        Ok(camp.map(|camp| Talk::from_entity(talk, camp.moniker)))
    }

    pub async fn create(&self, params: CreateTalkParams, camp_moniker: &str) -> Result<Talk, DbErr> {
        let txn = self.db.begin().await?;

        let talk = entity::talk::ActiveModel {
            speaker_id: ActiveValue::Set(params.speaker_id),
            title: ActiveValue::Set(params.title),
            abstract_text: ActiveValue::Set(params.abstract_text),
            category: ActiveValue::Set(params.category),
            level: ActiveValue::Set(params.level),
            prerequisites: ActiveValue::Set(params.prerequisites),
            starting_time: ActiveValue::Set(params.starting_time),
            room: ActiveValue::Set(params.room),
            row_version: ActiveValue::Set(RowVersion::generate().into_bytes()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(Talk::from_entity(talk, camp_moniker.to_string()))
    }

    /// Writes the talk's fields if its row version is still current
    ///
    /// Returns the talk as written with its new row version, or None when no row
    /// matched the id and row version.
    pub async fn update(&self, talk: &Talk) -> Result<Option<Talk>, DbErr> {
        let txn = self.db.begin().await?;

        let mut updated = talk.clone();
        updated.row_version = talk.row_version.next();

        let result = entity::prelude::Talk::update_many()
            .set(entity::talk::ActiveModel {
                title: ActiveValue::Set(talk.title.clone()),
                abstract_text: ActiveValue::Set(talk.abstract_text.clone()),
                category: ActiveValue::Set(talk.category.clone()),
                level: ActiveValue::Set(talk.level.clone()),
                prerequisites: ActiveValue::Set(talk.prerequisites.clone()),
                starting_time: ActiveValue::Set(talk.starting_time),
                room: ActiveValue::Set(talk.room.clone()),
                row_version: ActiveValue::Set(updated.row_version.as_bytes().to_vec()),
                ..Default::default()
            })
            .filter(entity::talk::Column::Id.eq(talk.id))
            .filter(entity::talk::Column::RowVersion.eq(talk.row_version.as_bytes().to_vec()))
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(None);
        }

        txn.commit().await?;

        Ok(Some(updated))
    }

    /// Deletes a talk if its row version is still current
    pub async fn delete(&self, talk: &Talk) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let result = entity::prelude::Talk::delete_many()
            .filter(entity::talk::Column::Id.eq(talk.id))
            .filter(entity::talk::Column::RowVersion.eq(talk.row_version.as_bytes().to_vec()))
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(false);
        }

        txn.commit().await?;

        Ok(true)
    }
}
