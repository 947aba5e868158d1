use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    data::talk::TalkRepository,
    model::{
        row_version::RowVersion,
        speaker::{CreateSpeakerParams, Speaker},
    },
};

pub struct SpeakerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpeakerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the speakers of a camp ordered by name, optionally with their talks
    pub async fn get_by_camp(
        &self,
        camp_id: i32,
        camp_moniker: &str,
        include_talks: bool,
    ) -> Result<Vec<Speaker>, DbErr> {
        let rows = entity::prelude::Speaker::find()
            .filter(entity::speaker::Column::CampId.eq(camp_id))
            .find_also_related(entity::prelude::CampUser)
            .order_by_asc(entity::speaker::Column::Name)
            .order_by_asc(entity::speaker::Column::Id)
            .all(self.db)
            .await?;

        let mut speakers: Vec<Speaker> = rows
            .into_iter()
            .map(|(speaker, owner)| Speaker::from_entity(speaker, camp_moniker.to_string(), owner))
            .collect();

        if include_talks {
            let ids: Vec<i32> = speakers.iter().map(|s| s.id).collect();
            let mut talks_by_speaker = TalkRepository::new(self.db)
                .get_by_speakers(&ids, camp_moniker)
                .await?;

            for speaker in &mut speakers {
                speaker.talks = Some(talks_by_speaker.remove(&speaker.id).unwrap_or_default());
            }
        }

        Ok(speakers)
    }

    /// Gets a speaker with its owner and camp moniker, optionally with talks
    pub async fn get_by_id(&self, id: i32, include_talks: bool) -> Result<Option<Speaker>, DbErr> {
        let Some((speaker, owner)) = entity::prelude::Speaker::find_by_id(id)
            .find_also_related(entity::prelude::CampUser)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let Some(camp) = entity::prelude::Camp::find_by_id(speaker.camp_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut speaker = Speaker::from_entity(speaker, camp.moniker, owner);

        if include_talks {
            let mut talks = TalkRepository::new(self.db)
                .get_by_speakers(&[speaker.id], &speaker.camp_moniker)
                .await?;
            speaker.talks = Some(talks.remove(&speaker.id).unwrap_or_default());
        }

        Ok(Some(speaker))
    }

    pub async fn create(&self, params: CreateSpeakerParams) -> Result<Speaker, DbErr> {
        let txn = self.db.begin().await?;

        let speaker = entity::speaker::ActiveModel {
            camp_id: ActiveValue::Set(params.camp_id),
            user_id: ActiveValue::Set(Some(params.user_id)),
            name: ActiveValue::Set(params.name),
            company_name: ActiveValue::Set(params.company_name),
            phone_number: ActiveValue::Set(params.phone_number),
            website_url: ActiveValue::Set(params.website_url),
            twitter_name: ActiveValue::Set(params.twitter_name),
            github_name: ActiveValue::Set(params.github_name),
            bio: ActiveValue::Set(params.bio),
            head_shot_url: ActiveValue::Set(params.head_shot_url),
            row_version: ActiveValue::Set(RowVersion::generate().into_bytes()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        self.get_by_id(speaker.id, false)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Speaker with id {} not found after creation",
                speaker.id
            )))
    }

    /// Writes the speaker's profile fields if its row version is still current
    ///
    /// Returns the speaker as written with its new row version, or None when no row
    /// matched the id and row version.
    pub async fn update(&self, speaker: &Speaker) -> Result<Option<Speaker>, DbErr> {
        let txn = self.db.begin().await?;

        let mut updated = speaker.clone();
        updated.row_version = speaker.row_version.next();

        let result = entity::prelude::Speaker::update_many()
            .set(entity::speaker::ActiveModel {
                name: ActiveValue::Set(speaker.name.clone()),
                company_name: ActiveValue::Set(speaker.company_name.clone()),
                phone_number: ActiveValue::Set(speaker.phone_number.clone()),
                website_url: ActiveValue::Set(speaker.website_url.clone()),
                twitter_name: ActiveValue::Set(speaker.twitter_name.clone()),
                github_name: ActiveValue::Set(speaker.github_name.clone()),
                bio: ActiveValue::Set(speaker.bio.clone()),
                head_shot_url: ActiveValue::Set(speaker.head_shot_url.clone()),
                row_version: ActiveValue::Set(updated.row_version.as_bytes().to_vec()),
                ..Default::default()
            })
            .filter(entity::speaker::Column::Id.eq(speaker.id))
            .filter(entity::speaker::Column::RowVersion.eq(speaker.row_version.as_bytes().to_vec()))
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(None);
        }

        txn.commit().await?;

        Ok(Some(updated))
    }

    /// Deletes a speaker and its talks
    ///
    /// Returns the ids of the deleted talks, or None without deleting anything when
    /// the speaker's row version changed.
    pub async fn delete(&self, speaker: &Speaker) -> Result<Option<Vec<i32>>, DbErr> {
        let txn = self.db.begin().await?;

        let talk_ids: Vec<i32> = entity::prelude::Talk::find()
            .filter(entity::talk::Column::SpeakerId.eq(speaker.id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|talk| talk.id)
            .collect();

        entity::prelude::Talk::delete_many()
            .filter(entity::talk::Column::SpeakerId.eq(speaker.id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Speaker::delete_many()
            .filter(entity::speaker::Column::Id.eq(speaker.id))
            .filter(entity::speaker::Column::RowVersion.eq(speaker.row_version.as_bytes().to_vec()))
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(None);
        }

        txn.commit().await?;

        Ok(Some(talk_ids))
    }
}
