use sea_orm::DatabaseConnection;

use crate::server::{
    data::{speaker::SpeakerRepository, talk::TalkRepository},
    error::{auth::AuthError, AppError},
    model::{
        row_version::{EntityTag, TagCondition},
        speaker::Speaker,
        talk::{CreateTalkParams, Talk, UpdateTalkParams},
        user::User,
    },
    service::talk_tag::TalkTagCache,
};

const INVALID_TALK: &str = "Invalid talk for the speaker selected";

pub struct TalkService<'a> {
    db: &'a DatabaseConnection,
    tags: &'a TalkTagCache,
}

impl<'a> TalkService<'a> {
    pub fn new(db: &'a DatabaseConnection, tags: &'a TalkTagCache) -> Self {
        Self { db, tags }
    }

    /// Gets a speaker's talks ordered by title
    ///
    /// # Returns
    /// - `Ok(Vec<Talk>)` - Talks of the speaker, possibly empty
    /// - `Err(AppError::NotFound)` - No speaker with that id
    /// - `Err(AppError::BadRequest)` - The speaker belongs to another camp
    pub async fn get_by_speaker(
        &self,
        moniker: &str,
        speaker_id: i32,
    ) -> Result<Vec<Talk>, AppError> {
        let speaker = self.find_speaker(speaker_id).await?;

        if !speaker.belongs_to_camp(moniker) {
            return Err(AppError::BadRequest(
                "Invalid talks for the speaker selected".to_string(),
            ));
        }

        let repo = TalkRepository::new(self.db);

        Ok(repo
            .get_by_speaker(speaker.id, &speaker.camp_moniker)
            .await?)
    }

    /// Finds the tag that lets an `If-None-Match` GET be answered 304
    ///
    /// Listed tags are checked against the tag cache only. `*` matches the current
    /// tag when the talk exists.
    pub async fn not_modified_tag(
        &self,
        talk_id: i32,
        condition: &TagCondition,
    ) -> Result<Option<EntityTag>, AppError> {
        match condition {
            TagCondition::Any => {
                let repo = TalkRepository::new(self.db);
                Ok(repo
                    .get_by_id(talk_id)
                    .await?
                    .map(|talk| talk.row_version.tag()))
            }
            TagCondition::Tags(tags) => {
                for tag in tags {
                    if self.tags.contains(talk_id, tag).await {
                        return Ok(Some(tag.clone()));
                    }
                }
                Ok(None)
            }
        }
    }

    /// Gets a talk of the speaker and records its current tag
    pub async fn get_by_id(
        &self,
        moniker: &str,
        speaker_id: i32,
        id: i32,
    ) -> Result<(Talk, EntityTag), AppError> {
        let talk = self.find_in_route(moniker, speaker_id, id).await?;
        let tag = self.tags.remember(&talk).await;

        Ok((talk, tag))
    }

    /// Loads a talk of the speaker that `user` may modify
    ///
    /// # Returns
    /// - `Ok(Talk)` - The talk is under the route's speaker and camp and `user` owns the speaker
    /// - `Err(AppError::NotFound)` - No talk with that id
    /// - `Err(AppError::BadRequest)` - The talk is not under the route's speaker and camp
    /// - `Err(AppError::AuthErr(AccessDenied))` - `user` does not own the speaker
    pub async fn get_owned(
        &self,
        moniker: &str,
        speaker_id: i32,
        id: i32,
        user: &User,
    ) -> Result<Talk, AppError> {
        let talk = self.find_in_route(moniker, speaker_id, id).await?;
        let speaker = self.find_speaker(talk.speaker_id).await?;

        ensure_owner(&speaker, user)?;

        Ok(talk)
    }

    /// Loads the speaker a new talk is added to, which `user` must own
    pub async fn get_owned_speaker(
        &self,
        moniker: &str,
        speaker_id: i32,
        user: &User,
    ) -> Result<Speaker, AppError> {
        let speaker = self.find_speaker(speaker_id).await?;

        if !speaker.belongs_to_camp(moniker) {
            return Err(AppError::BadRequest(
                "Speaker and Camp do not match".to_string(),
            ));
        }

        ensure_owner(&speaker, user)?;

        Ok(speaker)
    }

    /// Creates a talk for `speaker` and records its first tag
    pub async fn create(
        &self,
        speaker: &Speaker,
        params: CreateTalkParams,
    ) -> Result<(Talk, EntityTag), AppError> {
        let repo = TalkRepository::new(self.db);

        let talk = repo.create(params, &speaker.camp_moniker).await?;
        let tag = self.tags.remember(&talk).await;

        tracing::info!("Added talk {} for speaker {}", talk.id, speaker.id);

        Ok((talk, tag))
    }

    /// Merges a PUT body onto the talk and records the new tag
    ///
    /// The previous tags of the talk are evicted from the cache.
    ///
    /// # Arguments
    /// - `if_match` - Whether the request carried an `If-Match` header; a lost write
    ///   race is reported as 412 with one and 409 without
    pub async fn update(
        &self,
        mut talk: Talk,
        params: UpdateTalkParams,
        if_match: bool,
    ) -> Result<(Talk, EntityTag), AppError> {
        let repo = TalkRepository::new(self.db);

        params.apply(&mut talk);

        let Some(updated) = repo.update(&talk).await? else {
            return Err(lost_race(if_match, "Talk was modified by another request"));
        };

        let tag = self.tags.remember(&updated).await;

        Ok((updated, tag))
    }

    /// Deletes the talk and evicts its tags
    pub async fn delete(&self, talk: &Talk, if_match: bool) -> Result<(), AppError> {
        let repo = TalkRepository::new(self.db);

        if !repo.delete(talk).await? {
            return Err(lost_race(if_match, "Talk was modified by another request"));
        }

        self.tags.forget(talk.id).await;

        Ok(())
    }

    async fn find_speaker(&self, speaker_id: i32) -> Result<Speaker, AppError> {
        let repo = SpeakerRepository::new(self.db);

        repo.get_by_id(speaker_id, false)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Speaker {} was not found", speaker_id)))
    }

    async fn find_in_route(&self, moniker: &str, speaker_id: i32, id: i32) -> Result<Talk, AppError> {
        let repo = TalkRepository::new(self.db);

        let talk = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Talk {} was not found", id)))?;

        if talk.speaker_id != speaker_id || talk.camp_moniker.to_lowercase() != moniker.to_lowercase()
        {
            return Err(AppError::BadRequest(INVALID_TALK.to_string()));
        }

        Ok(talk)
    }
}

fn ensure_owner(speaker: &Speaker, user: &User) -> Result<(), AppError> {
    if speaker.is_owned_by(&user.user_name) {
        Ok(())
    } else {
        Err(AuthError::AccessDenied(
            user.id,
            format!("User does not own speaker {}", speaker.id),
        )
        .into())
    }
}

fn lost_race(if_match: bool, message: &str) -> AppError {
    if if_match {
        AppError::PreconditionFailed(message.to_string())
    } else {
        AppError::Conflict(message.to_string())
    }
}
