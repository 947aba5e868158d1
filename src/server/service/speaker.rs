use sea_orm::DatabaseConnection;

use crate::server::{
    data::{camp::CampRepository, speaker::SpeakerRepository},
    error::{auth::AuthError, AppError},
    model::{
        camp::Camp,
        speaker::{CreateSpeakerParams, Speaker, UpdateSpeakerParams},
        user::User,
    },
    service::talk_tag::TalkTagCache,
};

const SPEAKER_NOT_IN_CAMP: &str = "Speaker not in specified Camp";
const SPEAKER_CAMP_MISMATCH: &str = "Speaker and Camp do not match";

pub struct SpeakerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpeakerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the speakers of a camp ordered by name
    pub async fn get_by_camp(
        &self,
        moniker: &str,
        include_talks: bool,
    ) -> Result<Vec<Speaker>, AppError> {
        let camp = self.find_camp(moniker).await?;

        let repo = SpeakerRepository::new(self.db);

        Ok(repo
            .get_by_camp(camp.id, &camp.moniker, include_talks)
            .await?)
    }

    /// Gets a speaker of the camp
    pub async fn get_by_id(
        &self,
        moniker: &str,
        id: i32,
        include_talks: bool,
    ) -> Result<Speaker, AppError> {
        self.find_in_camp(moniker, id, include_talks, SPEAKER_NOT_IN_CAMP)
            .await
    }

    /// Loads a speaker of the camp that `user` may modify
    ///
    /// # Returns
    /// - `Ok(Speaker)` - The speaker is in the camp and owned by `user`
    /// - `Err(AppError::NotFound)` - No speaker with that id
    /// - `Err(AppError::BadRequest)` - The speaker belongs to another camp
    /// - `Err(AppError::AuthErr(AccessDenied))` - `user` is not the speaker's owner
    pub async fn get_owned(&self, moniker: &str, id: i32, user: &User) -> Result<Speaker, AppError> {
        let speaker = self
            .find_in_camp(moniker, id, false, SPEAKER_CAMP_MISMATCH)
            .await?;

        if !speaker.is_owned_by(&user.user_name) {
            return Err(AuthError::AccessDenied(
                user.id,
                format!("User does not own speaker {}", speaker.id),
            )
            .into());
        }

        Ok(speaker)
    }

    /// Finds the camp a new speaker is added to
    pub async fn find_camp(&self, moniker: &str) -> Result<Camp, AppError> {
        let repo = CampRepository::new(self.db);

        repo.find_by_moniker(moniker, false)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Could not find camp {}", moniker)))
    }

    /// Creates a speaker owned by the user in `params`
    pub async fn create(&self, params: CreateSpeakerParams) -> Result<Speaker, AppError> {
        let repo = SpeakerRepository::new(self.db);

        let speaker = repo.create(params).await?;

        tracing::info!(
            "Added speaker {} to camp {}",
            speaker.id,
            speaker.camp_moniker
        );

        Ok(speaker)
    }

    /// Merges the present fields of a PUT body onto the speaker
    pub async fn update(
        &self,
        mut speaker: Speaker,
        params: UpdateSpeakerParams,
    ) -> Result<Speaker, AppError> {
        let repo = SpeakerRepository::new(self.db);

        params.apply(&mut speaker);

        repo.update(&speaker).await?.ok_or_else(|| {
            AppError::Conflict("Speaker was modified by another request".to_string())
        })
    }

    /// Deletes the speaker and its talks
    ///
    /// Tags issued for the deleted talks are dropped from `tags`.
    pub async fn delete(&self, speaker: &Speaker, tags: &TalkTagCache) -> Result<(), AppError> {
        let repo = SpeakerRepository::new(self.db);

        let Some(talk_ids) = repo.delete(speaker).await? else {
            tracing::warn!("Speaker {} changed before it could be deleted", speaker.id);
            return Err(AppError::BadRequest("Could not delete speaker".to_string()));
        };

        for talk_id in talk_ids {
            tags.forget(talk_id).await;
        }

        Ok(())
    }

    async fn find_in_camp(
        &self,
        moniker: &str,
        id: i32,
        include_talks: bool,
        mismatch: &str,
    ) -> Result<Speaker, AppError> {
        let repo = SpeakerRepository::new(self.db);

        let speaker = repo
            .get_by_id(id, include_talks)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Speaker {} was not found", id)))?;

        if !speaker.belongs_to_camp(moniker) {
            return Err(AppError::BadRequest(mismatch.to_string()));
        }

        Ok(speaker)
    }
}
