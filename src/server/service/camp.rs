use sea_orm::DatabaseConnection;

use crate::{
    model::{camp::CampDto, patch::PatchOperationDto},
    server::{
        data::camp::CampRepository,
        error::{validation::ValidationErrors, AppError},
        model::{
            camp::{Camp, CampParams, UpdateCampParams},
            link::LinkContext,
        },
        service::talk_tag::TalkTagCache,
        util::patch::apply_patch,
    },
};

pub struct CampService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CampService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all camps ordered by event date
    pub async fn get_all(&self) -> Result<Vec<Camp>, AppError> {
        let repo = CampRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a camp by moniker, optionally with its speakers and their talks
    pub async fn get_by_moniker(
        &self,
        moniker: &str,
        include_speakers: bool,
    ) -> Result<Camp, AppError> {
        let repo = CampRepository::new(self.db);

        repo.find_by_moniker(moniker, include_speakers)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Camp {} was not found", moniker)))
    }

    /// Creates a camp; the moniker must not be in use by any other camp
    pub async fn create(&self, params: CampParams) -> Result<Camp, AppError> {
        let repo = CampRepository::new(self.db);

        self.ensure_moniker_available(&params.moniker, None).await?;

        tracing::info!("Creating a new Code Camp {}", params.moniker);

        Ok(repo.create(params).await?)
    }

    /// Merges the present fields of a PUT body onto the stored camp
    pub async fn update(&self, moniker: &str, params: UpdateCampParams) -> Result<Camp, AppError> {
        let mut camp = self.find_for_write(moniker).await?;

        if let Some(new_moniker) = params.moniker() {
            self.ensure_moniker_available(new_moniker, Some(camp.id))
                .await?;
        }

        params.apply(&mut camp)?;

        self.save(&camp).await
    }

    /// Applies a JSON Patch document to the camp's view model and stores the result
    ///
    /// The patched view model is validated as a whole and replaces the camp, so a
    /// removed optional field is cleared.
    pub async fn patch(
        &self,
        moniker: &str,
        operations: &[PatchOperationDto],
        links: &LinkContext,
    ) -> Result<Camp, AppError> {
        let mut camp = self.find_for_write(moniker).await?;

        let mut document = serde_json::to_value(camp.clone().into_dto(links))
            .map_err(|e| AppError::InternalError(format!("Failed to serialize camp: {}", e)))?;

        apply_patch(&mut document, operations)?;

        let dto: CampDto = serde_json::from_value(document)
            .map_err(|e| ValidationErrors::malformed(format!("Patched camp is invalid: {}", e)))?;
        let params = CampParams::from_dto(dto)?;

        self.ensure_moniker_available(&params.moniker, Some(camp.id))
            .await?;

        params.replace(&mut camp);

        self.save(&camp).await
    }

    /// Deletes a camp with its speakers, their talks and its location
    ///
    /// Tags issued for the deleted talks are dropped from `tags`.
    pub async fn delete(&self, moniker: &str, tags: &TalkTagCache) -> Result<(), AppError> {
        let repo = CampRepository::new(self.db);

        let camp = repo.find_by_moniker(moniker, false).await?.ok_or_else(|| {
            AppError::NotFound(format!("Could not find Camp with Moniker of {}", moniker))
        })?;

        let Some(talk_ids) = repo.delete(&camp).await? else {
            tracing::warn!("Camp {} changed before it could be deleted", camp.id);
            return Err(AppError::BadRequest("Could not delete Camp".to_string()));
        };

        for talk_id in talk_ids {
            tags.forget(talk_id).await;
        }

        Ok(())
    }

    async fn find_for_write(&self, moniker: &str) -> Result<Camp, AppError> {
        let repo = CampRepository::new(self.db);

        repo.find_by_moniker(moniker, false).await?.ok_or_else(|| {
            AppError::NotFound(format!(
                "Could not find a camp with a Moniker of {}",
                moniker
            ))
        })
    }

    async fn ensure_moniker_available(
        &self,
        moniker: &str,
        excluding_id: Option<i32>,
    ) -> Result<(), AppError> {
        let repo = CampRepository::new(self.db);

        if repo.moniker_exists(moniker, excluding_id).await? {
            return Err(AppError::BadRequest(format!(
                "Moniker {} is already in use",
                moniker
            )));
        }

        Ok(())
    }

    async fn save(&self, camp: &Camp) -> Result<Camp, AppError> {
        let repo = CampRepository::new(self.db);

        repo.update(camp)
            .await?
            .ok_or_else(|| AppError::Conflict("Camp was modified by another request".to_string()))
    }
}
