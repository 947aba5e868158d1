use tokio::sync::RwLock;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    service::talk_tag::TalkTagCache,
};

/// Runtime maintenance operations.
pub struct OperationsService<'a> {
    config: &'a RwLock<Config>,
    tags: &'a TalkTagCache,
}

impl<'a> OperationsService<'a> {
    pub fn new(config: &'a RwLock<Config>, tags: &'a TalkTagCache) -> Self {
        Self { config, tags }
    }

    /// Re-reads configuration from `.env` and the environment.
    ///
    /// On success the shared configuration is swapped and the tag cache picks up the
    /// new TTL and capacity. On failure the running configuration is kept.
    ///
    /// # Returns
    /// - `Ok(())` - Configuration reloaded
    /// - `Err(AppError::BadRequest)` - New configuration could not be read
    pub async fn reload_config(&self) -> Result<(), AppError> {
        self.apply(Config::reload()).await
    }

    async fn apply(&self, reloaded: Result<Config, ConfigError>) -> Result<(), AppError> {
        let config = reloaded.map_err(|e| {
            tracing::error!("Exception thrown while reloading configuration: {}", e);
            AppError::BadRequest("Could not reload configuration".to_string())
        })?;

        self.tags
            .reconfigure(config.etag_cache_ttl, config.etag_cache_capacity)
            .await;
        *self.config.write().await = config;

        tracing::info!("Configuration reloaded");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    /// Tests applying a freshly read configuration.
    ///
    /// Expected: shared config replaced and cache shrunk to the new capacity
    #[tokio::test(start_paused = true)]
    async fn apply_swaps_config() -> Result<(), AppError> {
        let config = RwLock::new(Config::for_tests());
        let tags = TalkTagCache::new(Duration::from_secs(60), 10);

        let mut reloaded = Config::for_tests();
        reloaded.app_url = "https://camps.example.com".to_string();
        reloaded.etag_cache_capacity = 1;

        OperationsService::new(&config, &tags)
            .apply(Ok(reloaded))
            .await?;

        let current = config.read().await;
        assert_eq!(current.app_url, "https://camps.example.com");
        assert_eq!(current.etag_cache_capacity, 1);

        Ok(())
    }

    /// Tests that a failed reload keeps the running configuration.
    ///
    /// Expected: Err(BadRequest) and config unchanged
    #[tokio::test]
    async fn failed_reload_keeps_config() {
        let config = RwLock::new(Config::for_tests());
        let tags = TalkTagCache::new(Duration::from_secs(60), 10);

        let result = OperationsService::new(&config, &tags)
            .apply(Err(ConfigError::MissingEnvVar("DATABASE_URL".to_string())))
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert_eq!(config.read().await.database_url, "sqlite::memory:");
    }
}
