//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned for each request through
//! Axum's state extraction. Every field is cheap to clone: the database handle is a
//! pool, and the configuration and tag cache are reference-counted.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio::sync::RwLock;

use crate::server::{config::Config, service::talk_tag::TalkTagCache};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Current configuration, replaced by the reload operation.
    pub config: Arc<RwLock<Config>>,

    /// Tags recently handed out for talks, used to answer `If-None-Match`.
    pub talk_tags: TalkTagCache,
}

impl AppState {
    /// Creates the application state; the tag cache is sized from `config`.
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        let talk_tags = TalkTagCache::new(config.etag_cache_ttl, config.etag_cache_capacity);

        Self {
            db,
            config: Arc::new(RwLock::new(config)),
            talk_tags,
        }
    }

    /// Base URL used for links when the request has no usable `Host` header.
    pub async fn app_url(&self) -> String {
        self.config.read().await.app_url.clone()
    }
}
