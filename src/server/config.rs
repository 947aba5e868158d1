use std::{str::FromStr, time::Duration};

use crate::server::error::config::ConfigError;

const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8080";
const DEFAULT_APP_URL: &str = "http://localhost:8080";
const DEFAULT_ETAG_CACHE_TTL_SECONDS: u64 = 300;
const DEFAULT_ETAG_CACHE_CAPACITY: usize = 1024;
const DEFAULT_SESSION_EXPIRY_DAYS: i64 = 7;

/// Identity created on startup when it does not exist yet.
#[derive(Clone)]
pub struct SeedUser {
    pub user_name: String,
    pub password: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub server_address: String,

    /// Base for generated links when the request carries no usable `Host`.
    pub app_url: String,

    pub etag_cache_ttl: Duration,
    pub etag_cache_capacity: usize,

    pub session_expiry_days: i64,
    pub secure_cookies: bool,

    /// Empty means any origin may issue GET requests.
    pub cors_allowed_origins: Vec<String>,

    pub seed_user: Option<SeedUser>,

    /// Writes the demo camp on startup when no camp uses its moniker.
    pub seed_sample_camp: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let seed_user = match (optional("SEED_USER_NAME"), optional("SEED_USER_PASSWORD")) {
            (Some(user_name), Some(password)) => Some(SeedUser {
                user_name,
                password,
                email: optional("SEED_USER_EMAIL"),
                first_name: optional("SEED_USER_FIRST_NAME"),
                last_name: optional("SEED_USER_LAST_NAME"),
            }),
            _ => None,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            server_address: optional("SERVER_ADDRESS")
                .unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string()),
            app_url: optional("APP_URL").unwrap_or_else(|| DEFAULT_APP_URL.to_string()),
            etag_cache_ttl: Duration::from_secs(parsed(
                "ETAG_CACHE_TTL_SECONDS",
                DEFAULT_ETAG_CACHE_TTL_SECONDS,
            )?),
            etag_cache_capacity: parsed("ETAG_CACHE_CAPACITY", DEFAULT_ETAG_CACHE_CAPACITY)?,
            session_expiry_days: parsed("SESSION_EXPIRY_DAYS", DEFAULT_SESSION_EXPIRY_DAYS)?,
            secure_cookies: parsed("SECURE_COOKIES", false)?,
            cors_allowed_origins: optional("CORS_ALLOWED_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(str::trim)
                        .filter(|origin| !origin.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            seed_user,
            seed_sample_camp: parsed("SEED_SAMPLE_CAMP", false)?,
        })
    }

    /// Re-reads `.env` (overriding already loaded values) and the environment.
    pub fn reload() -> Result<Self, ConfigError> {
        if let Err(err) = dotenvy::dotenv_override() {
            tracing::debug!("No .env file reloaded: {}", err);
        }

        Self::from_env()
    }
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parsed<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match optional(name) {
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
            name: name.to_string(),
            value,
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
impl Config {
    /// Configuration for tests; nothing is read from the environment.
    pub fn for_tests() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            server_address: DEFAULT_SERVER_ADDRESS.to_string(),
            app_url: DEFAULT_APP_URL.to_string(),
            etag_cache_ttl: Duration::from_secs(DEFAULT_ETAG_CACHE_TTL_SECONDS),
            etag_cache_capacity: DEFAULT_ETAG_CACHE_CAPACITY,
            session_expiry_days: DEFAULT_SESSION_EXPIRY_DAYS,
            secure_cookies: false,
            cors_allowed_origins: Vec::new(),
            seed_user: None,
            seed_sample_camp: false,
        }
    }
}
