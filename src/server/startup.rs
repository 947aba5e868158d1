use axum::http::{header, HeaderValue, Method};
use sea_orm::DatabaseConnection;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::Config,
    error::AppError,
    service::{auth::AuthService, sample_camp::SampleCampService},
};

const DEFAULT_LOG_FILTER: &str = "camps=info,tower_http=info";

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to info for this crate and the HTTP
/// trace layer.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(fmt::layer())
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr(_))` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the cookie session layer backed by the application database.
///
/// Sessions expire after `SESSION_EXPIRY_DAYS` of inactivity. The session table is
/// created when missing.
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let session_store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
    session_store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session store: {}", e)))?;

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(config.secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(
            config.session_expiry_days,
        ))))
}

/// Seeds the configured identity when `SEED_USER_NAME` and `SEED_USER_PASSWORD` are set.
pub async fn seed_identity(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let Some(seed) = &config.seed_user else {
        tracing::debug!("No seed user configured");
        return Ok(());
    };

    if !AuthService::new(db).seed(seed).await? {
        tracing::debug!("Seed user {} already exists", seed.user_name);
    }

    Ok(())
}

/// Seeds the demo camp when `SEED_SAMPLE_CAMP` is enabled.
///
/// Its speakers are owned by the seed user, if one is configured.
pub async fn seed_sample_camp(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    if !config.seed_sample_camp {
        return Ok(());
    }

    let owner = config.seed_user.as_ref().map(|seed| seed.user_name.as_str());

    if !SampleCampService::new(db).seed(owner).await? {
        tracing::debug!("Sample camp already exists");
    }

    Ok(())
}

/// Builds the CORS policy.
///
/// Without configured origins any origin may issue GET requests. Listed origins may
/// use every method and send the session cookie.
pub fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET])
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::IF_MATCH,
            header::IF_NONE_MATCH,
            header::HeaderName::from_static("camp-version"),
        ])
        .expose_headers([header::ETAG, header::LOCATION])
        .allow_credentials(true)
}
