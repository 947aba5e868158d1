use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::api::{ErrorDto, MessageDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::operations::OperationsService,
        state::AppState,
    },
};

pub static OPERATIONS_TAG: &str = "operations";

/// Reloads configuration from `.env` and the environment.
///
/// The new tag cache limits apply immediately.
///
/// # Access Control
/// - `SuperUser` - Requires the `SuperUser=True` claim
#[utoipa::path(
    options,
    path = "/api/operations/reloadConfig",
    tag = OPERATIONS_TAG,
    responses(
        (status = 200, description = "Configuration reloaded", body = MessageDto),
        (status = 400, description = "Configuration could not be reloaded", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User lacks the SuperUser claim", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reload_config(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SuperUser])
        .await?;

    OperationsService::new(&state.config, &state.talk_tags)
        .reload_config()
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Configuration Reloaded".to_string(),
        }),
    ))
}
