use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        auth::{CredentialDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, json::parse_body, session::AuthSession},
        model::user::Credentials,
        service::auth::AuthService,
        state::AppState,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Logs a user in with a user name and password.
///
/// On success the session ID is cycled and the user is stored in the session
/// cookie.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - With the logged-in user
/// - `400 Bad Request` - Missing fields, or `fail to login` for bad credentials
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = CredentialDto,
    responses(
        (status = 200, description = "Successfully logged in", body = UserDto),
        (status = 400, description = "Missing credentials or login failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let payload: CredentialDto = parse_body(&body)?;
    let credentials = Credentials::from_dto(payload)?;

    let user = AuthService::new(&state.db).login(credentials).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    tracing::info!("User {} logged in", user.user_name);

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Ends the current session.
///
/// # Access Control
/// - Public
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Successfully logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok(StatusCode::OK)
}

/// Returns the logged-in user.
///
/// # Access Control
/// - Authenticated users
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
