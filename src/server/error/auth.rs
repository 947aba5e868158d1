use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID stored in the session.
    ///
    /// The request did not come from a logged-in client. Results in 401 Unauthorized.
    #[error("No user in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Results in 401 Unauthorized.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The user is authenticated but not allowed to perform the operation.
    ///
    /// Carries the user ID and a reason for server-side logs. Results in 403 Forbidden.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// User name or password did not match.
    ///
    /// Results in 400 Bad Request.
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// Client-facing messages stay generic; the detailed reason is logged at debug level.
///
/// # Returns
/// - 400 Bad Request - For `InvalidCredentials`
/// - 401 Unauthorized - For `UserNotInSession` / `UserNotInDatabase`
/// - 403 Forbidden - For `AccessDenied`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Access denied".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "fail to login".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
