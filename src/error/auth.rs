use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{dto::api::ErrorDto, error::InternalServerError};

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user is present in the session.
    ///
    /// The request reached an endpoint that requires a logged-in user but the
    /// session carries no user id. Results in a 401 Unauthorized response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session references a user id that no longer exists in the database.
    ///
    /// Happens when a user row is deleted while a session for it is still live.
    /// Treated the same as not being logged in. Results in a 401 Unauthorized
    /// response.
    ///
    /// # Fields
    /// - The stale user id found in the session
    #[error("Session user {0} not found in database")]
    UserNotInDatabase(i32),

    /// Login failed because the email is unknown or the password is wrong.
    ///
    /// Both cases map to the same message so the endpoint does not reveal
    /// which emails are registered. Results in a 401 Unauthorized response.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The authenticated user lacks a permission required by the endpoint.
    ///
    /// Results in a 403 Forbidden response with a generic message; the
    /// detailed reason is only logged.
    ///
    /// # Fields
    /// - The id of the user that was denied
    /// - Internal description of the missing permission
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// Password hashing or verification failed inside the argon2 library.
    ///
    /// Not a wrong-password case; this is an operational failure (malformed
    /// stored hash, RNG failure). Results in a 500 Internal Server Error with
    /// a generic message returned to client.
    ///
    /// # Fields
    /// - Description of the underlying argon2 error
    #[error("Password hash operation failed: {0}")]
    PasswordHash(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-facing
/// messages:
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid email or password"
/// - `AccessDenied` → 403 Forbidden with a generic message, detail logged
/// - `PasswordHash` → 500 Internal Server Error with a generic message
///
/// # Returns
/// - 401 Unauthorized - For missing sessions, stale sessions, and bad credentials
/// - 403 Forbidden - For missing permissions
/// - 500 Internal Server Error - For hashing failures
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new(
                    StatusCode::UNAUTHORIZED,
                    "You must be logged in to access this resource".to_string(),
                )),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new(
                    StatusCode::UNAUTHORIZED,
                    "Invalid email or password".to_string(),
                )),
            )
                .into_response(),
            Self::AccessDenied(user_id, reason) => {
                tracing::warn!("Access denied for user {}: {}", user_id, reason);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto::new(
                        StatusCode::FORBIDDEN,
                        "You do not have permission to access this resource".to_string(),
                    )),
                )
                    .into_response()
            }
            err @ Self::PasswordHash(_) => InternalServerError(err).into_response(),
        }
    }
}
