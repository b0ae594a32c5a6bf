use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the session.
    ///
    /// The request came from a client that never logged in or whose session expired.
    /// Results in a 401 Unauthorized response.
    #[error("Failed to find user ID in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Happens when an account is deleted while one of its sessions is still live.
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Login name or password did not match.
    ///
    /// Unknown users and wrong passwords share this variant so the response does not
    /// reveal which accounts exist. Results in a 401 Unauthorized response.
    #[error("Invalid login credentials")]
    InvalidCredentials,

    /// Current password supplied for a password change was wrong.
    #[error("User {0} supplied an incorrect current password")]
    IncorrectPassword(i32),

    /// User lacks the permission required for the operation.
    ///
    /// Carries the user ID and a description for server-side logs.
    /// Results in a 403 Forbidden response.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized with "Not logged in"
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid username or password"
/// - `IncorrectPassword` → 401 Unauthorized with "Current password is incorrect"
/// - `AccessDenied` → 403 Forbidden with "Insufficient permissions"
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Not logged in")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid username or password"),
            Self::IncorrectPassword(_) => {
                (StatusCode::UNAUTHORIZED, "Current password is incorrect")
            }
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Insufficient permissions"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
