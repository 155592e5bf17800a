use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header was supplied on a protected route.
    #[error("Authentication credentials were not provided")]
    MissingToken,

    /// The supplied bearer token failed signature or expiry validation.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Token exchange was attempted with an unknown email or wrong password.
    #[error("Unable to authenticate with provided credentials")]
    InvalidCredentials,

    /// A validated token references a user that no longer exists.
    #[error("User {0} from token no longer exists")]
    UserNotInDatabase(i32),

    /// An authenticated user lacks the role a route requires.
    #[error("User {0} does not have permission to perform this action")]
    AccessDenied(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// Missing or unusable credentials map to 401 Unauthorized; a valid identity
/// without the required role maps to 403 Forbidden. Client-facing messages
/// stay generic; the precise cause is carried in the error for logging.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                "Authentication credentials were not provided.".to_string(),
            ),
            Self::InvalidToken | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                "Invalid authentication credentials.".to_string(),
            ),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Unable to log in with provided credentials.".to_string(),
            ),
            Self::AccessDenied(_) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action.".to_string(),
            ),
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
