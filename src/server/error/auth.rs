use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No bearer token was supplied on a protected route.
    #[error("Access token not provided")]
    MissingToken,

    /// The bearer token failed signature, expiry, or claim validation.
    #[error("Invalid or expired token: {0}")]
    InvalidToken(String),

    /// The authenticated admin lacks a permission the route requires.
    #[error("Admin '{0}' lacks the required role")]
    AccessDenied(String),

    /// Unknown username or wrong password at login.
    #[error("Username or password invalid")]
    InvalidCredentials,

    /// The registration secret did not match the configured one.
    #[error("Access credentials denied")]
    RegistrationDenied,

    /// Registration attempted with a username that is already stored.
    #[error("Username '{0}' already exists")]
    UsernameTaken(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidCredentials` → 401 Unauthorized
/// - `InvalidToken` / `AccessDenied` / `RegistrationDenied` → 403 Forbidden
/// - `UsernameTaken` → 400 Bad Request
///
/// Token failures are logged at debug level; the client only sees a generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "Access token not provided"),
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Username or password invalid"),
            Self::InvalidToken(_) => (StatusCode::FORBIDDEN, "Invalid or expired token"),
            Self::AccessDenied(_) => (StatusCode::FORBIDDEN, "Access denied"),
            Self::RegistrationDenied => (StatusCode::FORBIDDEN, "Access credentials denied!"),
            Self::UsernameTaken(_) => (StatusCode::BAD_REQUEST, "Username already exists"),
        };

        (status, Json(ErrorDto::new(message))).into_response()
    }
}
