use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization` header on a protected request.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Request has no Authorization header")]
    MissingToken,

    /// `Authorization` header is present but not of the form `Bearer <token>`.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Authorization header is not a bearer token")]
    MalformedHeader,

    /// Token failed signature, expiry or issuer verification.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Token was issued before the user last logged out.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Token for user {0} was revoked by logout")]
    TokenRevoked(i32),

    /// Token subject no longer exists.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {0} not found in database")]
    UserNotInDatabase(i32),

    /// User lacks every role required by the endpoint.
    ///
    /// Results in a 403 Forbidden response.
    ///
    /// # Fields
    /// - User id
    /// - Description of the attempted action
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Login with an unknown email or a wrong password.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// - `MalformedHeader` / `InvalidToken` → 400 Bad Request
/// - Every other variant → 403 Forbidden
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MalformedHeader => (
                StatusCode::BAD_REQUEST,
                "Authorization header must be 'Bearer <token>'",
            ),
            Self::InvalidToken(_) => (StatusCode::BAD_REQUEST, "Invalid token"),
            Self::MissingToken => (StatusCode::FORBIDDEN, "Authentication required"),
            Self::TokenRevoked(_) | Self::UserNotInDatabase(_) => {
                (StatusCode::FORBIDDEN, "Session is no longer valid")
            }
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Insufficient permissions"),
            Self::InvalidCredentials => (StatusCode::FORBIDDEN, "Invalid email or password"),
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
