//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email already has an account
    #[error("Email already registered")]
    EmailTaken,

    /// Email failed format validation
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Password failed the policy check
    #[error("Password validation failed: {0}")]
    PasswordPolicy(String),

    /// Display name too long
    #[error("Display name must be at most {max} characters")]
    DisplayNameTooLong { max: usize },

    /// Wrong password or unknown email; deliberately indistinguishable
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Refresh token failed verification, was already consumed, or expired
    #[error("Invalid or expired refresh token")]
    InvalidRefreshToken,

    /// Access token failed verification or expired
    #[error("Invalid or expired token")]
    InvalidAccessToken,

    /// No usable bearer token on the request
    #[error("Missing or invalid Authorization header")]
    MissingAuthHeader,

    /// Token subject no longer resolves to a user
    #[error("User not found")]
    UserGone,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::InvalidEmail(_)
            | AuthError::PasswordPolicy(_)
            | AuthError::DisplayNameTooLong { .. } => ErrorKind::BadRequest,
            AuthError::InvalidCredentials
            | AuthError::InvalidRefreshToken
            | AuthError::InvalidAccessToken
            | AuthError::MissingAuthHeader
            | AuthError::UserGone => ErrorKind::Unauthorized,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Machine-readable code surfaced in the error body, when one exists
    pub fn code(&self) -> Option<&'static str> {
        match self {
            AuthError::EmailTaken => Some("EMAIL_EXISTS"),
            AuthError::InvalidEmail(_)
            | AuthError::PasswordPolicy(_)
            | AuthError::DisplayNameTooLong { .. } => Some("VALIDATION_ERROR"),
            _ => None,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self.code() {
            Some(code) => err.with_code(code),
            None => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidRefreshToken => {
                tracing::warn!("Refresh attempt with invalid token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AuthError::EmailTaken.kind().status_code(), 409);
        assert_eq!(AuthError::InvalidCredentials.kind().status_code(), 401);
        assert_eq!(AuthError::InvalidRefreshToken.kind().status_code(), 401);
        assert_eq!(AuthError::MissingAuthHeader.kind().status_code(), 401);
        assert_eq!(AuthError::UserGone.kind().status_code(), 401);
        assert_eq!(
            AuthError::PasswordPolicy("too short".into()).kind().status_code(),
            400
        );
        assert_eq!(AuthError::Internal("boom".into()).kind().status_code(), 500);
    }

    #[test]
    fn test_codes() {
        assert_eq!(AuthError::EmailTaken.code(), Some("EMAIL_EXISTS"));
        assert_eq!(
            AuthError::InvalidEmail("x".into()).code(),
            Some("VALIDATION_ERROR")
        );
        assert_eq!(AuthError::InvalidCredentials.code(), None);
    }

    #[test]
    fn test_enumeration_safety() {
        // Unknown email and wrong password must present identically
        let unknown = AuthError::InvalidCredentials.to_app_error();
        let wrong = AuthError::InvalidCredentials.to_app_error();
        assert_eq!(unknown.message(), wrong.message());
        assert_eq!(unknown.status_code(), wrong.status_code());
    }
}
