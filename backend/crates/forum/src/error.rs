//! Forum Error Types

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Forum-specific result type alias
pub type ForumResult<T> = Result<T, ForumError>;

/// Forum-specific error variants
#[derive(Debug, Error)]
pub enum ForumError {
    #[error("Forum not found")]
    ForumNotFound,

    #[error("Thread not found")]
    ThreadNotFound,

    #[error("Post not found")]
    PostNotFound,

    /// Final slug collides with an existing forum
    #[error("Forum slug already exists")]
    SlugTaken,

    /// Title yields nothing after slugification and no explicit slug given
    #[error("Slug could not be generated from title")]
    EmptySlug,

    /// A required text field is empty after trimming
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    /// A text field exceeds its cap
    #[error("{field} must be at most {max} characters")]
    FieldTooLong { field: &'static str, max: usize },

    /// Authenticated but not the forum's creator
    #[error("Not allowed to update this forum")]
    NotForumOwner,

    /// Authenticated but not the post's author
    #[error("Not allowed to edit this post")]
    NotPostAuthor,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ForumError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ForumError::ForumNotFound
            | ForumError::ThreadNotFound
            | ForumError::PostNotFound => ErrorKind::NotFound,
            ForumError::SlugTaken => ErrorKind::Conflict,
            ForumError::EmptySlug
            | ForumError::EmptyField { .. }
            | ForumError::FieldTooLong { .. } => ErrorKind::BadRequest,
            ForumError::NotForumOwner | ForumError::NotPostAuthor => ErrorKind::Forbidden,
            ForumError::Database(_) | ForumError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Machine-readable code surfaced in the error body, when one exists
    pub fn code(&self) -> Option<&'static str> {
        match self {
            ForumError::SlugTaken => Some("SLUG_EXISTS"),
            ForumError::EmptySlug
            | ForumError::EmptyField { .. }
            | ForumError::FieldTooLong { .. } => Some("VALIDATION_ERROR"),
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

    fn log(&self) {
        match self {
            ForumError::Database(e) => {
                tracing::error!(error = %e, "Forum database error");
            }
            ForumError::Internal(msg) => {
                tracing::error!(message = %msg, "Forum internal error");
            }
            ForumError::NotForumOwner | ForumError::NotPostAuthor => {
                tracing::warn!(error = %self, "Forum ownership violation");
            }
            _ => {
                tracing::debug!(error = %self, "Forum error");
            }
        }
    }
}

impl IntoResponse for ForumError {
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
        assert_eq!(ForumError::ForumNotFound.kind().status_code(), 404);
        assert_eq!(ForumError::SlugTaken.kind().status_code(), 409);
        assert_eq!(ForumError::EmptySlug.kind().status_code(), 400);
        assert_eq!(ForumError::NotForumOwner.kind().status_code(), 403);
        assert_eq!(ForumError::NotPostAuthor.kind().status_code(), 403);
    }

    #[test]
    fn test_codes() {
        assert_eq!(ForumError::SlugTaken.code(), Some("SLUG_EXISTS"));
        assert_eq!(ForumError::EmptySlug.code(), Some("VALIDATION_ERROR"));
        assert_eq!(ForumError::PostNotFound.code(), None);
    }
}
