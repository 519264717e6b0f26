//! Trivia Error Types
//!
//! Catalog/picks/rankings errors that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Trivia-specific result type alias
pub type TriviaResult<T> = Result<T, TriviaError>;

/// Trivia-specific error variants
#[derive(Debug, Error)]
pub enum TriviaError {
    #[error("Tournament not found")]
    TournamentNotFound,

    #[error("Player not found")]
    PlayerNotFound,

    #[error("Match not found")]
    MatchNotFound,

    /// The player exists (or was given by id) but features in no match
    #[error("No matches found for this player")]
    NoMatchesForPlayer,

    /// Ranking input exceeds the kind's count bound
    #[error("At most {max} {noun} allowed")]
    TooManyEntries { max: usize, noun: &'static str },

    /// Ranking input ids that do not exist or fail the kind's rule
    #[error("Invalid or not {label} match IDs: {ids}")]
    InvalidMatchIds { label: &'static str, ids: String },

    /// Player-ranking input ids that do not exist
    #[error("Invalid player IDs: {ids}")]
    InvalidPlayerIds { ids: String },

    /// Ranking input contains the same id twice
    #[error("Duplicate {noun} IDs")]
    DuplicateIds { noun: &'static str },

    /// A picks slot failed its eligibility rule
    #[error("{0}")]
    InvalidPick(&'static str),

    /// Unsupported bestOf filter value (only 3 and 5 exist)
    #[error("bestOf must be 3 or 5")]
    InvalidBestOfFilter,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TriviaError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TriviaError::TournamentNotFound
            | TriviaError::PlayerNotFound
            | TriviaError::MatchNotFound
            | TriviaError::NoMatchesForPlayer => ErrorKind::NotFound,
            TriviaError::TooManyEntries { .. }
            | TriviaError::InvalidMatchIds { .. }
            | TriviaError::InvalidPlayerIds { .. }
            | TriviaError::DuplicateIds { .. }
            | TriviaError::InvalidPick(_)
            | TriviaError::InvalidBestOfFilter => ErrorKind::BadRequest,
            TriviaError::Database(_) | TriviaError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Machine-readable code surfaced in the error body, when one exists
    pub fn code(&self) -> Option<&'static str> {
        match self {
            TriviaError::TooManyEntries { .. }
            | TriviaError::InvalidMatchIds { .. }
            | TriviaError::InvalidPlayerIds { .. }
            | TriviaError::DuplicateIds { .. }
            | TriviaError::InvalidPick(_)
            | TriviaError::InvalidBestOfFilter => Some("VALIDATION_ERROR"),
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
            TriviaError::Database(e) => {
                tracing::error!(error = %e, "Trivia database error");
            }
            TriviaError::Internal(msg) => {
                tracing::error!(message = %msg, "Trivia internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Trivia error");
            }
        }
    }
}

impl IntoResponse for TriviaError {
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
        assert_eq!(TriviaError::MatchNotFound.kind().status_code(), 404);
        assert_eq!(
            TriviaError::TooManyEntries { max: 10, noun: "matches" }
                .kind()
                .status_code(),
            400
        );
        assert_eq!(
            TriviaError::DuplicateIds { noun: "match" }.kind().status_code(),
            400
        );
        assert_eq!(
            TriviaError::Internal("boom".into()).kind().status_code(),
            500
        );
    }

    #[test]
    fn test_validation_errors_carry_code() {
        let err = TriviaError::InvalidPlayerIds { ids: "a, b".into() };
        assert_eq!(err.code(), Some("VALIDATION_ERROR"));
        assert_eq!(TriviaError::PlayerNotFound.code(), None);
    }

    #[test]
    fn test_messages() {
        let err = TriviaError::TooManyEntries { max: 5, noun: "Grand Slam finals" };
        assert_eq!(err.to_string(), "At most 5 Grand Slam finals allowed");

        let err = TriviaError::InvalidMatchIds {
            label: "best-of-5",
            ids: "x, y".into(),
        };
        assert_eq!(err.to_string(), "Invalid or not best-of-5 match IDs: x, y");
    }
}
