//! Logout Use Case
//!
//! Revokes a refresh token. Idempotent: logging out with an unknown or
//! already-deleted token is not an error.

use std::sync::Arc;

use platform::crypto::sha256_hex;

use crate::domain::repository::RefreshTokenRepository;
use crate::error::AuthResult;

/// Logout use case
pub struct LogoutUseCase<R>
where
    R: RefreshTokenRepository,
{
    token_repo: Arc<R>,
}

impl<R> LogoutUseCase<R>
where
    R: RefreshTokenRepository,
{
    pub fn new(token_repo: Arc<R>) -> Self {
        Self { token_repo }
    }

    pub async fn execute(&self, refresh_token: &str) -> AuthResult<()> {
        let token_hash = sha256_hex(refresh_token.as_bytes());
        let deleted = self.token_repo.delete_by_hash(&token_hash).await?;

        tracing::debug!(deleted = deleted, "Logout processed");

        Ok(())
    }
}
