//! Refresh Use Case
//!
//! Rotates a refresh token: one use is always destructive, successful or
//! not. A presented token with a valid signature either consumes its stored
//! row and yields a new pair, or (stale row) destroys the row and fails.

use std::sync::Arc;

use chrono::Utc;
use kernel::id::UserId;
use platform::crypto::sha256_hex;
use platform::token::{REFRESH_TOKEN_TYPE, TokenSigner};

use crate::application::config::AuthConfig;
use crate::application::tokens::issue_token_pair;
use crate::domain::repository::RefreshTokenRepository;
use crate::error::{AuthError, AuthResult};

/// Refresh output: a new pair, no user payload
#[derive(Debug)]
pub struct RefreshOutput {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: String,
}

/// Refresh use case
pub struct RefreshUseCase<R>
where
    R: RefreshTokenRepository,
{
    token_repo: Arc<R>,
    config: Arc<AuthConfig>,
    signer: Arc<TokenSigner>,
}

impl<R> RefreshUseCase<R>
where
    R: RefreshTokenRepository,
{
    pub fn new(token_repo: Arc<R>, config: Arc<AuthConfig>, signer: Arc<TokenSigner>) -> Self {
        Self {
            token_repo,
            config,
            signer,
        }
    }

    pub async fn execute(&self, refresh_token: &str) -> AuthResult<RefreshOutput> {
        // Signature and embedded expiry first; nothing below runs for a
        // token we did not sign.
        let claims = self
            .signer
            .verify_refresh(refresh_token)
            .map_err(|_| AuthError::InvalidRefreshToken)?;

        if claims.token_type != REFRESH_TOKEN_TYPE {
            return Err(AuthError::InvalidRefreshToken);
        }

        let user_id = UserId::from_uuid(claims.sub);
        let token_hash = sha256_hex(refresh_token.as_bytes());

        let stored = self
            .token_repo
            .find_by_hash_and_user(&token_hash, &user_id)
            .await?
            .ok_or(AuthError::InvalidRefreshToken)?;

        if stored.is_expired(Utc::now()) {
            // Best-effort cleanup; a concurrent refresh may already have
            // deleted the row, which is fine.
            if let Err(e) = self.token_repo.delete(stored.id).await {
                tracing::debug!(error = %e, "Stale refresh token cleanup failed");
            }
            return Err(AuthError::InvalidRefreshToken);
        }

        // Consume the presented token, then mint the replacement pair.
        self.token_repo.delete(stored.id).await?;

        let pair = issue_token_pair(&*self.token_repo, &self.signer, user_id).await?;

        tracing::debug!(user_id = %user_id, "Refresh token rotated");

        Ok(RefreshOutput {
            access_token: pair.access,
            refresh_token: pair.refresh,
            expires_in: self.config.access_expires_in.clone(),
        })
    }
}
