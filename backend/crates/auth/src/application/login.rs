//! Login Use Case
//!
//! Authenticates a user and opens a new session.

use std::sync::Arc;

use platform::password::ClearTextPassword;
use platform::token::TokenSigner;

use crate::application::config::AuthConfig;
use crate::application::register::SessionOutput;
use crate::application::tokens::issue_token_pair;
use crate::domain::repository::{RefreshTokenRepository, UserRepository};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login use case
pub struct LoginUseCase<U, R>
where
    U: UserRepository,
    R: RefreshTokenRepository,
{
    user_repo: Arc<U>,
    token_repo: Arc<R>,
    config: Arc<AuthConfig>,
    signer: Arc<TokenSigner>,
}

impl<U, R> LoginUseCase<U, R>
where
    U: UserRepository,
    R: RefreshTokenRepository,
{
    pub fn new(
        user_repo: Arc<U>,
        token_repo: Arc<R>,
        config: Arc<AuthConfig>,
        signer: Arc<TokenSigner>,
    ) -> Self {
        Self {
            user_repo,
            token_repo,
            config,
            signer,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<SessionOutput> {
        // Every failure below is the same InvalidCredentials: an attacker
        // must not learn whether the email has an account.
        let email = Email::new(&input.email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password =
            ClearTextPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        if !user.password_hash.verify(&password) {
            return Err(AuthError::InvalidCredentials);
        }

        let pair = issue_token_pair(&*self.token_repo, &self.signer, user.id).await?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(SessionOutput {
            user,
            access_token: pair.access,
            refresh_token: pair.refresh,
            expires_in: self.config.access_expires_in.clone(),
        })
    }
}
