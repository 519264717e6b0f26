//! Register Use Case
//!
//! Creates a new account and opens its first session.

use std::sync::Arc;

use platform::password::ClearTextPassword;
use platform::token::TokenSigner;

use crate::application::config::AuthConfig;
use crate::application::tokens::issue_token_pair;
use crate::domain::entity::user::User;
use crate::domain::repository::{RefreshTokenRepository, UserRepository};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Longest accepted display name
const MAX_DISPLAY_NAME_LENGTH: usize = 100;

/// Register input
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub display_name: Option<String>,
}

/// Output of any operation that opens a session
#[derive(Debug)]
pub struct SessionOutput {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
    /// The configured access lifetime string (e.g. "15m")
    pub expires_in: String,
}

/// Register use case
pub struct RegisterUseCase<U, R>
where
    U: UserRepository,
    R: RefreshTokenRepository,
{
    user_repo: Arc<U>,
    token_repo: Arc<R>,
    config: Arc<AuthConfig>,
    signer: Arc<TokenSigner>,
}

impl<U, R> RegisterUseCase<U, R>
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

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<SessionOutput> {
        let email =
            Email::new(&input.email).map_err(|e| AuthError::InvalidEmail(e.to_string()))?;

        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        if let Some(name) = &input.display_name {
            if name.chars().count() > MAX_DISPLAY_NAME_LENGTH {
                return Err(AuthError::DisplayNameTooLong {
                    max: MAX_DISPLAY_NAME_LENGTH,
                });
            }
        }

        // Validate and hash password (slow, salted; Argon2id)
        let password = ClearTextPassword::new(input.password)
            .map_err(|e| AuthError::PasswordPolicy(e.to_string()))?;
        let password_hash = password
            .hash()
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = User::new(email, password_hash, input.display_name);
        self.user_repo.create(&user).await?;

        let pair = issue_token_pair(&*self.token_repo, &self.signer, user.id).await?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(SessionOutput {
            user,
            access_token: pair.access,
            refresh_token: pair.refresh,
            expires_in: self.config.access_expires_in.clone(),
        })
    }
}
