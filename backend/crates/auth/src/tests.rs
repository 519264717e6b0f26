//! Use-case tests for the auth crate
//!
//! Run against in-memory repository implementations so the whole session
//! lifecycle (register → login → refresh rotation → logout) is exercised
//! without a database.

use std::sync::{Arc, Mutex};

use chrono::{Duration, Utc};
use kernel::id::{RefreshTokenId, UserId};

use crate::application::config::AuthConfig;
use crate::application::{
    LoginInput, LoginUseCase, LogoutUseCase, RefreshUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::entity::{refresh_token::RefreshToken, user::User};
use crate::domain::repository::{RefreshTokenRepository, UserRepository};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

// ============================================================================
// In-memory repository
// ============================================================================

#[derive(Clone, Default)]
struct MemRepo {
    users: Arc<Mutex<Vec<User>>>,
    tokens: Arc<Mutex<Vec<RefreshToken>>>,
}

impl MemRepo {
    fn token_count(&self) -> usize {
        self.tokens.lock().unwrap().len()
    }

    fn age_all_tokens(&self) {
        let mut tokens = self.tokens.lock().unwrap();
        for token in tokens.iter_mut() {
            token.expires_at = Utc::now() - Duration::hours(1);
        }
    }
}

impl UserRepository for MemRepo {
    async fn create(&self, user: &User) -> AuthResult<()> {
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == *user_id)
            .cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == *email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.email == *email))
    }
}

impl RefreshTokenRepository for MemRepo {
    async fn create(&self, token: &RefreshToken) -> AuthResult<()> {
        self.tokens.lock().unwrap().push(token.clone());
        Ok(())
    }

    async fn find_by_hash_and_user(
        &self,
        token_hash: &str,
        user_id: &UserId,
    ) -> AuthResult<Option<RefreshToken>> {
        Ok(self
            .tokens
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.token_hash == token_hash && t.user_id == *user_id)
            .cloned())
    }

    async fn delete(&self, id: RefreshTokenId) -> AuthResult<()> {
        self.tokens.lock().unwrap().retain(|t| t.id != id);
        Ok(())
    }

    async fn delete_by_hash(&self, token_hash: &str) -> AuthResult<u64> {
        let mut tokens = self.tokens.lock().unwrap();
        let before = tokens.len();
        tokens.retain(|t| t.token_hash != token_hash);
        Ok((before - tokens.len()) as u64)
    }

    async fn delete_expired(&self) -> AuthResult<u64> {
        let now = Utc::now();
        let mut tokens = self.tokens.lock().unwrap();
        let before = tokens.len();
        tokens.retain(|t| !t.is_expired(now));
        Ok((before - tokens.len()) as u64)
    }
}

// ============================================================================
// Fixture
// ============================================================================

struct Fixture {
    repo: Arc<MemRepo>,
    config: Arc<AuthConfig>,
    signer: Arc<platform::token::TokenSigner>,
}

impl Fixture {
    fn new() -> Self {
        let config = AuthConfig::development();
        let signer = Arc::new(config.signer());
        Self {
            repo: Arc::new(MemRepo::default()),
            config: Arc::new(config),
            signer,
        }
    }

    fn register_use_case(&self) -> RegisterUseCase<MemRepo, MemRepo> {
        RegisterUseCase::new(
            self.repo.clone(),
            self.repo.clone(),
            self.config.clone(),
            self.signer.clone(),
        )
    }

    fn login_use_case(&self) -> LoginUseCase<MemRepo, MemRepo> {
        LoginUseCase::new(
            self.repo.clone(),
            self.repo.clone(),
            self.config.clone(),
            self.signer.clone(),
        )
    }

    fn refresh_use_case(&self) -> RefreshUseCase<MemRepo> {
        RefreshUseCase::new(self.repo.clone(), self.config.clone(), self.signer.clone())
    }

    fn logout_use_case(&self) -> LogoutUseCase<MemRepo> {
        LogoutUseCase::new(self.repo.clone())
    }
}

fn register_input() -> RegisterInput {
    RegisterInput {
        email: "fan@example.com".to_string(),
        password: "dropshot-volley-9".to_string(),
        display_name: Some("Court Fan".to_string()),
    }
}

// ============================================================================
// Register / Login
// ============================================================================

#[tokio::test]
async fn register_then_login_succeeds() {
    let fx = Fixture::new();

    let registered = fx.register_use_case().execute(register_input()).await.unwrap();
    assert_eq!(registered.expires_in, "15m");
    assert!(!registered.access_token.is_empty());
    assert_eq!(fx.repo.token_count(), 1);

    let session = fx
        .login_use_case()
        .execute(LoginInput {
            email: "fan@example.com".to_string(),
            password: "dropshot-volley-9".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(session.user.id, registered.user.id);

    // The access token is usable: it verifies and names the user
    let claims = fx.signer.verify_access(&session.access_token).unwrap();
    assert_eq!(claims.sub, session.user.id.into_uuid());
}

#[tokio::test]
async fn register_duplicate_email_conflicts() {
    let fx = Fixture::new();
    fx.register_use_case().execute(register_input()).await.unwrap();

    let err = fx
        .register_use_case()
        .execute(register_input())
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::EmailTaken));
}

#[tokio::test]
async fn register_rejects_policy_violations() {
    let fx = Fixture::new();

    let err = fx
        .register_use_case()
        .execute(RegisterInput {
            email: "fan@example.com".to_string(),
            password: "short".to_string(),
            display_name: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::PasswordPolicy(_)));

    let err = fx
        .register_use_case()
        .execute(RegisterInput {
            email: "not-an-email".to_string(),
            password: "dropshot-volley-9".to_string(),
            display_name: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidEmail(_)));
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let fx = Fixture::new();
    fx.register_use_case().execute(register_input()).await.unwrap();

    let unknown_email = fx
        .login_use_case()
        .execute(LoginInput {
            email: "stranger@example.com".to_string(),
            password: "dropshot-volley-9".to_string(),
        })
        .await
        .unwrap_err();

    let wrong_password = fx
        .login_use_case()
        .execute(LoginInput {
            email: "fan@example.com".to_string(),
            password: "wrong-password-99".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(unknown_email, AuthError::InvalidCredentials));
    assert!(matches!(wrong_password, AuthError::InvalidCredentials));
    assert_eq!(unknown_email.to_string(), wrong_password.to_string());
}

// ============================================================================
// Refresh rotation
// ============================================================================

#[tokio::test]
async fn refresh_succeeds_exactly_once() {
    let fx = Fixture::new();
    let session = fx.register_use_case().execute(register_input()).await.unwrap();

    let rotated = fx
        .refresh_use_case()
        .execute(&session.refresh_token)
        .await
        .unwrap();
    assert_ne!(rotated.refresh_token, session.refresh_token);
    assert_eq!(fx.repo.token_count(), 1);

    // The consumed token is gone for good
    let err = fx
        .refresh_use_case()
        .execute(&session.refresh_token)
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidRefreshToken));

    // The replacement still works
    fx.refresh_use_case()
        .execute(&rotated.refresh_token)
        .await
        .unwrap();
}

#[tokio::test]
async fn refresh_rejects_access_tokens_and_garbage() {
    let fx = Fixture::new();
    let session = fx.register_use_case().execute(register_input()).await.unwrap();

    // An access token is signed with the other secret
    let err = fx
        .refresh_use_case()
        .execute(&session.access_token)
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidRefreshToken));

    let err = fx.refresh_use_case().execute("not.a.jwt").await.unwrap_err();
    assert!(matches!(err, AuthError::InvalidRefreshToken));
}

#[tokio::test]
async fn refresh_rejects_wrong_type_marker() {
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde::Serialize;

    #[derive(Serialize)]
    struct ForgedClaims {
        sub: uuid::Uuid,
        #[serde(rename = "type")]
        token_type: String,
        jti: uuid::Uuid,
        iat: i64,
        exp: i64,
    }

    let fx = Fixture::new();
    let session = fx.register_use_case().execute(register_input()).await.unwrap();

    // Correctly signed with the refresh secret, but the wrong type marker
    let now = Utc::now();
    let forged = encode(
        &Header::default(),
        &ForgedClaims {
            sub: session.user.id.into_uuid(),
            token_type: "access".to_string(),
            jti: uuid::Uuid::new_v4(),
            iat: now.timestamp(),
            exp: (now + Duration::days(7)).timestamp(),
        },
        &EncodingKey::from_secret(fx.config.refresh_secret.as_bytes()),
    )
    .unwrap();

    let err = fx.refresh_use_case().execute(&forged).await.unwrap_err();
    assert!(matches!(err, AuthError::InvalidRefreshToken));
}

#[tokio::test]
async fn refresh_destroys_stale_rows() {
    let fx = Fixture::new();
    let session = fx.register_use_case().execute(register_input()).await.unwrap();

    // Server-side expiry passed even though the JWT itself is still valid
    fx.repo.age_all_tokens();

    let err = fx
        .refresh_use_case()
        .execute(&session.refresh_token)
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidRefreshToken));

    // The stale row was cleaned up on the way out
    assert_eq!(fx.repo.token_count(), 0);
}

// ============================================================================
// Logout
// ============================================================================

#[tokio::test]
async fn logout_revokes_and_is_idempotent() {
    let fx = Fixture::new();
    let session = fx.register_use_case().execute(register_input()).await.unwrap();

    fx.logout_use_case()
        .execute(&session.refresh_token)
        .await
        .unwrap();
    assert_eq!(fx.repo.token_count(), 0);

    // Double logout is fine
    fx.logout_use_case()
        .execute(&session.refresh_token)
        .await
        .unwrap();

    // And the token can no longer be refreshed
    let err = fx
        .refresh_use_case()
        .execute(&session.refresh_token)
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidRefreshToken));
}
