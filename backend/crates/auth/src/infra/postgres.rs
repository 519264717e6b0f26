//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{RefreshTokenId, UserId};
use platform::password::HashedPassword;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{refresh_token::RefreshToken, user::User};
use crate::domain::repository::{RefreshTokenRepository, UserRepository};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Clean up expired refresh tokens
    pub async fn cleanup_expired(&self) -> AuthResult<u64> {
        let deleted = sqlx::query("DELETE FROM refresh_tokens WHERE expires_at < $1")
            .bind(Utc::now())
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(tokens_deleted = deleted, "Cleaned up expired refresh tokens");

        Ok(deleted)
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgAuthRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                id,
                email,
                password_hash,
                display_name,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user.id.as_uuid())
        .bind(user.email.as_str())
        .bind(user.password_hash.as_phc_string())
        .bind(&user.display_name)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password_hash, display_name, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password_hash, display_name, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }
}

// ============================================================================
// Refresh Token Repository Implementation
// ============================================================================

impl RefreshTokenRepository for PgAuthRepository {
    async fn create(&self, token: &RefreshToken) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO refresh_tokens (
                id,
                user_id,
                token_hash,
                expires_at,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(token.id.as_uuid())
        .bind(token.user_id.as_uuid())
        .bind(&token.token_hash)
        .bind(token.expires_at)
        .bind(token.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_hash_and_user(
        &self,
        token_hash: &str,
        user_id: &UserId,
    ) -> AuthResult<Option<RefreshToken>> {
        let row = sqlx::query_as::<_, RefreshTokenRow>(
            r#"
            SELECT id, user_id, token_hash, expires_at, created_at
            FROM refresh_tokens
            WHERE token_hash = $1 AND user_id = $2
            "#,
        )
        .bind(token_hash)
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(RefreshTokenRow::into_token))
    }

    async fn delete(&self, id: RefreshTokenId) -> AuthResult<()> {
        sqlx::query("DELETE FROM refresh_tokens WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_by_hash(&self, token_hash: &str) -> AuthResult<u64> {
        let deleted = sqlx::query("DELETE FROM refresh_tokens WHERE token_hash = $1")
            .bind(token_hash)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted)
    }

    async fn delete_expired(&self) -> AuthResult<u64> {
        self.cleanup_expired().await
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    password_hash: String,
    display_name: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let password_hash = HashedPassword::from_phc_string(self.password_hash)
            .map_err(|e| AuthError::Internal(format!("Invalid password hash: {}", e)))?;

        Ok(User {
            id: UserId::from_uuid(self.id),
            email: Email::from_db(self.email),
            password_hash,
            display_name: self.display_name,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct RefreshTokenRow {
    id: Uuid,
    user_id: Uuid,
    token_hash: String,
    expires_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl RefreshTokenRow {
    fn into_token(self) -> RefreshToken {
        RefreshToken {
            id: RefreshTokenId::from_uuid(self.id),
            user_id: UserId::from_uuid(self.user_id),
            token_hash: self.token_hash,
            expires_at: self.expires_at,
            created_at: self.created_at,
        }
    }
}
