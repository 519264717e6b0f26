//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{RefreshTokenId, UserId};

use crate::domain::entity::{refresh_token::RefreshToken, user::User};
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Check if email already has an account
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;
}

/// Refresh token repository trait
#[trait_variant::make(RefreshTokenRepository: Send)]
pub trait LocalRefreshTokenRepository {
    /// Persist a freshly issued token row
    async fn create(&self, token: &RefreshToken) -> AuthResult<()>;

    /// Find a stored row by (digest, owner)
    async fn find_by_hash_and_user(
        &self,
        token_hash: &str,
        user_id: &UserId,
    ) -> AuthResult<Option<RefreshToken>>;

    /// Delete a single row (rotation consumes it)
    async fn delete(&self, id: RefreshTokenId) -> AuthResult<()>;

    /// Delete every row matching the digest; returns the count.
    /// Zero matches is not an error (idempotent logout).
    async fn delete_by_hash(&self, token_hash: &str) -> AuthResult<u64>;

    /// Clean up rows whose server-side expiry has passed
    async fn delete_expired(&self) -> AuthResult<u64>;
}
