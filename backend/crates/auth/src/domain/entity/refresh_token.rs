//! Refresh Token Entity
//!
//! A persisted refresh token is only ever the SHA-256 digest of the signed
//! token, bound to its owner and stamped with a server-side expiry. Rows are
//! single-use: consumed on rotation, deleted on logout.

use chrono::{DateTime, Duration, Utc};
use kernel::id::{RefreshTokenId, UserId};

/// Stored refresh token (digest form)
#[derive(Debug, Clone)]
pub struct RefreshToken {
    pub id: RefreshTokenId,
    pub user_id: UserId,
    /// SHA-256 hex digest of the signed token; never the raw token
    pub token_hash: String,
    /// Server-side expiry, kept consistent with the token's embedded `exp`
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl RefreshToken {
    /// Issue a new row for a freshly signed token
    pub fn issue(user_id: UserId, token_hash: String, ttl: std::time::Duration) -> Self {
        let now = Utc::now();
        let ttl = Duration::from_std(ttl).unwrap_or_else(|_| Duration::days(7));
        Self {
            id: RefreshTokenId::new(),
            user_id,
            token_hash,
            expires_at: now + ttl,
            created_at: now,
        }
    }

    /// Whether the server-side expiry has passed
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }
}
