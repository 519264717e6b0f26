//! Signed Token Issuance and Verification
//!
//! Stateless bearer tokens (JWT, HS256) with two independent signing keys:
//! a short-lived access token and a longer-lived refresh token. The refresh
//! payload carries a `type: "refresh"` marker so an access secret leak can
//! never be parlayed into refresh material, and vice versa.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Type marker embedded in refresh-token payloads
pub const REFRESH_TOKEN_TYPE: &str = "refresh";

/// Token verification/issuance errors
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signature valid but the token is past its expiry
    #[error("Token has expired")]
    Expired,

    /// Anything else: bad signature, malformed token, wrong claims shape
    #[error("Invalid token")]
    Invalid,

    /// Encoding failed (should not happen with HS256 secrets)
    #[error("Token signing failed: {0}")]
    SigningFailed(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid,
        }
    }
}

/// Access-token claims: the subject only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    pub sub: Uuid,
    pub iat: i64,
    pub exp: i64,
}

/// Refresh-token claims: subject plus the `type` marker
///
/// The random `jti` makes every issued token unique even when two are
/// signed for the same subject within one second — rotation depends on
/// the replacement differing from the consumed token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshClaims {
    pub sub: Uuid,
    #[serde(rename = "type")]
    pub token_type: String,
    pub jti: Uuid,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and verifies the access/refresh token pair
///
/// Holds both key pairs and both lifetimes; constructed once at startup
/// from configuration and shared behind an `Arc`.
pub struct TokenSigner {
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
    access_ttl: std::time::Duration,
    refresh_ttl: std::time::Duration,
    validation: Validation,
}

impl TokenSigner {
    pub fn new(
        access_secret: &str,
        refresh_secret: &str,
        access_ttl: std::time::Duration,
        refresh_ttl: std::time::Duration,
    ) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Exact expiry, no clock leeway: rotation tests and the 401 contract
        // depend on a deterministic cutoff.
        validation.leeway = 0;

        Self {
            access_encoding: EncodingKey::from_secret(access_secret.as_bytes()),
            access_decoding: DecodingKey::from_secret(access_secret.as_bytes()),
            refresh_encoding: EncodingKey::from_secret(refresh_secret.as_bytes()),
            refresh_decoding: DecodingKey::from_secret(refresh_secret.as_bytes()),
            access_ttl,
            refresh_ttl,
            validation,
        }
    }

    pub fn access_ttl(&self) -> std::time::Duration {
        self.access_ttl
    }

    pub fn refresh_ttl(&self) -> std::time::Duration {
        self.refresh_ttl
    }

    /// Sign a short-lived access token for the given subject
    pub fn sign_access(&self, user_id: Uuid) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = AccessClaims {
            sub: user_id,
            iat: now.timestamp(),
            exp: expiry(now, self.access_ttl),
        };
        encode(&Header::default(), &claims, &self.access_encoding)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Sign a refresh token carrying the `type: "refresh"` marker
    pub fn sign_refresh(&self, user_id: Uuid) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = RefreshClaims {
            sub: user_id,
            token_type: REFRESH_TOKEN_TYPE.to_string(),
            jti: Uuid::new_v4(),
            iat: now.timestamp(),
            exp: expiry(now, self.refresh_ttl),
        };
        encode(&Header::default(), &claims, &self.refresh_encoding)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Verify an access token's signature and expiry
    pub fn verify_access(&self, token: &str) -> Result<AccessClaims, TokenError> {
        let data = decode::<AccessClaims>(token, &self.access_decoding, &self.validation)?;
        Ok(data.claims)
    }

    /// Verify a refresh token's signature and expiry
    ///
    /// The `type` marker is returned untouched; enforcing it is the
    /// caller's contract, not the signature layer's.
    pub fn verify_refresh(&self, token: &str) -> Result<RefreshClaims, TokenError> {
        let data = decode::<RefreshClaims>(token, &self.refresh_decoding, &self.validation)?;
        Ok(data.claims)
    }
}

fn expiry(now: chrono::DateTime<Utc>, ttl: std::time::Duration) -> i64 {
    let ttl = Duration::from_std(ttl).unwrap_or_else(|_| Duration::days(365));
    (now + ttl).timestamp()
}
