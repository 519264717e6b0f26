//! Token pair issuance shared by register, login and refresh
//!
//! Signing and persisting always travel together: a refresh token that was
//! handed out but whose digest was never stored would be unusable, and a
//! stored digest with no issued token would be dead weight.

use kernel::id::UserId;
use platform::crypto::sha256_hex;
use platform::token::TokenSigner;

use crate::domain::entity::refresh_token::RefreshToken;
use crate::domain::repository::RefreshTokenRepository;
use crate::error::{AuthError, AuthResult};

/// A freshly signed access/refresh pair
pub(crate) struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Sign a new pair for `user_id` and persist the refresh digest
pub(crate) async fn issue_token_pair<R>(
    token_repo: &R,
    signer: &TokenSigner,
    user_id: UserId,
) -> AuthResult<TokenPair>
where
    R: RefreshTokenRepository,
{
    let access = signer
        .sign_access(user_id.into_uuid())
        .map_err(|e| AuthError::Internal(e.to_string()))?;
    let refresh = signer
        .sign_refresh(user_id.into_uuid())
        .map_err(|e| AuthError::Internal(e.to_string()))?;

    let record = RefreshToken::issue(
        user_id,
        sha256_hex(refresh.as_bytes()),
        signer.refresh_ttl(),
    );
    token_repo.create(&record).await?;

    Ok(TokenPair { access, refresh })
}
