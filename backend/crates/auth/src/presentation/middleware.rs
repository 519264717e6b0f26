//! Auth Gate Middleware
//!
//! Resolves the bearer access token to a [`CurrentUser`] and attaches it to
//! the request. Two flavors:
//! - [`require_identity`] rejects with 401 when resolution fails — for
//!   routers that are authenticated end to end (picks, rankings).
//! - [`attach_identity`] never rejects — for mixed public/authenticated
//!   routers (forums), where write handlers extract [`CurrentUser`]
//!   themselves and fail 401 only then.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::id::UserId;
use kernel::identity::CurrentUser;
use platform::token::TokenSigner;

use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Middleware state
#[derive(Clone)]
pub struct AuthGateState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub signer: Arc<TokenSigner>,
}

impl<R> AuthGateState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>, signer: Arc<TokenSigner>) -> Self {
        Self { repo, signer }
    }
}

/// Middleware that requires a resolvable bearer identity
pub async fn require_identity<R>(
    State(state): State<AuthGateState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    match resolve_identity(&state, req.headers()).await {
        Ok(user) => {
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => Err(e.into_response()),
    }
}

/// Middleware that attaches the identity when present but never rejects
pub async fn attach_identity<R>(
    State(state): State<AuthGateState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Response
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    if let Ok(user) = resolve_identity(&state, req.headers()).await {
        req.extensions_mut().insert(user);
    }
    next.run(req).await
}

/// Bearer token → verified claims → existing user → identity
async fn resolve_identity<R>(
    state: &AuthGateState<R>,
    headers: &HeaderMap,
) -> AuthResult<CurrentUser>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let token = bearer_token(headers).ok_or(AuthError::MissingAuthHeader)?;

    let claims = state
        .signer
        .verify_access(token)
        .map_err(|_| AuthError::InvalidAccessToken)?;

    let user = state
        .repo
        .find_by_id(&UserId::from_uuid(claims.sub))
        .await?
        .ok_or(AuthError::UserGone)?;

    Ok(user.identity())
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;
    if token.is_empty() { None } else { Some(token) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc.def.ghi"),
        );
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn test_bearer_token_missing_or_malformed() {
        let headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcjpwYXNz"),
        );
        assert_eq!(bearer_token(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert_eq!(bearer_token(&headers), None);
    }
}
