//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::extract::ValidJson;
use platform::token::TokenSigner;

use crate::application::config::AuthConfig;
use crate::application::{
    LoginInput, LoginUseCase, LogoutUseCase, RefreshUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::repository::{RefreshTokenRepository, UserRepository};
use crate::error::AuthResult;
use crate::presentation::dto::{
    LoginRequest, RefreshRequest, RefreshResponse, RegisterRequest, SessionResponse, UserResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + RefreshTokenRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub signer: Arc<TokenSigner>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/v1/auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    ValidJson(req): ValidJson<RegisterRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + RefreshTokenRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
        state.signer.clone(),
    );

    let output = use_case
        .execute(RegisterInput {
            email: req.email,
            password: req.password,
            display_name: req.display_name,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            user: UserResponse::from(&output.user),
            access_token: output.access_token,
            refresh_token: output.refresh_token,
            expires_in: output.expires_in,
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/v1/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    ValidJson(req): ValidJson<LoginRequest>,
) -> AuthResult<Json<SessionResponse>>
where
    R: UserRepository + RefreshTokenRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
        state.signer.clone(),
    );

    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(SessionResponse {
        user: UserResponse::from(&output.user),
        access_token: output.access_token,
        refresh_token: output.refresh_token,
        expires_in: output.expires_in,
    }))
}

// ============================================================================
// Refresh
// ============================================================================

/// POST /api/v1/auth/refresh
pub async fn refresh<R>(
    State(state): State<AuthAppState<R>>,
    ValidJson(req): ValidJson<RefreshRequest>,
) -> AuthResult<Json<RefreshResponse>>
where
    R: UserRepository + RefreshTokenRepository + Clone + Send + Sync + 'static,
{
    let use_case = RefreshUseCase::new(
        state.repo.clone(),
        state.config.clone(),
        state.signer.clone(),
    );

    let output = use_case.execute(&req.refresh_token).await?;

    Ok(Json(RefreshResponse {
        access_token: output.access_token,
        refresh_token: output.refresh_token,
        expires_in: output.expires_in,
    }))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/v1/auth/logout
pub async fn logout<R>(
    State(state): State<AuthAppState<R>>,
    ValidJson(req): ValidJson<RefreshRequest>,
) -> AuthResult<StatusCode>
where
    R: UserRepository + RefreshTokenRepository + Clone + Send + Sync + 'static,
{
    let use_case = LogoutUseCase::new(state.repo.clone());
    use_case.execute(&req.refresh_token).await?;

    Ok(StatusCode::NO_CONTENT)
}
