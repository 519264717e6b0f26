//! Auth Router

use std::sync::Arc;

use axum::{Router, routing::post};

use crate::application::config::AuthConfig;
use crate::domain::repository::{RefreshTokenRepository, UserRepository};
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + RefreshTokenRepository + Clone + Send + Sync + 'static,
{
    let signer = Arc::new(config.signer());
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
        signer,
    };

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .route("/refresh", post(handlers::refresh::<R>))
        .route("/logout", post(handlers::logout::<R>))
        .with_state(state)
}
