//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors go through
//! `kernel::error::AppError`.

mod config;

use std::net::SocketAddr;
use std::sync::Arc;

use auth::{AuthConfig, AuthGateState, PgAuthRepository, attach_identity, require_identity};
use axum::{
    Json, Router, http,
    http::{Method, header},
    middleware,
    routing::get,
};
use forum::{PgForumRepository, forum_router};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trivia::{PgTriviaRepository, catalog_router, picks_router, rankings_router};

use crate::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,trivia=info,forum=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app_config = AppConfig::from_env()?;

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&app_config.database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Startup cleanup: drop expired refresh tokens.
    // Errors here should not prevent server startup.
    let auth_repo = PgAuthRepository::new(pool.clone());
    match auth_repo.cleanup_expired().await {
        Ok(deleted) => {
            tracing::info!(tokens_deleted = deleted, "Refresh token cleanup completed");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Refresh token cleanup failed, continuing anyway");
        }
    }

    // Auth configuration: two independent secrets, two lifetimes
    let auth_config = AuthConfig::new(
        app_config.jwt_access_secret.clone(),
        app_config.jwt_refresh_secret.clone(),
        &app_config.jwt_access_expires_in,
        &app_config.jwt_refresh_expires_in,
    )?;

    // Repositories
    let trivia_repo = Arc::new(PgTriviaRepository::new(pool.clone()));
    let forum_repo = Arc::new(PgForumRepository::new(pool.clone()));

    // Auth gate shared by the protected and mixed routers
    let gate = AuthGateState::new(Arc::new(auth_repo.clone()), Arc::new(auth_config.signer()));

    // CORS configuration
    let allowed_origins: Vec<http::HeaderValue> = app_config
        .frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Authenticated-only routes: picks and rankings
    let me_routes = Router::new()
        .nest("/me/picks", picks_router(trivia_repo.clone()))
        .nest("/me/rankings", rankings_router(trivia_repo.clone()))
        .layer(middleware::from_fn_with_state(
            gate.clone(),
            require_identity::<PgAuthRepository>,
        ));

    // Mixed public-read/authenticated-write routes: forums
    let forum_routes = forum_router(forum_repo).layer(middleware::from_fn_with_state(
        gate.clone(),
        attach_identity::<PgAuthRepository>,
    ));

    // Versioned API surface
    let api_v1 = Router::new()
        .nest("/auth", auth::auth_router(auth_repo, auth_config))
        .merge(catalog_router(trivia_repo))
        .merge(me_routes)
        .merge(forum_routes);

    // Build router
    let app = Router::new()
        .nest("/api/v1", api_v1)
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], app_config.port));
    tracing::info!(env = %app_config.app_env, "Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// GET /health
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}
