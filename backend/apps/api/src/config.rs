//! Environment Configuration
//!
//! Everything is read once at startup; the resulting value is immutable.

use anyhow::Context;
use std::env;

/// Process configuration from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listening port (PORT, default 3000)
    pub port: u16,
    /// Runtime environment flag (APP_ENV, default "development")
    pub app_env: String,
    /// PostgreSQL connection string (DATABASE_URL, required)
    pub database_url: String,
    /// Access-token signing secret (JWT_ACCESS_SECRET, required)
    pub jwt_access_secret: String,
    /// Refresh-token signing secret (JWT_REFRESH_SECRET, required)
    pub jwt_refresh_secret: String,
    /// Access-token lifetime string (JWT_ACCESS_EXPIRES_IN, default "15m")
    pub jwt_access_expires_in: String,
    /// Refresh-token lifetime string (JWT_REFRESH_EXPIRES_IN, default "7d")
    pub jwt_refresh_expires_in: String,
    /// Comma-separated CORS origins (FRONTEND_ORIGINS, optional)
    pub frontend_origins: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a number")?,
            app_env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            database_url: required("DATABASE_URL")?,
            jwt_access_secret: required("JWT_ACCESS_SECRET")?,
            jwt_refresh_secret: required("JWT_REFRESH_SECRET")?,
            jwt_access_expires_in: env::var("JWT_ACCESS_EXPIRES_IN")
                .unwrap_or_else(|_| "15m".to_string()),
            jwt_refresh_expires_in: env::var("JWT_REFRESH_EXPIRES_IN")
                .unwrap_or_else(|_| "7d".to_string()),
            frontend_origins: env::var("FRONTEND_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:5173,http://127.0.0.1:5173".to_string()),
        })
    }
}

fn required(key: &str) -> anyhow::Result<String> {
    env::var(key).with_context(|| format!("Missing env: {key}"))
}
