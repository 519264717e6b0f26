//! Authenticated Request Identity
//!
//! The auth gate resolves the bearer token to a [`CurrentUser`] and attaches
//! it to the request; downstream handlers receive it as an explicit value
//! rather than re-reading headers. The password hash never appears here.

use chrono::{DateTime, Utc};

use crate::id::UserId;

/// The identity attached to an authenticated request
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: UserId,
    pub email: String,
    pub display_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "axum")]
mod extractor {
    use axum::extract::FromRequestParts;
    use axum::http::request::Parts;

    use super::CurrentUser;
    use crate::error::app_error::AppError;

    impl<S> FromRequestParts<S> for CurrentUser
    where
        S: Send + Sync,
    {
        type Rejection = AppError;

        async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
            parts.extensions.get::<CurrentUser>().cloned().ok_or_else(|| {
                AppError::unauthorized("Missing or invalid Authorization header")
                    .with_code("AUTH_REQUIRED")
            })
        }
    }
}
