//! Request Extraction Helpers
//!
//! [`ValidJson`] is a drop-in replacement for `axum::Json` whose rejection is
//! the API's own 400 error body with code `VALIDATION_ERROR`, so malformed
//! input never reaches a handler and never leaks axum's default rejection
//! format.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::app_error::AppError;

/// JSON body extractor with unified validation errors
#[derive(Debug, Clone, Copy)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ValidJson(value)),
            Err(rejection) => Err(map_rejection(rejection)),
        }
    }
}

fn map_rejection(rejection: JsonRejection) -> AppError {
    AppError::bad_request(rejection.body_text()).with_code("VALIDATION_ERROR")
}
