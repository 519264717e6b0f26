//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Registration and login with email + password
//! - Stateless bearer access tokens plus rotated refresh tokens
//! - Single-use refresh tokens: every presented token is consumed
//! - Idempotent logout
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, never returned by any endpoint
//! - Access and refresh tokens signed with independent secrets
//! - Only the SHA-256 digest of a refresh token is persisted; a data-store
//!   compromise alone cannot be replayed without the signing secret
//! - Login failures are indistinguishable between unknown email and wrong
//!   password (no account enumeration)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::middleware::{AuthGateState, attach_identity, require_identity};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
