//! Forum Backend Module — forums, threads, posts
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, slug derivation, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Forums with derived-or-explicit unique slugs
//! - Threads whose non-empty body doubles as the first post
//! - Ownership rules: forums are edited by their creator, posts by their
//!   author

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{ForumError, ForumResult};
pub use infra::postgres::PgForumRepository;
pub use presentation::router::forum_router;
