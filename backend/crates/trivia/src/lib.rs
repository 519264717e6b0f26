//! Trivia Backend Module — catalog, picks and rankings
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, eligibility rules, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, routers
//!
//! ## Features
//! - Read-only catalog of tournaments, players and matches with filters
//!   and pagination (the reference data is immutable — no write endpoints)
//! - Per-user favorite picks: a single row with four independently
//!   patchable slots, each guarded by an eligibility rule
//! - Per-user top-N rankings (best-of-5, best-of-3, players, Grand Slam
//!   finals), validated and replaced atomically as a whole

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use error::{TriviaError, TriviaResult};
pub use infra::postgres::PgTriviaRepository;
pub use presentation::router::{catalog_router, picks_router, rankings_router};
