//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - Common error types and result aliases
//! - Common primitive value objects (ID types, etc.)
//! - Pagination window and tri-state patch primitives
//! - The authenticated request identity
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
#[cfg(feature = "axum")]
pub mod extract;
pub mod id;
pub mod identity;
pub mod page;
pub mod patch;
