//! Domain Layer
//!
//! Entities, slug derivation, and repository traits.

pub mod entities;
pub mod repository;
pub mod value_objects;

// Re-exports
pub use entities::{
    Author, Forum, ForumWithMeta, Post, PostWithAuthor, Thread, ThreadDetail, ThreadWithMeta,
};
pub use repository::ForumRepository;
pub use value_objects::Slug;
