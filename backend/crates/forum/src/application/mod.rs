//! Application Layer
//!
//! Use cases for forums, threads and posts.

pub mod forums;
pub mod posts;
pub mod threads;

// Re-exports
pub use forums::{
    CreateForumInput, CreateForumUseCase, ForumQueries, UpdateForumInput, UpdateForumUseCase,
};
pub use posts::{CreatePostUseCase, UpdatePostUseCase};
pub use threads::{CreateThreadInput, CreateThreadUseCase, GetThreadUseCase};
