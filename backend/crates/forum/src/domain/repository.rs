//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{ForumId, PostId, ThreadId, UserId};
use kernel::page::PageParams;

use crate::domain::entities::{
    Author, Forum, ForumWithMeta, Post, PostWithAuthor, Thread, ThreadDetail, ThreadWithMeta,
};
use crate::error::ForumResult;

/// Forum/thread/post repository trait
#[trait_variant::make(ForumRepository: Send)]
pub trait LocalForumRepository {
    // ------------------------------------------------------------------
    // Forums
    // ------------------------------------------------------------------

    /// Page of forums (newest first) plus the total count
    async fn list_forums(&self, page: PageParams) -> ForumResult<(Vec<ForumWithMeta>, i64)>;

    /// Find forum by ID
    async fn find_forum(&self, id: &ForumId) -> ForumResult<Option<Forum>>;

    /// Find forum with creator and thread count
    async fn find_forum_with_meta(&self, id: &ForumId) -> ForumResult<Option<ForumWithMeta>>;

    /// Whether a forum already claims this slug
    async fn slug_exists(&self, slug: &str) -> ForumResult<bool>;

    /// Create a forum
    async fn create_forum(&self, forum: &Forum) -> ForumResult<()>;

    /// Persist updated forum fields
    async fn update_forum(&self, forum: &Forum) -> ForumResult<()>;

    // ------------------------------------------------------------------
    // Threads
    // ------------------------------------------------------------------

    /// Page of a forum's threads (newest first) plus the total count
    async fn list_threads(
        &self,
        forum_id: &ForumId,
        page: PageParams,
    ) -> ForumResult<(Vec<ThreadWithMeta>, i64)>;

    /// Find thread by ID
    async fn find_thread(&self, id: &ThreadId) -> ForumResult<Option<Thread>>;

    /// Find thread with forum and author expanded
    async fn find_thread_detail(&self, id: &ThreadId) -> ForumResult<Option<ThreadDetail>>;

    /// Create a thread, and its first post when one is given, in a single
    /// transaction
    async fn create_thread_with_first_post(
        &self,
        thread: &Thread,
        first_post: Option<&Post>,
    ) -> ForumResult<()>;

    // ------------------------------------------------------------------
    // Posts
    // ------------------------------------------------------------------

    /// Page of a thread's posts (oldest first) plus the total count
    async fn list_posts(
        &self,
        thread_id: &ThreadId,
        page: PageParams,
    ) -> ForumResult<(Vec<PostWithAuthor>, i64)>;

    /// Find post by ID
    async fn find_post(&self, id: &PostId) -> ForumResult<Option<Post>>;

    /// Find post with author expanded
    async fn find_post_with_author(&self, id: &PostId) -> ForumResult<Option<PostWithAuthor>>;

    /// Create a post
    async fn create_post(&self, post: &Post) -> ForumResult<()>;

    /// Persist an edited post body
    async fn update_post(&self, post: &Post) -> ForumResult<()>;

    // ------------------------------------------------------------------
    // Authors
    // ------------------------------------------------------------------

    /// The public author projection for a user
    async fn find_author(&self, user_id: &UserId) -> ForumResult<Option<Author>>;
}
