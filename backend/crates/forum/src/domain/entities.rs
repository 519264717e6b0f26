//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::id::{ForumId, PostId, ThreadId, UserId};

use crate::domain::value_objects::Slug;

/// Public author projection (joined from the users table; never the hash)
#[derive(Debug, Clone)]
pub struct Author {
    pub id: UserId,
    pub email: String,
    pub display_name: Option<String>,
}

/// Forum entity
#[derive(Debug, Clone)]
pub struct Forum {
    pub id: ForumId,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Forum {
    pub fn new(created_by: UserId, title: String, slug: Slug, description: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: ForumId::new(),
            title,
            slug: slug.into_string(),
            description,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        self.created_by == *user_id
    }
}

/// Forum with its creator and thread count
#[derive(Debug, Clone)]
pub struct ForumWithMeta {
    pub forum: Forum,
    pub creator: Author,
    pub thread_count: i64,
}

/// Thread entity
///
/// The body is kept on the thread as written; a non-empty body is also
/// denormalized into the thread's first post at creation time.
#[derive(Debug, Clone)]
pub struct Thread {
    pub id: ThreadId,
    pub forum_id: ForumId,
    pub author_id: UserId,
    pub title: String,
    pub body: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Thread {
    pub fn new(forum_id: ForumId, author_id: UserId, title: String, body: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: ThreadId::new(),
            forum_id,
            author_id,
            title,
            body,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Thread with its author and post count
#[derive(Debug, Clone)]
pub struct ThreadWithMeta {
    pub thread: Thread,
    pub author: Author,
    pub post_count: i64,
}

/// Thread with its forum and author expanded
#[derive(Debug, Clone)]
pub struct ThreadDetail {
    pub thread: Thread,
    pub forum: Forum,
    pub author: Author,
}

/// Post entity
#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub thread_id: ThreadId,
    pub author_id: UserId,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn new(thread_id: ThreadId, author_id: UserId, body: String) -> Self {
        let now = Utc::now();
        Self {
            id: PostId::new(),
            thread_id,
            author_id,
            body,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_authored_by(&self, user_id: &UserId) -> bool {
        self.author_id == *user_id
    }
}

/// Post with its author expanded
#[derive(Debug, Clone)]
pub struct PostWithAuthor {
    pub post: Post,
    pub author: Author,
}
