//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::{ForumId, PostId, ThreadId, UserId};
use kernel::patch::Patch;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    Author, Forum, ForumWithMeta, PostWithAuthor, ThreadDetail, ThreadWithMeta,
};

// ============================================================================
// Shared bodies
// ============================================================================

/// Public author projection
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorBody {
    pub id: UserId,
    pub email: String,
    pub display_name: Option<String>,
}

impl From<Author> for AuthorBody {
    fn from(a: Author) -> Self {
        Self {
            id: a.id,
            email: a.email,
            display_name: a.display_name,
        }
    }
}

/// `{data, total}` list envelope
#[derive(Debug, Clone, Serialize)]
pub struct PagedResponse<T> {
    pub data: Vec<T>,
    pub total: i64,
}

// ============================================================================
// Forums
// ============================================================================

/// POST /forums body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateForumRequest {
    pub title: String,
    pub slug: Option<String>,
    pub description: Option<String>,
}

/// PATCH /forums/{id} body; description distinguishes absent from null
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateForumRequest {
    pub title: Option<String>,
    #[serde(default)]
    pub description: Patch<String>,
}

/// Forum response body with creator and thread count
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumBody {
    pub id: ForumId,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub creator: AuthorBody,
    pub thread_count: i64,
}

impl From<ForumWithMeta> for ForumBody {
    fn from(m: ForumWithMeta) -> Self {
        let f = m.forum;
        Self {
            id: f.id,
            title: f.title,
            slug: f.slug,
            description: f.description,
            created_by: f.created_by,
            created_at: f.created_at,
            updated_at: f.updated_at,
            creator: m.creator.into(),
            thread_count: m.thread_count,
        }
    }
}

/// Bare forum body (nested inside a thread detail)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BareForumBody {
    pub id: ForumId,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Forum> for BareForumBody {
    fn from(f: Forum) -> Self {
        Self {
            id: f.id,
            title: f.title,
            slug: f.slug,
            description: f.description,
            created_by: f.created_by,
            created_at: f.created_at,
            updated_at: f.updated_at,
        }
    }
}

// ============================================================================
// Threads
// ============================================================================

/// POST /forums/{id}/threads body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateThreadRequest {
    pub title: String,
    pub body: Option<String>,
}

/// Thread response body with author and post count
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadBody {
    pub id: ThreadId,
    pub forum_id: ForumId,
    pub author_id: UserId,
    pub title: String,
    pub body: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: AuthorBody,
    pub post_count: i64,
}

impl From<ThreadWithMeta> for ThreadBody {
    fn from(m: ThreadWithMeta) -> Self {
        let t = m.thread;
        Self {
            id: t.id,
            forum_id: t.forum_id,
            author_id: t.author_id,
            title: t.title,
            body: t.body,
            created_at: t.created_at,
            updated_at: t.updated_at,
            author: m.author.into(),
            post_count: m.post_count,
        }
    }
}

/// GET /threads/{id} response: the thread, its forum/author, and a page of
/// posts with the overall post total
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadDetailResponse {
    pub id: ThreadId,
    pub forum_id: ForumId,
    pub author_id: UserId,
    pub title: String,
    pub body: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub forum: BareForumBody,
    pub author: AuthorBody,
    pub posts: Vec<PostBody>,
    pub posts_total: i64,
}

impl ThreadDetailResponse {
    pub fn new(detail: ThreadDetail, posts: Vec<PostWithAuthor>, posts_total: i64) -> Self {
        let t = detail.thread;
        Self {
            id: t.id,
            forum_id: t.forum_id,
            author_id: t.author_id,
            title: t.title,
            body: t.body,
            created_at: t.created_at,
            updated_at: t.updated_at,
            forum: detail.forum.into(),
            author: detail.author.into(),
            posts: posts.into_iter().map(Into::into).collect(),
            posts_total,
        }
    }
}

// ============================================================================
// Posts
// ============================================================================

/// POST /threads/{id}/posts and PATCH /posts/{id} body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostBodyRequest {
    pub body: String,
}

/// Post response body with author
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostBody {
    pub id: PostId,
    pub thread_id: ThreadId,
    pub author_id: UserId,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: AuthorBody,
}

impl From<PostWithAuthor> for PostBody {
    fn from(p: PostWithAuthor) -> Self {
        let post = p.post;
        Self {
            id: post.id,
            thread_id: post.thread_id,
            author_id: post.author_id,
            body: post.body,
            created_at: post.created_at,
            updated_at: post.updated_at,
            author: p.author.into(),
        }
    }
}
