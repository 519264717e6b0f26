//! Thread Use Cases

use std::sync::Arc;

use kernel::id::{ForumId, ThreadId, UserId};
use kernel::page::PageParams;

use crate::domain::entities::{Post, PostWithAuthor, Thread, ThreadDetail, ThreadWithMeta};
use crate::domain::repository::ForumRepository;
use crate::error::{ForumError, ForumResult};

pub(crate) const MAX_THREAD_TITLE: usize = 300;
pub(crate) const MAX_BODY: usize = 10_000;

/// Create thread input
pub struct CreateThreadInput {
    pub title: String,
    pub body: Option<String>,
}

/// Create thread use case
pub struct CreateThreadUseCase<F>
where
    F: ForumRepository,
{
    repo: Arc<F>,
}

impl<F> CreateThreadUseCase<F>
where
    F: ForumRepository,
{
    pub fn new(repo: Arc<F>) -> Self {
        Self { repo }
    }

    /// A trimmed non-empty body becomes the thread's first post, written in
    /// the same transaction as the thread itself.
    pub async fn execute(
        &self,
        forum_id: &ForumId,
        user_id: &UserId,
        input: CreateThreadInput,
    ) -> ForumResult<ThreadWithMeta> {
        self.repo
            .find_forum(forum_id)
            .await?
            .ok_or(ForumError::ForumNotFound)?;

        let title = input.title.trim().to_string();
        if title.is_empty() {
            return Err(ForumError::EmptyField { field: "title" });
        }
        if title.chars().count() > MAX_THREAD_TITLE {
            return Err(ForumError::FieldTooLong {
                field: "title",
                max: MAX_THREAD_TITLE,
            });
        }

        let body = match input.body.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(trimmed) => {
                if trimmed.chars().count() > MAX_BODY {
                    return Err(ForumError::FieldTooLong {
                        field: "body",
                        max: MAX_BODY,
                    });
                }
                Some(trimmed.to_string())
            }
        };

        let thread = Thread::new(*forum_id, *user_id, title, body.clone());
        let first_post = body.map(|b| Post::new(thread.id, *user_id, b));

        self.repo
            .create_thread_with_first_post(&thread, first_post.as_ref())
            .await?;

        tracing::info!(
            thread_id = %thread.id,
            forum_id = %forum_id,
            seeded_post = first_post.is_some(),
            "Thread created"
        );

        let author = self
            .repo
            .find_author(user_id)
            .await?
            .ok_or_else(|| ForumError::Internal("Thread author missing".to_string()))?;

        Ok(ThreadWithMeta {
            post_count: if first_post.is_some() { 1 } else { 0 },
            thread,
            author,
        })
    }
}

/// Get thread use case: the thread, its forum/author, and a page of posts
pub struct GetThreadUseCase<F>
where
    F: ForumRepository,
{
    repo: Arc<F>,
}

impl<F> GetThreadUseCase<F>
where
    F: ForumRepository,
{
    pub fn new(repo: Arc<F>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        thread_id: &ThreadId,
        page: PageParams,
    ) -> ForumResult<(ThreadDetail, Vec<PostWithAuthor>, i64)> {
        let detail = self
            .repo
            .find_thread_detail(thread_id)
            .await?
            .ok_or(ForumError::ThreadNotFound)?;

        let (posts, total) = self.repo.list_posts(thread_id, page).await?;

        Ok((detail, posts, total))
    }

    /// Just the posts page; unknown thread is a 404
    pub async fn posts(
        &self,
        thread_id: &ThreadId,
        page: PageParams,
    ) -> ForumResult<(Vec<PostWithAuthor>, i64)> {
        self.repo
            .find_thread(thread_id)
            .await?
            .ok_or(ForumError::ThreadNotFound)?;
        self.repo.list_posts(thread_id, page).await
    }
}
