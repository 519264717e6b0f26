//! Post Use Cases

use std::sync::Arc;

use chrono::Utc;
use kernel::id::{PostId, ThreadId, UserId};

use crate::application::threads::MAX_BODY;
use crate::domain::entities::{Post, PostWithAuthor};
use crate::domain::repository::ForumRepository;
use crate::error::{ForumError, ForumResult};

/// Create post use case
pub struct CreatePostUseCase<F>
where
    F: ForumRepository,
{
    repo: Arc<F>,
}

impl<F> CreatePostUseCase<F>
where
    F: ForumRepository,
{
    pub fn new(repo: Arc<F>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        thread_id: &ThreadId,
        user_id: &UserId,
        body: String,
    ) -> ForumResult<PostWithAuthor> {
        self.repo
            .find_thread(thread_id)
            .await?
            .ok_or(ForumError::ThreadNotFound)?;

        let body = validate_body(body)?;

        let post = Post::new(*thread_id, *user_id, body);
        self.repo.create_post(&post).await?;

        tracing::debug!(post_id = %post.id, thread_id = %thread_id, "Post created");

        let author = self
            .repo
            .find_author(user_id)
            .await?
            .ok_or_else(|| ForumError::Internal("Post author missing".to_string()))?;

        Ok(PostWithAuthor { post, author })
    }
}

/// Update post use case
pub struct UpdatePostUseCase<F>
where
    F: ForumRepository,
{
    repo: Arc<F>,
}

impl<F> UpdatePostUseCase<F>
where
    F: ForumRepository,
{
    pub fn new(repo: Arc<F>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        post_id: &PostId,
        user_id: &UserId,
        body: String,
    ) -> ForumResult<PostWithAuthor> {
        let mut post = self
            .repo
            .find_post(post_id)
            .await?
            .ok_or(ForumError::PostNotFound)?;

        if !post.is_authored_by(user_id) {
            return Err(ForumError::NotPostAuthor);
        }

        post.body = validate_body(body)?;
        post.updated_at = Utc::now();

        self.repo.update_post(&post).await?;

        self.repo
            .find_post_with_author(post_id)
            .await?
            .ok_or_else(|| ForumError::Internal("Post missing after update".to_string()))
    }
}

fn validate_body(body: String) -> ForumResult<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(ForumError::EmptyField { field: "body" });
    }
    if trimmed.chars().count() > MAX_BODY {
        return Err(ForumError::FieldTooLong {
            field: "body",
            max: MAX_BODY,
        });
    }
    Ok(trimmed.to_string())
}
