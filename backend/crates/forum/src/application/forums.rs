//! Forum Use Cases

use std::sync::Arc;

use kernel::id::{ForumId, UserId};
use kernel::page::PageParams;
use kernel::patch::Patch;

use crate::domain::entities::{Forum, ForumWithMeta, ThreadWithMeta};
use crate::domain::repository::ForumRepository;
use crate::domain::value_objects::Slug;
use crate::error::{ForumError, ForumResult};

pub(crate) const MAX_FORUM_TITLE: usize = 200;
pub(crate) const MAX_SLUG: usize = 100;
pub(crate) const MAX_DESCRIPTION: usize = 2000;

/// Read-side forum queries
pub struct ForumQueries<F>
where
    F: ForumRepository,
{
    repo: Arc<F>,
}

impl<F> ForumQueries<F>
where
    F: ForumRepository,
{
    pub fn new(repo: Arc<F>) -> Self {
        Self { repo }
    }

    pub async fn list_forums(
        &self,
        page: PageParams,
    ) -> ForumResult<(Vec<ForumWithMeta>, i64)> {
        self.repo.list_forums(page).await
    }

    pub async fn get_forum(&self, id: &ForumId) -> ForumResult<ForumWithMeta> {
        self.repo
            .find_forum_with_meta(id)
            .await?
            .ok_or(ForumError::ForumNotFound)
    }

    /// A forum's threads; unknown forum is a 404, an empty page is not
    pub async fn list_threads(
        &self,
        forum_id: &ForumId,
        page: PageParams,
    ) -> ForumResult<(Vec<ThreadWithMeta>, i64)> {
        self.repo
            .find_forum(forum_id)
            .await?
            .ok_or(ForumError::ForumNotFound)?;
        self.repo.list_threads(forum_id, page).await
    }
}

/// Create forum input
pub struct CreateForumInput {
    pub title: String,
    pub slug: Option<String>,
    pub description: Option<String>,
}

/// Create forum use case
pub struct CreateForumUseCase<F>
where
    F: ForumRepository,
{
    repo: Arc<F>,
}

impl<F> CreateForumUseCase<F>
where
    F: ForumRepository,
{
    pub fn new(repo: Arc<F>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        user_id: &UserId,
        input: CreateForumInput,
    ) -> ForumResult<ForumWithMeta> {
        let title = input.title.trim().to_string();
        if title.is_empty() {
            return Err(ForumError::EmptyField { field: "title" });
        }
        if title.chars().count() > MAX_FORUM_TITLE {
            return Err(ForumError::FieldTooLong {
                field: "title",
                max: MAX_FORUM_TITLE,
            });
        }

        // An explicit slug wins; otherwise derive one from the title
        let slug = match input.slug.as_deref().and_then(Slug::from_explicit) {
            Some(slug) => slug,
            None => Slug::derive(&title).ok_or(ForumError::EmptySlug)?,
        };
        if slug.as_str().chars().count() > MAX_SLUG {
            return Err(ForumError::FieldTooLong {
                field: "slug",
                max: MAX_SLUG,
            });
        }

        if self.repo.slug_exists(slug.as_str()).await? {
            return Err(ForumError::SlugTaken);
        }

        let description = normalize_description(input.description)?;

        let forum = Forum::new(*user_id, title, slug, description);
        self.repo.create_forum(&forum).await?;

        tracing::info!(forum_id = %forum.id, slug = %forum.slug, "Forum created");

        self.repo
            .find_forum_with_meta(&forum.id)
            .await?
            .ok_or_else(|| ForumError::Internal("Forum missing after create".to_string()))
    }
}

/// Update forum input: title optional, description tri-state
pub struct UpdateForumInput {
    pub title: Option<String>,
    pub description: Patch<String>,
}

/// Update forum use case
pub struct UpdateForumUseCase<F>
where
    F: ForumRepository,
{
    repo: Arc<F>,
}

impl<F> UpdateForumUseCase<F>
where
    F: ForumRepository,
{
    pub fn new(repo: Arc<F>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        forum_id: &ForumId,
        user_id: &UserId,
        input: UpdateForumInput,
    ) -> ForumResult<ForumWithMeta> {
        let mut forum = self
            .repo
            .find_forum(forum_id)
            .await?
            .ok_or(ForumError::ForumNotFound)?;

        if !forum.is_owned_by(user_id) {
            return Err(ForumError::NotForumOwner);
        }

        if let Some(title) = input.title {
            let title = title.trim().to_string();
            if title.is_empty() {
                return Err(ForumError::EmptyField { field: "title" });
            }
            if title.chars().count() > MAX_FORUM_TITLE {
                return Err(ForumError::FieldTooLong {
                    field: "title",
                    max: MAX_FORUM_TITLE,
                });
            }
            forum.title = title;
        }

        match input.description {
            Patch::Missing => {}
            Patch::Null => forum.description = None,
            Patch::Value(description) => {
                forum.description = normalize_description(Some(description))?;
            }
        }

        forum.updated_at = chrono::Utc::now();
        self.repo.update_forum(&forum).await?;

        self.repo
            .find_forum_with_meta(forum_id)
            .await?
            .ok_or_else(|| ForumError::Internal("Forum missing after update".to_string()))
    }
}

/// Trim a description; blank collapses to none
fn normalize_description(description: Option<String>) -> ForumResult<Option<String>> {
    match description {
        None => Ok(None),
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            if trimmed.chars().count() > MAX_DESCRIPTION {
                return Err(ForumError::FieldTooLong {
                    field: "description",
                    max: MAX_DESCRIPTION,
                });
            }
            Ok(Some(trimmed.to_string()))
        }
    }
}
