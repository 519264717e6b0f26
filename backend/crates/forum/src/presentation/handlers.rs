//! HTTP Handlers
//!
//! Reads are public. Writes extract [`CurrentUser`] and therefore 401 when
//! the upstream `attach_identity` layer resolved nothing.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::extract::ValidJson;
use kernel::id::Id;
use kernel::identity::CurrentUser;
use kernel::page::{PageParams, PageQuery};
use uuid::Uuid;

use crate::application::forums::{
    CreateForumInput, CreateForumUseCase, ForumQueries, UpdateForumInput, UpdateForumUseCase,
};
use crate::application::posts::{CreatePostUseCase, UpdatePostUseCase};
use crate::application::threads::{CreateThreadInput, CreateThreadUseCase, GetThreadUseCase};
use crate::domain::repository::ForumRepository;
use crate::error::ForumResult;
use crate::presentation::dto::{
    CreateForumRequest, CreateThreadRequest, ForumBody, PagedResponse, PostBody,
    PostBodyRequest, ThreadBody, ThreadDetailResponse, UpdateForumRequest,
};

/// Shared state for forum handlers
#[derive(Clone)]
pub struct ForumAppState<R>
where
    R: ForumRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Forums
// ============================================================================

/// GET /api/v1/forums
pub async fn list_forums<R>(
    State(state): State<ForumAppState<R>>,
    Query(page): Query<PageQuery>,
) -> ForumResult<Json<PagedResponse<ForumBody>>>
where
    R: ForumRepository + Clone + Send + Sync + 'static,
{
    let queries = ForumQueries::new(state.repo.clone());
    let (data, total) = queries.list_forums(PageParams::from(page)).await?;

    Ok(Json(PagedResponse {
        data: data.into_iter().map(Into::into).collect(),
        total,
    }))
}

/// GET /api/v1/forums/{id}
pub async fn get_forum<R>(
    State(state): State<ForumAppState<R>>,
    Path(id): Path<Uuid>,
) -> ForumResult<Json<ForumBody>>
where
    R: ForumRepository + Clone + Send + Sync + 'static,
{
    let queries = ForumQueries::new(state.repo.clone());
    let forum = queries.get_forum(&Id::from_uuid(id)).await?;
    Ok(Json(forum.into()))
}

/// POST /api/v1/forums
pub async fn create_forum<R>(
    State(state): State<ForumAppState<R>>,
    user: CurrentUser,
    ValidJson(req): ValidJson<CreateForumRequest>,
) -> ForumResult<impl IntoResponse>
where
    R: ForumRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateForumUseCase::new(state.repo.clone());
    let forum = use_case
        .execute(
            &user.id,
            CreateForumInput {
                title: req.title,
                slug: req.slug,
                description: req.description,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ForumBody::from(forum))))
}

/// PATCH /api/v1/forums/{id}
pub async fn update_forum<R>(
    State(state): State<ForumAppState<R>>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    ValidJson(req): ValidJson<UpdateForumRequest>,
) -> ForumResult<Json<ForumBody>>
where
    R: ForumRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateForumUseCase::new(state.repo.clone());
    let forum = use_case
        .execute(
            &Id::from_uuid(id),
            &user.id,
            UpdateForumInput {
                title: req.title,
                description: req.description,
            },
        )
        .await?;

    Ok(Json(forum.into()))
}

// ============================================================================
// Threads
// ============================================================================

/// GET /api/v1/forums/{id}/threads
pub async fn list_threads<R>(
    State(state): State<ForumAppState<R>>,
    Path(id): Path<Uuid>,
    Query(page): Query<PageQuery>,
) -> ForumResult<Json<PagedResponse<ThreadBody>>>
where
    R: ForumRepository + Clone + Send + Sync + 'static,
{
    let queries = ForumQueries::new(state.repo.clone());
    let (data, total) = queries
        .list_threads(&Id::from_uuid(id), PageParams::from(page))
        .await?;

    Ok(Json(PagedResponse {
        data: data.into_iter().map(Into::into).collect(),
        total,
    }))
}

/// POST /api/v1/forums/{id}/threads
pub async fn create_thread<R>(
    State(state): State<ForumAppState<R>>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    ValidJson(req): ValidJson<CreateThreadRequest>,
) -> ForumResult<impl IntoResponse>
where
    R: ForumRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateThreadUseCase::new(state.repo.clone());
    let thread = use_case
        .execute(
            &Id::from_uuid(id),
            &user.id,
            CreateThreadInput {
                title: req.title,
                body: req.body,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ThreadBody::from(thread))))
}

/// GET /api/v1/threads/{id}
pub async fn get_thread<R>(
    State(state): State<ForumAppState<R>>,
    Path(id): Path<Uuid>,
    Query(page): Query<PageQuery>,
) -> ForumResult<Json<ThreadDetailResponse>>
where
    R: ForumRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetThreadUseCase::new(state.repo.clone());
    let (detail, posts, total) = use_case
        .execute(&Id::from_uuid(id), PageParams::from(page))
        .await?;

    Ok(Json(ThreadDetailResponse::new(detail, posts, total)))
}

// ============================================================================
// Posts
// ============================================================================

/// GET /api/v1/threads/{id}/posts
pub async fn list_posts<R>(
    State(state): State<ForumAppState<R>>,
    Path(id): Path<Uuid>,
    Query(page): Query<PageQuery>,
) -> ForumResult<Json<PagedResponse<PostBody>>>
where
    R: ForumRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetThreadUseCase::new(state.repo.clone());
    let (data, total) = use_case
        .posts(&Id::from_uuid(id), PageParams::from(page))
        .await?;

    Ok(Json(PagedResponse {
        data: data.into_iter().map(Into::into).collect(),
        total,
    }))
}

/// POST /api/v1/threads/{id}/posts
pub async fn create_post<R>(
    State(state): State<ForumAppState<R>>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    ValidJson(req): ValidJson<PostBodyRequest>,
) -> ForumResult<impl IntoResponse>
where
    R: ForumRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreatePostUseCase::new(state.repo.clone());
    let post = use_case
        .execute(&Id::from_uuid(id), &user.id, req.body)
        .await?;

    Ok((StatusCode::CREATED, Json(PostBody::from(post))))
}

/// PATCH /api/v1/posts/{id}
pub async fn update_post<R>(
    State(state): State<ForumAppState<R>>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    ValidJson(req): ValidJson<PostBodyRequest>,
) -> ForumResult<Json<PostBody>>
where
    R: ForumRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdatePostUseCase::new(state.repo.clone());
    let post = use_case
        .execute(&Id::from_uuid(id), &user.id, req.body)
        .await?;

    Ok(Json(post.into()))
}
