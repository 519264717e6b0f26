//! Forum Router
//!
//! Mixed public-read/authenticated-write routes. The app mounts this behind
//! the `attach_identity` layer; write handlers reject unauthenticated
//! requests through the [`kernel::identity::CurrentUser`] extractor.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, patch},
};

use crate::domain::repository::ForumRepository;
use crate::presentation::handlers::{self, ForumAppState};

/// Create the forum router (forums, threads, posts)
pub fn forum_router<R>(repo: Arc<R>) -> Router
where
    R: ForumRepository + Clone + Send + Sync + 'static,
{
    let state = ForumAppState { repo };

    Router::new()
        .route(
            "/forums",
            get(handlers::list_forums::<R>).post(handlers::create_forum::<R>),
        )
        .route(
            "/forums/{id}",
            get(handlers::get_forum::<R>).patch(handlers::update_forum::<R>),
        )
        .route(
            "/forums/{id}/threads",
            get(handlers::list_threads::<R>).post(handlers::create_thread::<R>),
        )
        .route("/threads/{id}", get(handlers::get_thread::<R>))
        .route(
            "/threads/{id}/posts",
            get(handlers::list_posts::<R>).post(handlers::create_post::<R>),
        )
        .route("/posts/{id}", patch(handlers::update_post::<R>))
        .with_state(state)
}
