//! Trivia Routers
//!
//! Three routers with different auth postures: the catalog is public,
//! picks and rankings are mounted behind the auth gate by the app.

use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use crate::domain::repository::{CatalogRepository, PicksRepository, RankingsRepository};
use crate::presentation::handlers::{self, TriviaAppState};

/// Public catalog routes (tournaments, players, matches)
pub fn catalog_router<R>(repo: Arc<R>) -> Router
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let state = TriviaAppState { repo };

    Router::new()
        .route("/tournaments", get(handlers::list_tournaments::<R>))
        .route("/tournaments/{id}", get(handlers::get_tournament::<R>))
        .route("/players", get(handlers::list_players::<R>))
        .route("/players/{id}", get(handlers::get_player::<R>))
        .route("/matches", get(handlers::list_matches::<R>))
        .route("/matches/{id}", get(handlers::get_match::<R>))
        .route(
            "/matches/player/{player_id}",
            get(handlers::matches_by_player::<R>),
        )
        .route(
            "/matches/player/slug/{slug}",
            get(handlers::matches_by_player_slug::<R>),
        )
        .with_state(state)
}

/// Authenticated picks routes, mounted at /me/picks
pub fn picks_router<R>(repo: Arc<R>) -> Router
where
    R: CatalogRepository + PicksRepository + Clone + Send + Sync + 'static,
{
    let state = TriviaAppState { repo };

    Router::new()
        .route(
            "/",
            get(handlers::get_picks::<R>).put(handlers::put_picks::<R>),
        )
        .with_state(state)
}

/// Authenticated rankings routes, mounted at /me/rankings
pub fn rankings_router<R>(repo: Arc<R>) -> Router
where
    R: CatalogRepository + RankingsRepository + Clone + Send + Sync + 'static,
{
    let state = TriviaAppState { repo };

    Router::new()
        .route(
            "/best-of-5",
            get(handlers::get_best_of5_ranking::<R>).put(handlers::put_best_of5_ranking::<R>),
        )
        .route(
            "/best-of-3",
            get(handlers::get_best_of3_ranking::<R>).put(handlers::put_best_of3_ranking::<R>),
        )
        .route(
            "/players",
            get(handlers::get_players_ranking::<R>).put(handlers::put_players_ranking::<R>),
        )
        .route(
            "/grand-slam-finals",
            get(handlers::get_grand_slam_finals_ranking::<R>)
                .put(handlers::put_grand_slam_finals_ranking::<R>),
        )
        .with_state(state)
}
