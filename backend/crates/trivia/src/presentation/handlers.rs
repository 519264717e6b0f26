//! HTTP Handlers
//!
//! Catalog handlers are public. Picks and rankings handlers receive the
//! resolved [`CurrentUser`] — the auth gate has already run for them.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use kernel::extract::ValidJson;
use kernel::id::Id;
use kernel::identity::CurrentUser;
use kernel::page::PageParams;
use uuid::Uuid;

use crate::application::catalog::CatalogQueries;
use crate::application::picks::{GetPicksUseCase, PicksInput, SetPicksUseCase};
use crate::application::rankings::{
    GetRankingsUseCase, SetMatchRankingUseCase, SetPlayerRankingUseCase,
};
use crate::domain::repository::{CatalogRepository, PicksRepository, RankingsRepository};
use crate::domain::value_objects::{MatchFilter, MatchRankingKind, TournamentFilter};
use crate::error::TriviaResult;
use crate::presentation::dto::{
    ListResponse, MatchBody, MatchIdsRequest, MatchListQuery, PicksBody, PicksResponse,
    PlayerBody, PlayerIdsRequest, PlayerListQuery, PlayerMatchesResponse, RankedMatchBody,
    RankedPlayerBody, SetPicksRequest, TournamentBody, TournamentListQuery,
};

/// Shared state for trivia handlers
#[derive(Clone)]
pub struct TriviaAppState<R> {
    pub repo: Arc<R>,
}

// ============================================================================
// Tournaments
// ============================================================================

/// GET /api/v1/tournaments
pub async fn list_tournaments<R>(
    State(state): State<TriviaAppState<R>>,
    Query(query): Query<TournamentListQuery>,
) -> TriviaResult<Json<ListResponse<TournamentBody>>>
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let queries = CatalogQueries::new(state.repo.clone());
    let filter = TournamentFilter {
        is_grand_slam: query.is_grand_slam,
    };
    let page = PageParams::new(query.limit, query.offset);

    let data = queries.list_tournaments(&filter, page).await?;

    Ok(Json(ListResponse {
        data: data.into_iter().map(Into::into).collect(),
    }))
}

/// GET /api/v1/tournaments/{id}
pub async fn get_tournament<R>(
    State(state): State<TriviaAppState<R>>,
    Path(id): Path<Uuid>,
) -> TriviaResult<Json<TournamentBody>>
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let queries = CatalogQueries::new(state.repo.clone());
    let tournament = queries.get_tournament(&Id::from_uuid(id)).await?;
    Ok(Json(tournament.into()))
}

// ============================================================================
// Players
// ============================================================================

/// GET /api/v1/players
pub async fn list_players<R>(
    State(state): State<TriviaAppState<R>>,
    Query(query): Query<PlayerListQuery>,
) -> TriviaResult<Json<ListResponse<PlayerBody>>>
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let queries = CatalogQueries::new(state.repo.clone());
    let page = PageParams::new(query.limit, query.offset);

    let data = queries.list_players(query.search.as_deref(), page).await?;

    Ok(Json(ListResponse {
        data: data.into_iter().map(Into::into).collect(),
    }))
}

/// GET /api/v1/players/{id}
pub async fn get_player<R>(
    State(state): State<TriviaAppState<R>>,
    Path(id): Path<Uuid>,
) -> TriviaResult<Json<PlayerBody>>
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let queries = CatalogQueries::new(state.repo.clone());
    let player = queries.get_player(&Id::from_uuid(id)).await?;
    Ok(Json(player.into()))
}

// ============================================================================
// Matches
// ============================================================================

/// GET /api/v1/matches
pub async fn list_matches<R>(
    State(state): State<TriviaAppState<R>>,
    Query(query): Query<MatchListQuery>,
) -> TriviaResult<Json<ListResponse<MatchBody>>>
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let queries = CatalogQueries::new(state.repo.clone());
    let filter = MatchFilter {
        tournament_id: query.tournament_id.map(Id::from_uuid),
        year: query.year,
        best_of: query.best_of,
        is_final: query.is_final,
        category: query.category,
    };
    let page = PageParams::new(query.limit, query.offset);

    let data = queries.list_matches(&filter, page).await?;

    Ok(Json(ListResponse {
        data: data.into_iter().map(Into::into).collect(),
    }))
}

/// GET /api/v1/matches/{id}
pub async fn get_match<R>(
    State(state): State<TriviaAppState<R>>,
    Path(id): Path<Uuid>,
) -> TriviaResult<Json<MatchBody>>
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let queries = CatalogQueries::new(state.repo.clone());
    let detail = queries.get_match(&Id::from_uuid(id)).await?;
    Ok(Json(detail.into()))
}

/// GET /api/v1/matches/player/{playerId}
pub async fn matches_by_player<R>(
    State(state): State<TriviaAppState<R>>,
    Path(player_id): Path<Uuid>,
) -> TriviaResult<Json<PlayerMatchesResponse>>
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let queries = CatalogQueries::new(state.repo.clone());
    let data: Vec<MatchBody> = queries
        .matches_by_player(&Id::from_uuid(player_id))
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(PlayerMatchesResponse {
        count: data.len(),
        data,
    }))
}

/// GET /api/v1/matches/player/slug/{slug}
pub async fn matches_by_player_slug<R>(
    State(state): State<TriviaAppState<R>>,
    Path(slug): Path<String>,
) -> TriviaResult<Json<PlayerMatchesResponse>>
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let queries = CatalogQueries::new(state.repo.clone());
    let data: Vec<MatchBody> = queries
        .matches_by_player_slug(&slug)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(PlayerMatchesResponse {
        count: data.len(),
        data,
    }))
}

// ============================================================================
// Picks
// ============================================================================

/// GET /api/v1/me/picks
pub async fn get_picks<R>(
    State(state): State<TriviaAppState<R>>,
    user: CurrentUser,
) -> TriviaResult<Json<PicksResponse>>
where
    R: PicksRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetPicksUseCase::new(state.repo.clone());
    let picks = use_case.execute(&user.id).await?;

    Ok(Json(PicksResponse {
        data: picks.map(PicksBody::from),
    }))
}

/// PUT /api/v1/me/picks
pub async fn put_picks<R>(
    State(state): State<TriviaAppState<R>>,
    user: CurrentUser,
    ValidJson(req): ValidJson<SetPicksRequest>,
) -> TriviaResult<Json<PicksResponse>>
where
    R: CatalogRepository + PicksRepository + Clone + Send + Sync + 'static,
{
    let use_case = SetPicksUseCase::new(state.repo.clone(), state.repo.clone());

    let picks = use_case
        .execute(
            &user.id,
            PicksInput {
                favorite_player_id: req.favorite_player_id,
                favorite_best_of5_match_id: req.favorite_best_of5_match_id,
                favorite_best_of3_match_id: req.favorite_best_of3_match_id,
                best_grand_slam_final_match_id: req.best_grand_slam_final_match_id,
            },
        )
        .await?;

    Ok(Json(PicksResponse {
        data: Some(picks.into()),
    }))
}

// ============================================================================
// Rankings
// ============================================================================

macro_rules! match_ranking_handlers {
    ($get:ident, $put:ident, $kind:expr) => {
        pub async fn $get<R>(
            State(state): State<TriviaAppState<R>>,
            user: CurrentUser,
        ) -> TriviaResult<Json<ListResponse<RankedMatchBody>>>
        where
            R: CatalogRepository + RankingsRepository + Clone + Send + Sync + 'static,
        {
            let use_case = GetRankingsUseCase::new(state.repo.clone());
            let data = use_case.match_ranking(&user.id, $kind).await?;
            Ok(Json(ListResponse {
                data: data.into_iter().map(Into::into).collect(),
            }))
        }

        pub async fn $put<R>(
            State(state): State<TriviaAppState<R>>,
            user: CurrentUser,
            ValidJson(req): ValidJson<MatchIdsRequest>,
        ) -> TriviaResult<Json<ListResponse<RankedMatchBody>>>
        where
            R: CatalogRepository + RankingsRepository + Clone + Send + Sync + 'static,
        {
            let use_case = SetMatchRankingUseCase::new(state.repo.clone(), state.repo.clone());
            let ids = req.match_ids.into_iter().map(Id::from_uuid).collect();
            let data = use_case.execute(&user.id, $kind, ids).await?;
            Ok(Json(ListResponse {
                data: data.into_iter().map(Into::into).collect(),
            }))
        }
    };
}

match_ranking_handlers!(get_best_of5_ranking, put_best_of5_ranking, MatchRankingKind::BestOfFive);
match_ranking_handlers!(get_best_of3_ranking, put_best_of3_ranking, MatchRankingKind::BestOfThree);
match_ranking_handlers!(
    get_grand_slam_finals_ranking,
    put_grand_slam_finals_ranking,
    MatchRankingKind::GrandSlamFinals
);

/// GET /api/v1/me/rankings/players
pub async fn get_players_ranking<R>(
    State(state): State<TriviaAppState<R>>,
    user: CurrentUser,
) -> TriviaResult<Json<ListResponse<RankedPlayerBody>>>
where
    R: CatalogRepository + RankingsRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetRankingsUseCase::new(state.repo.clone());
    let data = use_case.player_ranking(&user.id).await?;
    Ok(Json(ListResponse {
        data: data.into_iter().map(Into::into).collect(),
    }))
}

/// PUT /api/v1/me/rankings/players
pub async fn put_players_ranking<R>(
    State(state): State<TriviaAppState<R>>,
    user: CurrentUser,
    ValidJson(req): ValidJson<PlayerIdsRequest>,
) -> TriviaResult<Json<ListResponse<RankedPlayerBody>>>
where
    R: CatalogRepository + RankingsRepository + Clone + Send + Sync + 'static,
{
    let use_case = SetPlayerRankingUseCase::new(state.repo.clone(), state.repo.clone());
    let ids = req.player_ids.into_iter().map(Id::from_uuid).collect();
    let data = use_case.execute(&user.id, ids).await?;
    Ok(Json(ListResponse {
        data: data.into_iter().map(Into::into).collect(),
    }))
}
