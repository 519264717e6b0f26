//! Rankings Use Cases
//!
//! Validation happens entirely before the write: count bound, explicit
//! duplicate check, then existence + eligibility for every id. Only a fully
//! valid list reaches the repository's transactional replace.

use std::collections::HashSet;
use std::sync::Arc;

use kernel::id::{MatchId, PlayerId, UserId};

use crate::domain::entities::{RankedMatch, RankedPlayer};
use crate::domain::repository::{CatalogRepository, RankingsRepository};
use crate::domain::services::{
    duplicate_ids, is_best_of_five, is_best_of_three_mens_singles, is_grand_slam_final,
    missing_ids,
};
use crate::domain::value_objects::{MAX_PLAYER_RANKING_ENTRIES, MatchRankingKind};
use crate::error::{TriviaError, TriviaResult};

fn join_ids<T: ToString>(ids: &[T]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Ranking read use case
pub struct GetRankingsUseCase<R>
where
    R: RankingsRepository,
{
    rankings: Arc<R>,
}

impl<R> GetRankingsUseCase<R>
where
    R: RankingsRepository,
{
    pub fn new(rankings: Arc<R>) -> Self {
        Self { rankings }
    }

    pub async fn match_ranking(
        &self,
        user_id: &UserId,
        kind: MatchRankingKind,
    ) -> TriviaResult<Vec<RankedMatch>> {
        self.rankings.match_ranking(user_id, kind).await
    }

    pub async fn player_ranking(&self, user_id: &UserId) -> TriviaResult<Vec<RankedPlayer>> {
        self.rankings.player_ranking(user_id).await
    }
}

/// Match-ranking replace use case (best-of-5, best-of-3, Grand Slam finals)
pub struct SetMatchRankingUseCase<C, R>
where
    C: CatalogRepository,
    R: RankingsRepository,
{
    catalog: Arc<C>,
    rankings: Arc<R>,
}

impl<C, R> SetMatchRankingUseCase<C, R>
where
    C: CatalogRepository,
    R: RankingsRepository,
{
    pub fn new(catalog: Arc<C>, rankings: Arc<R>) -> Self {
        Self { catalog, rankings }
    }

    pub async fn execute(
        &self,
        user_id: &UserId,
        kind: MatchRankingKind,
        match_ids: Vec<MatchId>,
    ) -> TriviaResult<Vec<RankedMatch>> {
        if match_ids.len() > kind.max_entries() {
            return Err(TriviaError::TooManyEntries {
                max: kind.max_entries(),
                noun: kind.noun(),
            });
        }

        if !duplicate_ids(&match_ids).is_empty() {
            return Err(TriviaError::DuplicateIds { noun: "match" });
        }

        let found = self.catalog.find_matches_with_tournaments(&match_ids).await?;

        let eligible: HashSet<MatchId> = found
            .iter()
            .filter(|(record, tournament)| match kind {
                MatchRankingKind::BestOfFive => is_best_of_five(record),
                MatchRankingKind::BestOfThree => is_best_of_three_mens_singles(record),
                MatchRankingKind::GrandSlamFinals => is_grand_slam_final(record, tournament),
            })
            .map(|(record, _)| record.id)
            .collect();

        let missing = missing_ids(&match_ids, &eligible);
        if !missing.is_empty() {
            return Err(TriviaError::InvalidMatchIds {
                label: kind.label(),
                ids: join_ids(&missing),
            });
        }

        self.rankings
            .replace_match_ranking(user_id, kind, &match_ids)
            .await?;

        tracing::debug!(
            user_id = %user_id,
            entries = match_ids.len(),
            label = kind.label(),
            "Match ranking replaced"
        );

        self.rankings.match_ranking(user_id, kind).await
    }
}

/// Player-ranking replace use case
pub struct SetPlayerRankingUseCase<C, R>
where
    C: CatalogRepository,
    R: RankingsRepository,
{
    catalog: Arc<C>,
    rankings: Arc<R>,
}

impl<C, R> SetPlayerRankingUseCase<C, R>
where
    C: CatalogRepository,
    R: RankingsRepository,
{
    pub fn new(catalog: Arc<C>, rankings: Arc<R>) -> Self {
        Self { catalog, rankings }
    }

    pub async fn execute(
        &self,
        user_id: &UserId,
        player_ids: Vec<PlayerId>,
    ) -> TriviaResult<Vec<RankedPlayer>> {
        if player_ids.len() > MAX_PLAYER_RANKING_ENTRIES {
            return Err(TriviaError::TooManyEntries {
                max: MAX_PLAYER_RANKING_ENTRIES,
                noun: "players",
            });
        }

        if !duplicate_ids(&player_ids).is_empty() {
            return Err(TriviaError::DuplicateIds { noun: "player" });
        }

        let found = self.catalog.find_players_by_ids(&player_ids).await?;
        let existing: HashSet<PlayerId> = found.iter().map(|p| p.id).collect();

        let missing = missing_ids(&player_ids, &existing);
        if !missing.is_empty() {
            return Err(TriviaError::InvalidPlayerIds {
                ids: join_ids(&missing),
            });
        }

        self.rankings
            .replace_player_ranking(user_id, &player_ids)
            .await?;

        tracing::debug!(
            user_id = %user_id,
            entries = player_ids.len(),
            "Player ranking replaced"
        );

        self.rankings.player_ranking(user_id).await
    }
}
