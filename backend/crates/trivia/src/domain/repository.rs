//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{MatchId, PlayerId, TournamentId, UserId};
use kernel::page::PageParams;

use crate::domain::entities::{
    Match, MatchDetail, PicksDetail, Player, RankedMatch, RankedPlayer, Tournament, UserPicks,
};
use crate::domain::value_objects::{MatchFilter, MatchRankingKind, PicksUpdate, TournamentFilter};
use crate::error::TriviaResult;

/// Read-only catalog repository trait
#[trait_variant::make(CatalogRepository: Send)]
pub trait LocalCatalogRepository {
    /// List tournaments, name ascending
    async fn list_tournaments(
        &self,
        filter: &TournamentFilter,
        page: PageParams,
    ) -> TriviaResult<Vec<Tournament>>;

    /// Find tournament by ID
    async fn find_tournament(&self, id: &TournamentId) -> TriviaResult<Option<Tournament>>;

    /// List players, optionally filtered by a case-insensitive substring
    /// over name and slug, name ascending
    async fn list_players(
        &self,
        search: Option<&str>,
        page: PageParams,
    ) -> TriviaResult<Vec<Player>>;

    /// Find player by ID
    async fn find_player(&self, id: &PlayerId) -> TriviaResult<Option<Player>>;

    /// Find player by slug
    async fn find_player_by_slug(&self, slug: &str) -> TriviaResult<Option<Player>>;

    /// List matches with expanded references, year descending then newest
    async fn list_matches(
        &self,
        filter: &MatchFilter,
        page: PageParams,
    ) -> TriviaResult<Vec<MatchDetail>>;

    /// Find a bare match by ID
    async fn find_match(&self, id: &MatchId) -> TriviaResult<Option<Match>>;

    /// Find a match with expanded references
    async fn find_match_detail(&self, id: &MatchId) -> TriviaResult<Option<MatchDetail>>;

    /// Find a match together with its tournament (for the Grand Slam rule)
    async fn find_match_with_tournament(
        &self,
        id: &MatchId,
    ) -> TriviaResult<Option<(Match, Tournament)>>;

    /// All matches featuring the player on either side, year descending
    async fn matches_by_player(&self, player_id: &PlayerId) -> TriviaResult<Vec<MatchDetail>>;

    /// Bulk-load matches with their tournaments for ranking validation
    async fn find_matches_with_tournaments(
        &self,
        ids: &[MatchId],
    ) -> TriviaResult<Vec<(Match, Tournament)>>;

    /// Bulk-load players for ranking validation
    async fn find_players_by_ids(&self, ids: &[PlayerId]) -> TriviaResult<Vec<Player>>;
}

/// Picks repository trait
#[trait_variant::make(PicksRepository: Send)]
pub trait LocalPicksRepository {
    /// The user's picks row, if one exists (reads never create it)
    async fn find_picks(&self, user_id: &UserId) -> TriviaResult<Option<UserPicks>>;

    /// The user's picks with referenced entities expanded
    async fn find_picks_detail(&self, user_id: &UserId) -> TriviaResult<Option<PicksDetail>>;

    /// Merge the update into the row (create it if absent) in a single
    /// transaction; untouched slots keep their stored value
    async fn apply_picks_update(
        &self,
        user_id: &UserId,
        update: &PicksUpdate,
    ) -> TriviaResult<()>;
}

/// Rankings repository trait
#[trait_variant::make(RankingsRepository: Send)]
pub trait LocalRankingsRepository {
    /// The user's ranking for a match kind, position ascending
    async fn match_ranking(
        &self,
        user_id: &UserId,
        kind: MatchRankingKind,
    ) -> TriviaResult<Vec<RankedMatch>>;

    /// Replace the user's ranking for a match kind as one transaction:
    /// delete all prior rows, insert the new ones with 1-based positions.
    /// A partial write must never be observable.
    async fn replace_match_ranking(
        &self,
        user_id: &UserId,
        kind: MatchRankingKind,
        match_ids: &[MatchId],
    ) -> TriviaResult<()>;

    /// The user's player ranking, position ascending
    async fn player_ranking(&self, user_id: &UserId) -> TriviaResult<Vec<RankedPlayer>>;

    /// Replace the user's player ranking (same transactional contract)
    async fn replace_player_ranking(
        &self,
        user_id: &UserId,
        player_ids: &[PlayerId],
    ) -> TriviaResult<()>;
}
