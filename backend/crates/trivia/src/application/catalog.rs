//! Catalog Queries Use Case
//!
//! Read-only access to the reference data. Thin by design: filtering and
//! ordering live in the repository, the 404 decisions live here.

use std::sync::Arc;

use kernel::id::{MatchId, PlayerId, TournamentId};
use kernel::page::PageParams;

use crate::domain::entities::{MatchDetail, Player, Tournament};
use crate::domain::repository::CatalogRepository;
use crate::domain::value_objects::{MatchFilter, TournamentFilter};
use crate::error::{TriviaError, TriviaResult};

/// Catalog read use case
pub struct CatalogQueries<C>
where
    C: CatalogRepository,
{
    repo: Arc<C>,
}

impl<C> CatalogQueries<C>
where
    C: CatalogRepository,
{
    pub fn new(repo: Arc<C>) -> Self {
        Self { repo }
    }

    pub async fn list_tournaments(
        &self,
        filter: &TournamentFilter,
        page: PageParams,
    ) -> TriviaResult<Vec<Tournament>> {
        self.repo.list_tournaments(filter, page).await
    }

    pub async fn get_tournament(&self, id: &TournamentId) -> TriviaResult<Tournament> {
        self.repo
            .find_tournament(id)
            .await?
            .ok_or(TriviaError::TournamentNotFound)
    }

    pub async fn list_players(
        &self,
        search: Option<&str>,
        page: PageParams,
    ) -> TriviaResult<Vec<Player>> {
        // Blank search is no search
        let term = search.map(str::trim).filter(|t| !t.is_empty());
        self.repo.list_players(term, page).await
    }

    pub async fn get_player(&self, id: &PlayerId) -> TriviaResult<Player> {
        self.repo
            .find_player(id)
            .await?
            .ok_or(TriviaError::PlayerNotFound)
    }

    pub async fn list_matches(
        &self,
        filter: &MatchFilter,
        page: PageParams,
    ) -> TriviaResult<Vec<MatchDetail>> {
        if let Some(best_of) = filter.best_of {
            if best_of != 3 && best_of != 5 {
                return Err(TriviaError::InvalidBestOfFilter);
            }
        }
        self.repo.list_matches(filter, page).await
    }

    pub async fn get_match(&self, id: &MatchId) -> TriviaResult<MatchDetail> {
        self.repo
            .find_match_detail(id)
            .await?
            .ok_or(TriviaError::MatchNotFound)
    }

    /// All matches featuring the player; absence of any match is a 404
    pub async fn matches_by_player(&self, player_id: &PlayerId) -> TriviaResult<Vec<MatchDetail>> {
        let matches = self.repo.matches_by_player(player_id).await?;
        if matches.is_empty() {
            return Err(TriviaError::NoMatchesForPlayer);
        }
        Ok(matches)
    }

    /// Resolve the player by slug first (404 if unknown); an empty match
    /// list is fine here
    pub async fn matches_by_player_slug(&self, slug: &str) -> TriviaResult<Vec<MatchDetail>> {
        let player = self
            .repo
            .find_player_by_slug(slug)
            .await?
            .ok_or(TriviaError::PlayerNotFound)?;
        self.repo.matches_by_player(&player.id).await
    }
}
