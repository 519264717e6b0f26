//! Use-case tests for picks and rankings
//!
//! Run against an in-memory repository over a small fixture catalog, so the
//! validation rules and replace/patch semantics are exercised without a
//! database.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use kernel::id::{Id, MatchId, PlayerId, TournamentId, UserId};
use kernel::page::PageParams;
use kernel::patch::Patch;
use uuid::Uuid;

use crate::application::picks::{GetPicksUseCase, PicksInput, SetPicksUseCase};
use crate::application::rankings::{
    GetRankingsUseCase, SetMatchRankingUseCase, SetPlayerRankingUseCase,
};
use crate::domain::entities::{
    Match, MatchDetail, PicksDetail, Player, RankedMatch, RankedPlayer, Tournament, UserPicks,
};
use crate::domain::repository::{CatalogRepository, PicksRepository, RankingsRepository};
use crate::domain::services::MEN_SINGLES;
use crate::domain::value_objects::{
    MatchFilter, MatchRankingKind, PicksUpdate, TournamentFilter,
};
use crate::error::{TriviaError, TriviaResult};

// ============================================================================
// In-memory repository over a fixture catalog
// ============================================================================

#[derive(Clone, Default)]
struct MemTrivia {
    tournaments: Arc<Mutex<Vec<Tournament>>>,
    players: Arc<Mutex<Vec<Player>>>,
    matches: Arc<Mutex<Vec<Match>>>,
    picks: Arc<Mutex<HashMap<UserId, UserPicks>>>,
    match_rankings: Arc<Mutex<HashMap<(UserId, MatchRankingKind), Vec<MatchId>>>>,
    player_rankings: Arc<Mutex<HashMap<UserId, Vec<PlayerId>>>>,
}

impl MemTrivia {
    fn tournament(&self, id: TournamentId) -> Tournament {
        self.tournaments
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .unwrap()
    }

    fn player(&self, id: PlayerId) -> Option<Player> {
        self.players
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    fn detail(&self, record: Match) -> MatchDetail {
        let tournament = self.tournament(record.tournament_id);
        let player1 = self.player(record.player1_id).unwrap();
        let player2 = self.player(record.player2_id).unwrap();
        MatchDetail {
            record,
            tournament,
            player1,
            player2,
        }
    }
}

impl CatalogRepository for MemTrivia {
    async fn list_tournaments(
        &self,
        filter: &TournamentFilter,
        _page: PageParams,
    ) -> TriviaResult<Vec<Tournament>> {
        Ok(self
            .tournaments
            .lock()
            .unwrap()
            .iter()
            .filter(|t| filter.is_grand_slam.is_none_or(|f| t.is_grand_slam == f))
            .cloned()
            .collect())
    }

    async fn find_tournament(&self, id: &TournamentId) -> TriviaResult<Option<Tournament>> {
        Ok(self
            .tournaments
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == *id)
            .cloned())
    }

    async fn list_players(
        &self,
        _search: Option<&str>,
        _page: PageParams,
    ) -> TriviaResult<Vec<Player>> {
        Ok(self.players.lock().unwrap().clone())
    }

    async fn find_player(&self, id: &PlayerId) -> TriviaResult<Option<Player>> {
        Ok(self.player(*id))
    }

    async fn find_player_by_slug(&self, slug: &str) -> TriviaResult<Option<Player>> {
        Ok(self
            .players
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.slug == slug)
            .cloned())
    }

    async fn list_matches(
        &self,
        _filter: &MatchFilter,
        _page: PageParams,
    ) -> TriviaResult<Vec<MatchDetail>> {
        let matches = self.matches.lock().unwrap().clone();
        Ok(matches.into_iter().map(|m| self.detail(m)).collect())
    }

    async fn find_match(&self, id: &MatchId) -> TriviaResult<Option<Match>> {
        Ok(self
            .matches
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id == *id)
            .cloned())
    }

    async fn find_match_detail(&self, id: &MatchId) -> TriviaResult<Option<MatchDetail>> {
        Ok(self.find_match(id).await?.map(|m| self.detail(m)))
    }

    async fn find_match_with_tournament(
        &self,
        id: &MatchId,
    ) -> TriviaResult<Option<(Match, Tournament)>> {
        Ok(self
            .find_match(id)
            .await?
            .map(|m| (m.clone(), self.tournament(m.tournament_id))))
    }

    async fn matches_by_player(&self, player_id: &PlayerId) -> TriviaResult<Vec<MatchDetail>> {
        let matches: Vec<Match> = self
            .matches
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.player1_id == *player_id || m.player2_id == *player_id)
            .cloned()
            .collect();
        Ok(matches.into_iter().map(|m| self.detail(m)).collect())
    }

    async fn find_matches_with_tournaments(
        &self,
        ids: &[MatchId],
    ) -> TriviaResult<Vec<(Match, Tournament)>> {
        let matches = self.matches.lock().unwrap().clone();
        Ok(matches
            .into_iter()
            .filter(|m| ids.contains(&m.id))
            .map(|m| {
                let t = self.tournament(m.tournament_id);
                (m, t)
            })
            .collect())
    }

    async fn find_players_by_ids(&self, ids: &[PlayerId]) -> TriviaResult<Vec<Player>> {
        Ok(self
            .players
            .lock()
            .unwrap()
            .iter()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect())
    }
}

impl PicksRepository for MemTrivia {
    async fn find_picks(&self, user_id: &UserId) -> TriviaResult<Option<UserPicks>> {
        Ok(self.picks.lock().unwrap().get(user_id).cloned())
    }

    async fn find_picks_detail(&self, user_id: &UserId) -> TriviaResult<Option<PicksDetail>> {
        let Some(picks) = self.find_picks(user_id).await? else {
            return Ok(None);
        };

        let expand = |id: Option<MatchId>| -> Option<MatchDetail> {
            id.and_then(|id| {
                self.matches
                    .lock()
                    .unwrap()
                    .iter()
                    .find(|m| m.id == id)
                    .cloned()
            })
            .map(|m| self.detail(m))
        };

        Ok(Some(PicksDetail {
            user_id: picks.user_id,
            favorite_player: picks.favorite_player_id.and_then(|id| self.player(id)),
            favorite_best_of5_match: expand(picks.favorite_best_of5_match_id),
            favorite_best_of3_match: expand(picks.favorite_best_of3_match_id),
            best_grand_slam_final: expand(picks.best_grand_slam_final_match_id),
            created_at: picks.created_at,
            updated_at: picks.updated_at,
        }))
    }

    async fn apply_picks_update(
        &self,
        user_id: &UserId,
        update: &PicksUpdate,
    ) -> TriviaResult<()> {
        let mut picks = self.picks.lock().unwrap();
        let now = Utc::now();
        let entry = picks.entry(*user_id).or_insert_with(|| UserPicks {
            user_id: *user_id,
            favorite_player_id: None,
            favorite_best_of5_match_id: None,
            favorite_best_of3_match_id: None,
            best_grand_slam_final_match_id: None,
            created_at: now,
            updated_at: now,
        });

        entry.favorite_player_id = update.favorite_player_id.apply(entry.favorite_player_id);
        entry.favorite_best_of5_match_id = update
            .favorite_best_of5_match_id
            .apply(entry.favorite_best_of5_match_id);
        entry.favorite_best_of3_match_id = update
            .favorite_best_of3_match_id
            .apply(entry.favorite_best_of3_match_id);
        entry.best_grand_slam_final_match_id = update
            .best_grand_slam_final_match_id
            .apply(entry.best_grand_slam_final_match_id);
        entry.updated_at = now;

        Ok(())
    }
}

impl RankingsRepository for MemTrivia {
    async fn match_ranking(
        &self,
        user_id: &UserId,
        kind: MatchRankingKind,
    ) -> TriviaResult<Vec<RankedMatch>> {
        let ids = self
            .match_rankings
            .lock()
            .unwrap()
            .get(&(*user_id, kind))
            .cloned()
            .unwrap_or_default();

        Ok(ids
            .into_iter()
            .enumerate()
            .map(|(i, id)| {
                let record = self
                    .matches
                    .lock()
                    .unwrap()
                    .iter()
                    .find(|m| m.id == id)
                    .cloned()
                    .unwrap();
                RankedMatch {
                    position: (i + 1) as i32,
                    record: self.detail(record),
                }
            })
            .collect())
    }

    async fn replace_match_ranking(
        &self,
        user_id: &UserId,
        kind: MatchRankingKind,
        match_ids: &[MatchId],
    ) -> TriviaResult<()> {
        self.match_rankings
            .lock()
            .unwrap()
            .insert((*user_id, kind), match_ids.to_vec());
        Ok(())
    }

    async fn player_ranking(&self, user_id: &UserId) -> TriviaResult<Vec<RankedPlayer>> {
        let ids = self
            .player_rankings
            .lock()
            .unwrap()
            .get(user_id)
            .cloned()
            .unwrap_or_default();

        Ok(ids
            .into_iter()
            .enumerate()
            .map(|(i, id)| RankedPlayer {
                position: (i + 1) as i32,
                player: self.player(id).unwrap(),
            })
            .collect())
    }

    async fn replace_player_ranking(
        &self,
        user_id: &UserId,
        player_ids: &[PlayerId],
    ) -> TriviaResult<()> {
        self.player_rankings
            .lock()
            .unwrap()
            .insert(*user_id, player_ids.to_vec());
        Ok(())
    }
}

// ============================================================================
// Fixture
// ============================================================================

struct Fixture {
    repo: Arc<MemTrivia>,
    user: UserId,
    players: Vec<PlayerId>,
    /// best-of-5 Grand Slam final (men's singles)
    bo5_slam_final: MatchId,
    /// best-of-5 non-final at a Grand Slam
    bo5_semifinal: MatchId,
    /// best-of-3 men's singles at a regular tournament
    bo3_mens: MatchId,
    /// best-of-3 women's singles
    bo3_womens: MatchId,
    /// final at a regular (non-slam) tournament
    regular_final: MatchId,
}

impl Fixture {
    fn new() -> Self {
        let now = Utc::now();
        let repo = MemTrivia::default();

        let slam = Tournament {
            id: Id::new(),
            name: "Wimbledon".to_string(),
            slug: "wimbledon".to_string(),
            is_grand_slam: true,
            created_at: now,
            updated_at: now,
        };
        let regular = Tournament {
            id: Id::new(),
            name: "Basel".to_string(),
            slug: "basel".to_string(),
            is_grand_slam: false,
            created_at: now,
            updated_at: now,
        };

        let players: Vec<Player> = [
            ("Novak Djokovic", "novak-djokovic", "SRB"),
            ("Roger Federer", "roger-federer", "SUI"),
            ("Iga Swiatek", "iga-swiatek", "POL"),
        ]
        .into_iter()
        .map(|(name, slug, cc)| Player {
            id: Id::new(),
            name: name.to_string(),
            slug: slug.to_string(),
            country_code: cc.to_string(),
            created_at: now,
            updated_at: now,
        })
        .collect();

        let make_match = |tournament: &Tournament,
                          best_of: i16,
                          category: &str,
                          is_final: bool,
                          p1: &Player,
                          p2: &Player| Match {
            id: Id::new(),
            tournament_id: tournament.id,
            year: 2019,
            round: if is_final { "Final" } else { "Semifinal" }.to_string(),
            is_final,
            best_of,
            category: category.to_string(),
            player1_id: p1.id,
            player2_id: p2.id,
            score: "7-6(5) 1-6 7-6(4) 4-6 13-12(3)".to_string(),
            title: "Fixture match".to_string(),
            created_at: now,
            updated_at: now,
        };

        let bo5_slam_final = make_match(&slam, 5, MEN_SINGLES, true, &players[0], &players[1]);
        let bo5_semifinal = make_match(&slam, 5, MEN_SINGLES, false, &players[0], &players[1]);
        let bo3_mens = make_match(&regular, 3, MEN_SINGLES, false, &players[0], &players[1]);
        let bo3_womens = make_match(&regular, 3, "women_singles", false, &players[2], &players[2]);
        let regular_final = make_match(&regular, 3, MEN_SINGLES, true, &players[0], &players[1]);

        let fixture = Self {
            user: Id::new(),
            players: players.iter().map(|p| p.id).collect(),
            bo5_slam_final: bo5_slam_final.id,
            bo5_semifinal: bo5_semifinal.id,
            bo3_mens: bo3_mens.id,
            bo3_womens: bo3_womens.id,
            regular_final: regular_final.id,
            repo: Arc::new(repo),
        };

        *fixture.repo.tournaments.lock().unwrap() = vec![slam, regular];
        *fixture.repo.players.lock().unwrap() = players;
        *fixture.repo.matches.lock().unwrap() = vec![
            bo5_slam_final,
            bo5_semifinal,
            bo3_mens,
            bo3_womens,
            regular_final,
        ];

        fixture
    }

    fn set_match_ranking(&self) -> SetMatchRankingUseCase<MemTrivia, MemTrivia> {
        SetMatchRankingUseCase::new(self.repo.clone(), self.repo.clone())
    }

    fn set_player_ranking(&self) -> SetPlayerRankingUseCase<MemTrivia, MemTrivia> {
        SetPlayerRankingUseCase::new(self.repo.clone(), self.repo.clone())
    }

    fn get_rankings(&self) -> GetRankingsUseCase<MemTrivia> {
        GetRankingsUseCase::new(self.repo.clone())
    }

    fn set_picks(&self) -> SetPicksUseCase<MemTrivia, MemTrivia> {
        SetPicksUseCase::new(self.repo.clone(), self.repo.clone())
    }

    fn get_picks(&self) -> GetPicksUseCase<MemTrivia> {
        GetPicksUseCase::new(self.repo.clone())
    }
}

// ============================================================================
// Rankings
// ============================================================================

#[tokio::test]
async fn ranking_set_then_get_preserves_order() {
    let fx = Fixture::new();

    let result = fx
        .set_match_ranking()
        .execute(
            &fx.user,
            MatchRankingKind::BestOfFive,
            vec![fx.bo5_semifinal, fx.bo5_slam_final],
        )
        .await
        .unwrap();

    let positions: Vec<(i32, MatchId)> =
        result.iter().map(|r| (r.position, r.record.record.id)).collect();
    assert_eq!(
        positions,
        vec![(1, fx.bo5_semifinal), (2, fx.bo5_slam_final)]
    );

    // Re-applying the same list is idempotent
    let again = fx
        .set_match_ranking()
        .execute(
            &fx.user,
            MatchRankingKind::BestOfFive,
            vec![fx.bo5_semifinal, fx.bo5_slam_final],
        )
        .await
        .unwrap();
    assert_eq!(again.len(), 2);

    // An empty list clears everything
    let cleared = fx
        .set_match_ranking()
        .execute(&fx.user, MatchRankingKind::BestOfFive, vec![])
        .await
        .unwrap();
    assert!(cleared.is_empty());
}

#[tokio::test]
async fn ranking_rejects_duplicates_and_keeps_prior_state() {
    let fx = Fixture::new();

    fx.set_match_ranking()
        .execute(
            &fx.user,
            MatchRankingKind::BestOfFive,
            vec![fx.bo5_slam_final],
        )
        .await
        .unwrap();

    let err = fx
        .set_match_ranking()
        .execute(
            &fx.user,
            MatchRankingKind::BestOfFive,
            vec![fx.bo5_semifinal, fx.bo5_semifinal],
        )
        .await
        .unwrap_err();
    assert!(matches!(err, TriviaError::DuplicateIds { .. }));

    // Prior state untouched
    let current = fx
        .get_rankings()
        .match_ranking(&fx.user, MatchRankingKind::BestOfFive)
        .await
        .unwrap();
    assert_eq!(current.len(), 1);
    assert_eq!(current[0].record.record.id, fx.bo5_slam_final);
}

#[tokio::test]
async fn ranking_rejects_ineligible_ids_by_name() {
    let fx = Fixture::new();

    // A best-of-3 match in the best-of-5 list
    let err = fx
        .set_match_ranking()
        .execute(
            &fx.user,
            MatchRankingKind::BestOfFive,
            vec![fx.bo5_slam_final, fx.bo3_mens],
        )
        .await
        .unwrap_err();
    match err {
        TriviaError::InvalidMatchIds { label, ids } => {
            assert_eq!(label, "best-of-5");
            assert!(ids.contains(&fx.bo3_mens.to_string()));
            assert!(!ids.contains(&fx.bo5_slam_final.to_string()));
        }
        other => panic!("expected InvalidMatchIds, got {other:?}"),
    }

    // Women's singles in the best-of-3 (men's singles) list
    let err = fx
        .set_match_ranking()
        .execute(&fx.user, MatchRankingKind::BestOfThree, vec![fx.bo3_womens])
        .await
        .unwrap_err();
    assert!(matches!(err, TriviaError::InvalidMatchIds { .. }));

    // A final at a non-slam in the Grand Slam finals list
    let err = fx
        .set_match_ranking()
        .execute(
            &fx.user,
            MatchRankingKind::GrandSlamFinals,
            vec![fx.regular_final],
        )
        .await
        .unwrap_err();
    assert!(matches!(err, TriviaError::InvalidMatchIds { .. }));

    // A nonexistent id
    let ghost: MatchId = Id::from_uuid(Uuid::new_v4());
    let err = fx
        .set_match_ranking()
        .execute(&fx.user, MatchRankingKind::BestOfFive, vec![ghost])
        .await
        .unwrap_err();
    assert!(matches!(err, TriviaError::InvalidMatchIds { .. }));
}

#[tokio::test]
async fn ranking_enforces_count_bounds() {
    let fx = Fixture::new();

    let eleven: Vec<MatchId> = (0..11).map(|_| Id::from_uuid(Uuid::new_v4())).collect();
    let err = fx
        .set_match_ranking()
        .execute(&fx.user, MatchRankingKind::BestOfFive, eleven)
        .await
        .unwrap_err();
    assert!(matches!(err, TriviaError::TooManyEntries { max: 10, .. }));

    let six: Vec<MatchId> = (0..6).map(|_| Id::from_uuid(Uuid::new_v4())).collect();
    let err = fx
        .set_match_ranking()
        .execute(&fx.user, MatchRankingKind::GrandSlamFinals, six)
        .await
        .unwrap_err();
    assert!(matches!(err, TriviaError::TooManyEntries { max: 5, .. }));
}

#[tokio::test]
async fn grand_slam_final_ranking_accepts_eligible_match() {
    let fx = Fixture::new();

    let result = fx
        .set_match_ranking()
        .execute(
            &fx.user,
            MatchRankingKind::GrandSlamFinals,
            vec![fx.bo5_slam_final],
        )
        .await
        .unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].position, 1);
}

#[tokio::test]
async fn player_ranking_roundtrip_and_validation() {
    let fx = Fixture::new();

    let result = fx
        .set_player_ranking()
        .execute(&fx.user, vec![fx.players[1], fx.players[0]])
        .await
        .unwrap();
    assert_eq!(result[0].position, 1);
    assert_eq!(result[0].player.id, fx.players[1]);
    assert_eq!(result[1].player.id, fx.players[0]);

    let ghost: PlayerId = Id::from_uuid(Uuid::new_v4());
    let err = fx
        .set_player_ranking()
        .execute(&fx.user, vec![fx.players[0], ghost])
        .await
        .unwrap_err();
    match err {
        TriviaError::InvalidPlayerIds { ids } => {
            assert!(ids.contains(&ghost.to_string()));
        }
        other => panic!("expected InvalidPlayerIds, got {other:?}"),
    }

    let err = fx
        .set_player_ranking()
        .execute(&fx.user, vec![fx.players[0], fx.players[0]])
        .await
        .unwrap_err();
    assert!(matches!(err, TriviaError::DuplicateIds { noun: "player" }));
}

// ============================================================================
// Picks
// ============================================================================

#[tokio::test]
async fn picks_read_before_first_write_is_none() {
    let fx = Fixture::new();
    assert!(fx.get_picks().execute(&fx.user).await.unwrap().is_none());
}

#[tokio::test]
async fn picks_slot_rules_are_enforced() {
    let fx = Fixture::new();

    // A best-of-5 match in the best-of-3 slot
    let err = fx
        .set_picks()
        .execute(
            &fx.user,
            PicksInput {
                favorite_best_of3_match_id: Patch::Value(fx.bo5_slam_final.into_uuid()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, TriviaError::InvalidPick(_)));
    assert!(err.to_string().contains("favoriteBestOf3MatchId"));

    // Nothing was written
    assert!(fx.get_picks().execute(&fx.user).await.unwrap().is_none());

    // A valid best-of-3 men's singles match succeeds and is retrievable
    let picks = fx
        .set_picks()
        .execute(
            &fx.user,
            PicksInput {
                favorite_best_of3_match_id: Patch::Value(fx.bo3_mens.into_uuid()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(
        picks.favorite_best_of3_match.unwrap().record.id,
        fx.bo3_mens
    );

    // Non-final in the Grand Slam final slot
    let err = fx
        .set_picks()
        .execute(
            &fx.user,
            PicksInput {
                best_grand_slam_final_match_id: Patch::Value(fx.bo5_semifinal.into_uuid()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, TriviaError::InvalidPick(_)));

    // Unknown player id
    let err = fx
        .set_picks()
        .execute(
            &fx.user,
            PicksInput {
                favorite_player_id: Patch::Value(Uuid::new_v4()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, TriviaError::InvalidPick(_)));
}

#[tokio::test]
async fn picks_patch_distinguishes_absent_and_null() {
    let fx = Fixture::new();

    // Seed two slots
    fx.set_picks()
        .execute(
            &fx.user,
            PicksInput {
                favorite_player_id: Patch::Value(fx.players[0].into_uuid()),
                favorite_best_of5_match_id: Patch::Value(fx.bo5_slam_final.into_uuid()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    // Clear one slot; the absent slot must stay untouched
    let picks = fx
        .set_picks()
        .execute(
            &fx.user,
            PicksInput {
                favorite_best_of5_match_id: Patch::Null,
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(picks.favorite_best_of5_match.is_none());
    assert_eq!(picks.favorite_player.unwrap().id, fx.players[0]);
}
