//! PostgreSQL Repository Implementations
//!
//! Ranking replacement and the picks merge-upsert run inside transactions;
//! a concurrent reader never observes a half-replaced list.

use chrono::{DateTime, Utc};
use kernel::id::{Id, MatchId, PlayerId, TournamentId, UserId};
use kernel::page::PageParams;
use kernel::patch::Patch;
use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::domain::entities::{
    Match, MatchDetail, PicksDetail, Player, RankedMatch, RankedPlayer, Tournament, UserPicks,
};
use crate::domain::repository::{CatalogRepository, PicksRepository, RankingsRepository};
use crate::domain::value_objects::{MatchFilter, MatchRankingKind, PicksUpdate, TournamentFilter};
use crate::error::TriviaResult;

/// Aliased column list for a fully expanded match row
const MATCH_DETAIL_COLUMNS: &str = r#"
    m.id AS m_id, m.tournament_id AS m_tournament_id, m.year AS m_year,
    m.round AS m_round, m.is_final AS m_is_final, m.best_of AS m_best_of,
    m.category AS m_category, m.player1_id AS m_player1_id,
    m.player2_id AS m_player2_id, m.score AS m_score, m.title AS m_title,
    m.created_at AS m_created_at, m.updated_at AS m_updated_at,
    t.id AS t_id, t.name AS t_name, t.slug AS t_slug,
    t.is_grand_slam AS t_is_grand_slam,
    t.created_at AS t_created_at, t.updated_at AS t_updated_at,
    p1.id AS p1_id, p1.name AS p1_name, p1.slug AS p1_slug,
    p1.country_code AS p1_country_code,
    p1.created_at AS p1_created_at, p1.updated_at AS p1_updated_at,
    p2.id AS p2_id, p2.name AS p2_name, p2.slug AS p2_slug,
    p2.country_code AS p2_country_code,
    p2.created_at AS p2_created_at, p2.updated_at AS p2_updated_at
"#;

/// Joins matching [`MATCH_DETAIL_COLUMNS`]
const MATCH_DETAIL_JOINS: &str = r#"
FROM matches m
JOIN tournaments t ON t.id = m.tournament_id
JOIN players p1 ON p1.id = m.player1_id
JOIN players p2 ON p2.id = m.player2_id
"#;

/// Table backing each match-ranking kind
const fn ranking_table(kind: MatchRankingKind) -> &'static str {
    match kind {
        MatchRankingKind::BestOfFive => "user_top10_best_of5_matches",
        MatchRankingKind::BestOfThree => "user_top10_best_of3_matches",
        MatchRankingKind::GrandSlamFinals => "user_top5_grand_slam_finals",
    }
}

/// PostgreSQL-backed trivia repository
#[derive(Clone)]
pub struct PgTriviaRepository {
    pool: PgPool,
}

impl PgTriviaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_player(&self, id: Uuid) -> TriviaResult<Option<Player>> {
        let row = sqlx::query_as::<_, PlayerRow>(
            "SELECT id, name, slug, country_code, created_at, updated_at FROM players WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PlayerRow::into_player))
    }

    async fn load_match_detail(&self, id: Uuid) -> TriviaResult<Option<MatchDetail>> {
        let row = sqlx::query_as::<_, MatchDetailRow>(&format!(
            "SELECT {MATCH_DETAIL_COLUMNS} {MATCH_DETAIL_JOINS} WHERE m.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(MatchDetailRow::into_detail))
    }
}

// ============================================================================
// Catalog Repository Implementation
// ============================================================================

impl CatalogRepository for PgTriviaRepository {
    async fn list_tournaments(
        &self,
        filter: &TournamentFilter,
        page: PageParams,
    ) -> TriviaResult<Vec<Tournament>> {
        let mut qb = QueryBuilder::new(
            "SELECT id, name, slug, is_grand_slam, created_at, updated_at FROM tournaments",
        );
        if let Some(is_grand_slam) = filter.is_grand_slam {
            qb.push(" WHERE is_grand_slam = ");
            qb.push_bind(is_grand_slam);
        }
        qb.push(" ORDER BY name ASC LIMIT ");
        qb.push_bind(page.limit);
        qb.push(" OFFSET ");
        qb.push_bind(page.offset);

        let rows = qb
            .build_query_as::<TournamentRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(TournamentRow::into_tournament).collect())
    }

    async fn find_tournament(&self, id: &TournamentId) -> TriviaResult<Option<Tournament>> {
        let row = sqlx::query_as::<_, TournamentRow>(
            "SELECT id, name, slug, is_grand_slam, created_at, updated_at FROM tournaments WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TournamentRow::into_tournament))
    }

    async fn list_players(
        &self,
        search: Option<&str>,
        page: PageParams,
    ) -> TriviaResult<Vec<Player>> {
        let mut qb = QueryBuilder::new(
            "SELECT id, name, slug, country_code, created_at, updated_at FROM players",
        );
        if let Some(term) = search {
            let pattern = format!("%{}%", term);
            qb.push(" WHERE (name ILIKE ");
            qb.push_bind(pattern.clone());
            qb.push(" OR slug ILIKE ");
            qb.push_bind(pattern);
            qb.push(")");
        }
        qb.push(" ORDER BY name ASC LIMIT ");
        qb.push_bind(page.limit);
        qb.push(" OFFSET ");
        qb.push_bind(page.offset);

        let rows = qb
            .build_query_as::<PlayerRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(PlayerRow::into_player).collect())
    }

    async fn find_player(&self, id: &PlayerId) -> TriviaResult<Option<Player>> {
        self.load_player(*id.as_uuid()).await
    }

    async fn find_player_by_slug(&self, slug: &str) -> TriviaResult<Option<Player>> {
        let row = sqlx::query_as::<_, PlayerRow>(
            "SELECT id, name, slug, country_code, created_at, updated_at FROM players WHERE slug = $1",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PlayerRow::into_player))
    }

    async fn list_matches(
        &self,
        filter: &MatchFilter,
        page: PageParams,
    ) -> TriviaResult<Vec<MatchDetail>> {
        let mut qb = QueryBuilder::new(format!(
            "SELECT {MATCH_DETAIL_COLUMNS} {MATCH_DETAIL_JOINS} WHERE TRUE"
        ));
        if let Some(tournament_id) = &filter.tournament_id {
            qb.push(" AND m.tournament_id = ");
            qb.push_bind(*tournament_id.as_uuid());
        }
        if let Some(year) = filter.year {
            qb.push(" AND m.year = ");
            qb.push_bind(year);
        }
        if let Some(best_of) = filter.best_of {
            qb.push(" AND m.best_of = ");
            qb.push_bind(best_of);
        }
        if let Some(is_final) = filter.is_final {
            qb.push(" AND m.is_final = ");
            qb.push_bind(is_final);
        }
        if let Some(category) = &filter.category {
            qb.push(" AND m.category = ");
            qb.push_bind(category.clone());
        }
        qb.push(" ORDER BY m.year DESC, m.created_at DESC LIMIT ");
        qb.push_bind(page.limit);
        qb.push(" OFFSET ");
        qb.push_bind(page.offset);

        let rows = qb
            .build_query_as::<MatchDetailRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(MatchDetailRow::into_detail).collect())
    }

    async fn find_match(&self, id: &MatchId) -> TriviaResult<Option<Match>> {
        let row = sqlx::query_as::<_, MatchRow>(
            r#"
            SELECT id, tournament_id, year, round, is_final, best_of, category,
                   player1_id, player2_id, score, title, created_at, updated_at
            FROM matches
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(MatchRow::into_match))
    }

    async fn find_match_detail(&self, id: &MatchId) -> TriviaResult<Option<MatchDetail>> {
        self.load_match_detail(*id.as_uuid()).await
    }

    async fn find_match_with_tournament(
        &self,
        id: &MatchId,
    ) -> TriviaResult<Option<(Match, Tournament)>> {
        let row = sqlx::query_as::<_, MatchWithTournamentRow>(&format!(
            "{MATCH_WITH_TOURNAMENT_SELECT} WHERE m.id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(MatchWithTournamentRow::into_pair))
    }

    async fn matches_by_player(&self, player_id: &PlayerId) -> TriviaResult<Vec<MatchDetail>> {
        let rows = sqlx::query_as::<_, MatchDetailRow>(&format!(
            r#"SELECT {MATCH_DETAIL_COLUMNS} {MATCH_DETAIL_JOINS}
            WHERE m.player1_id = $1 OR m.player2_id = $1
            ORDER BY m.year DESC, m.created_at DESC
            "#
        ))
        .bind(player_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(MatchDetailRow::into_detail).collect())
    }

    async fn find_matches_with_tournaments(
        &self,
        ids: &[MatchId],
    ) -> TriviaResult<Vec<(Match, Tournament)>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let uuids: Vec<Uuid> = ids.iter().map(|id| *id.as_uuid()).collect();
        let rows = sqlx::query_as::<_, MatchWithTournamentRow>(&format!(
            "{MATCH_WITH_TOURNAMENT_SELECT} WHERE m.id = ANY($1)"
        ))
        .bind(&uuids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(MatchWithTournamentRow::into_pair).collect())
    }

    async fn find_players_by_ids(&self, ids: &[PlayerId]) -> TriviaResult<Vec<Player>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let uuids: Vec<Uuid> = ids.iter().map(|id| *id.as_uuid()).collect();
        let rows = sqlx::query_as::<_, PlayerRow>(
            "SELECT id, name, slug, country_code, created_at, updated_at FROM players WHERE id = ANY($1)",
        )
        .bind(&uuids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PlayerRow::into_player).collect())
    }
}

// ============================================================================
// Picks Repository Implementation
// ============================================================================

impl PicksRepository for PgTriviaRepository {
    async fn find_picks(&self, user_id: &UserId) -> TriviaResult<Option<UserPicks>> {
        let row = sqlx::query_as::<_, UserPicksRow>(
            r#"
            SELECT user_id, favorite_player_id, favorite_best_of5_match_id,
                   favorite_best_of3_match_id, best_grand_slam_final_match_id,
                   created_at, updated_at
            FROM user_picks
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserPicksRow::into_picks))
    }

    async fn find_picks_detail(&self, user_id: &UserId) -> TriviaResult<Option<PicksDetail>> {
        let Some(picks) = self.find_picks(user_id).await? else {
            return Ok(None);
        };

        // Stale references (entity deleted after the pick was made) expand
        // to null rather than failing the read.
        let favorite_player = match picks.favorite_player_id {
            Some(id) => self.load_player(id.into_uuid()).await?,
            None => None,
        };
        let favorite_best_of5_match = match picks.favorite_best_of5_match_id {
            Some(id) => self.load_match_detail(id.into_uuid()).await?,
            None => None,
        };
        let favorite_best_of3_match = match picks.favorite_best_of3_match_id {
            Some(id) => self.load_match_detail(id.into_uuid()).await?,
            None => None,
        };
        let best_grand_slam_final = match picks.best_grand_slam_final_match_id {
            Some(id) => self.load_match_detail(id.into_uuid()).await?,
            None => None,
        };

        Ok(Some(PicksDetail {
            user_id: picks.user_id,
            favorite_player,
            favorite_best_of5_match,
            favorite_best_of3_match,
            best_grand_slam_final,
            created_at: picks.created_at,
            updated_at: picks.updated_at,
        }))
    }

    async fn apply_picks_update(
        &self,
        user_id: &UserId,
        update: &PicksUpdate,
    ) -> TriviaResult<()> {
        let mut tx = self.pool.begin().await?;
        let now = Utc::now();

        let current = sqlx::query_as::<_, UserPicksRow>(
            r#"
            SELECT user_id, favorite_player_id, favorite_best_of5_match_id,
                   favorite_best_of3_match_id, best_grand_slam_final_match_id,
                   created_at, updated_at
            FROM user_picks
            WHERE user_id = $1
            FOR UPDATE
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&mut *tx)
        .await?;

        let (created_at, cur_player, cur_bo5, cur_bo3, cur_gsf) = match current {
            Some(row) => (
                row.created_at,
                row.favorite_player_id,
                row.favorite_best_of5_match_id,
                row.favorite_best_of3_match_id,
                row.best_grand_slam_final_match_id,
            ),
            None => (now, None, None, None, None),
        };

        sqlx::query(
            r#"
            INSERT INTO user_picks (
                user_id, favorite_player_id, favorite_best_of5_match_id,
                favorite_best_of3_match_id, best_grand_slam_final_match_id,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (user_id) DO UPDATE SET
                favorite_player_id = EXCLUDED.favorite_player_id,
                favorite_best_of5_match_id = EXCLUDED.favorite_best_of5_match_id,
                favorite_best_of3_match_id = EXCLUDED.favorite_best_of3_match_id,
                best_grand_slam_final_match_id = EXCLUDED.best_grand_slam_final_match_id,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(apply_patch(update.favorite_player_id, cur_player))
        .bind(apply_patch(update.favorite_best_of5_match_id, cur_bo5))
        .bind(apply_patch(update.favorite_best_of3_match_id, cur_bo3))
        .bind(apply_patch(update.best_grand_slam_final_match_id, cur_gsf))
        .bind(created_at)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(())
    }
}

/// Merge one tri-state slot with the stored value, at the uuid level
fn apply_patch<T>(patch: Patch<Id<T>>, current: Option<Uuid>) -> Option<Uuid> {
    match patch {
        Patch::Missing => current,
        Patch::Null => None,
        Patch::Value(id) => Some(id.into_uuid()),
    }
}

// ============================================================================
// Rankings Repository Implementation
// ============================================================================

impl RankingsRepository for PgTriviaRepository {
    async fn match_ranking(
        &self,
        user_id: &UserId,
        kind: MatchRankingKind,
    ) -> TriviaResult<Vec<RankedMatch>> {
        let table = ranking_table(kind);
        let rows = sqlx::query_as::<_, RankedMatchRow>(&format!(
            r#"SELECT r.position, {MATCH_DETAIL_COLUMNS} {MATCH_DETAIL_JOINS}
            JOIN {table} r ON r.match_id = m.id
            WHERE r.user_id = $1
            ORDER BY r.position ASC
            "#
        ))
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(RankedMatchRow::into_ranked).collect())
    }

    async fn replace_match_ranking(
        &self,
        user_id: &UserId,
        kind: MatchRankingKind,
        match_ids: &[MatchId],
    ) -> TriviaResult<()> {
        let table = ranking_table(kind);
        let mut tx = self.pool.begin().await?;

        sqlx::query(&format!("DELETE FROM {table} WHERE user_id = $1"))
            .bind(user_id.as_uuid())
            .execute(&mut *tx)
            .await?;

        for (index, match_id) in match_ids.iter().enumerate() {
            sqlx::query(&format!(
                "INSERT INTO {table} (user_id, match_id, position) VALUES ($1, $2, $3)"
            ))
            .bind(user_id.as_uuid())
            .bind(match_id.as_uuid())
            .bind((index + 1) as i32)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    async fn player_ranking(&self, user_id: &UserId) -> TriviaResult<Vec<RankedPlayer>> {
        let rows = sqlx::query_as::<_, RankedPlayerRow>(
            r#"
            SELECT r.position, p.id, p.name, p.slug, p.country_code,
                   p.created_at, p.updated_at
            FROM user_top10_players r
            JOIN players p ON p.id = r.player_id
            WHERE r.user_id = $1
            ORDER BY r.position ASC
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(RankedPlayerRow::into_ranked).collect())
    }

    async fn replace_player_ranking(
        &self,
        user_id: &UserId,
        player_ids: &[PlayerId],
    ) -> TriviaResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM user_top10_players WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .execute(&mut *tx)
            .await?;

        for (index, player_id) in player_ids.iter().enumerate() {
            sqlx::query(
                "INSERT INTO user_top10_players (user_id, player_id, position) VALUES ($1, $2, $3)",
            )
            .bind(user_id.as_uuid())
            .bind(player_id.as_uuid())
            .bind((index + 1) as i32)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

/// Match + tournament only (ranking/picks validation path)
const MATCH_WITH_TOURNAMENT_SELECT: &str = r#"
SELECT
    m.id AS m_id, m.tournament_id AS m_tournament_id, m.year AS m_year,
    m.round AS m_round, m.is_final AS m_is_final, m.best_of AS m_best_of,
    m.category AS m_category, m.player1_id AS m_player1_id,
    m.player2_id AS m_player2_id, m.score AS m_score, m.title AS m_title,
    m.created_at AS m_created_at, m.updated_at AS m_updated_at,
    t.id AS t_id, t.name AS t_name, t.slug AS t_slug,
    t.is_grand_slam AS t_is_grand_slam,
    t.created_at AS t_created_at, t.updated_at AS t_updated_at
FROM matches m
JOIN tournaments t ON t.id = m.tournament_id
"#;

#[derive(sqlx::FromRow)]
struct TournamentRow {
    id: Uuid,
    name: String,
    slug: String,
    is_grand_slam: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TournamentRow {
    fn into_tournament(self) -> Tournament {
        Tournament {
            id: TournamentId::from_uuid(self.id),
            name: self.name,
            slug: self.slug,
            is_grand_slam: self.is_grand_slam,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PlayerRow {
    id: Uuid,
    name: String,
    slug: String,
    country_code: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PlayerRow {
    fn into_player(self) -> Player {
        Player {
            id: PlayerId::from_uuid(self.id),
            name: self.name,
            slug: self.slug,
            country_code: self.country_code,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct MatchRow {
    id: Uuid,
    tournament_id: Uuid,
    year: i32,
    round: String,
    is_final: bool,
    best_of: i16,
    category: String,
    player1_id: Uuid,
    player2_id: Uuid,
    score: String,
    title: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl MatchRow {
    fn into_match(self) -> Match {
        Match {
            id: MatchId::from_uuid(self.id),
            tournament_id: TournamentId::from_uuid(self.tournament_id),
            year: self.year,
            round: self.round,
            is_final: self.is_final,
            best_of: self.best_of,
            category: self.category,
            player1_id: PlayerId::from_uuid(self.player1_id),
            player2_id: PlayerId::from_uuid(self.player2_id),
            score: self.score,
            title: self.title,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct MatchDetailRow {
    m_id: Uuid,
    m_tournament_id: Uuid,
    m_year: i32,
    m_round: String,
    m_is_final: bool,
    m_best_of: i16,
    m_category: String,
    m_player1_id: Uuid,
    m_player2_id: Uuid,
    m_score: String,
    m_title: String,
    m_created_at: DateTime<Utc>,
    m_updated_at: DateTime<Utc>,
    t_id: Uuid,
    t_name: String,
    t_slug: String,
    t_is_grand_slam: bool,
    t_created_at: DateTime<Utc>,
    t_updated_at: DateTime<Utc>,
    p1_id: Uuid,
    p1_name: String,
    p1_slug: String,
    p1_country_code: String,
    p1_created_at: DateTime<Utc>,
    p1_updated_at: DateTime<Utc>,
    p2_id: Uuid,
    p2_name: String,
    p2_slug: String,
    p2_country_code: String,
    p2_created_at: DateTime<Utc>,
    p2_updated_at: DateTime<Utc>,
}

impl MatchDetailRow {
    fn into_detail(self) -> MatchDetail {
        MatchDetail {
            record: Match {
                id: MatchId::from_uuid(self.m_id),
                tournament_id: TournamentId::from_uuid(self.m_tournament_id),
                year: self.m_year,
                round: self.m_round,
                is_final: self.m_is_final,
                best_of: self.m_best_of,
                category: self.m_category,
                player1_id: PlayerId::from_uuid(self.m_player1_id),
                player2_id: PlayerId::from_uuid(self.m_player2_id),
                score: self.m_score,
                title: self.m_title,
                created_at: self.m_created_at,
                updated_at: self.m_updated_at,
            },
            tournament: Tournament {
                id: TournamentId::from_uuid(self.t_id),
                name: self.t_name,
                slug: self.t_slug,
                is_grand_slam: self.t_is_grand_slam,
                created_at: self.t_created_at,
                updated_at: self.t_updated_at,
            },
            player1: Player {
                id: PlayerId::from_uuid(self.p1_id),
                name: self.p1_name,
                slug: self.p1_slug,
                country_code: self.p1_country_code,
                created_at: self.p1_created_at,
                updated_at: self.p1_updated_at,
            },
            player2: Player {
                id: PlayerId::from_uuid(self.p2_id),
                name: self.p2_name,
                slug: self.p2_slug,
                country_code: self.p2_country_code,
                created_at: self.p2_created_at,
                updated_at: self.p2_updated_at,
            },
        }
    }
}

#[derive(sqlx::FromRow)]
struct MatchWithTournamentRow {
    m_id: Uuid,
    m_tournament_id: Uuid,
    m_year: i32,
    m_round: String,
    m_is_final: bool,
    m_best_of: i16,
    m_category: String,
    m_player1_id: Uuid,
    m_player2_id: Uuid,
    m_score: String,
    m_title: String,
    m_created_at: DateTime<Utc>,
    m_updated_at: DateTime<Utc>,
    t_id: Uuid,
    t_name: String,
    t_slug: String,
    t_is_grand_slam: bool,
    t_created_at: DateTime<Utc>,
    t_updated_at: DateTime<Utc>,
}

impl MatchWithTournamentRow {
    fn into_pair(self) -> (Match, Tournament) {
        (
            Match {
                id: MatchId::from_uuid(self.m_id),
                tournament_id: TournamentId::from_uuid(self.m_tournament_id),
                year: self.m_year,
                round: self.m_round,
                is_final: self.m_is_final,
                best_of: self.m_best_of,
                category: self.m_category,
                player1_id: PlayerId::from_uuid(self.m_player1_id),
                player2_id: PlayerId::from_uuid(self.m_player2_id),
                score: self.m_score,
                title: self.m_title,
                created_at: self.m_created_at,
                updated_at: self.m_updated_at,
            },
            Tournament {
                id: TournamentId::from_uuid(self.t_id),
                name: self.t_name,
                slug: self.t_slug,
                is_grand_slam: self.t_is_grand_slam,
                created_at: self.t_created_at,
                updated_at: self.t_updated_at,
            },
        )
    }
}

#[derive(sqlx::FromRow)]
struct RankedMatchRow {
    position: i32,
    #[sqlx(flatten)]
    detail: MatchDetailRow,
}

impl RankedMatchRow {
    fn into_ranked(self) -> RankedMatch {
        RankedMatch {
            position: self.position,
            record: self.detail.into_detail(),
        }
    }
}

#[derive(sqlx::FromRow)]
struct RankedPlayerRow {
    position: i32,
    #[sqlx(flatten)]
    player: PlayerRow,
}

impl RankedPlayerRow {
    fn into_ranked(self) -> RankedPlayer {
        RankedPlayer {
            position: self.position,
            player: self.player.into_player(),
        }
    }
}

#[derive(sqlx::FromRow)]
struct UserPicksRow {
    user_id: Uuid,
    favorite_player_id: Option<Uuid>,
    favorite_best_of5_match_id: Option<Uuid>,
    favorite_best_of3_match_id: Option<Uuid>,
    best_grand_slam_final_match_id: Option<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserPicksRow {
    fn into_picks(self) -> UserPicks {
        UserPicks {
            user_id: UserId::from_uuid(self.user_id),
            favorite_player_id: self.favorite_player_id.map(PlayerId::from_uuid),
            favorite_best_of5_match_id: self.favorite_best_of5_match_id.map(MatchId::from_uuid),
            favorite_best_of3_match_id: self.favorite_best_of3_match_id.map(MatchId::from_uuid),
            best_grand_slam_final_match_id: self
                .best_grand_slam_final_match_id
                .map(MatchId::from_uuid),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
