//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::{MatchId, PlayerId, TournamentId, UserId};
use kernel::patch::Patch;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{
    MatchDetail, PicksDetail, Player, RankedMatch, RankedPlayer, Tournament,
};

// ============================================================================
// Catalog bodies
// ============================================================================

/// Tournament response body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentBody {
    pub id: TournamentId,
    pub name: String,
    pub slug: String,
    pub is_grand_slam: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Tournament> for TournamentBody {
    fn from(t: Tournament) -> Self {
        Self {
            id: t.id,
            name: t.name,
            slug: t.slug,
            is_grand_slam: t.is_grand_slam,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

/// Player response body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerBody {
    pub id: PlayerId,
    pub name: String,
    pub slug: String,
    pub country_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Player> for PlayerBody {
    fn from(p: Player) -> Self {
        Self {
            id: p.id,
            name: p.name,
            slug: p.slug,
            country_code: p.country_code,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// Match response body with expanded references
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchBody {
    pub id: MatchId,
    pub tournament_id: TournamentId,
    pub year: i32,
    pub round: String,
    pub is_final: bool,
    pub best_of: i16,
    pub category: String,
    pub player1_id: PlayerId,
    pub player2_id: PlayerId,
    pub score: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub tournament: TournamentBody,
    pub player1: PlayerBody,
    pub player2: PlayerBody,
}

impl From<MatchDetail> for MatchBody {
    fn from(d: MatchDetail) -> Self {
        let m = d.record;
        Self {
            id: m.id,
            tournament_id: m.tournament_id,
            year: m.year,
            round: m.round,
            is_final: m.is_final,
            best_of: m.best_of,
            category: m.category,
            player1_id: m.player1_id,
            player2_id: m.player2_id,
            score: m.score,
            title: m.title,
            created_at: m.created_at,
            updated_at: m.updated_at,
            tournament: d.tournament.into(),
            player1: d.player1.into(),
            player2: d.player2.into(),
        }
    }
}

/// `{data: [...]}` list envelope
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
}

/// `{count, data}` envelope for the per-player match listing
#[derive(Debug, Clone, Serialize)]
pub struct PlayerMatchesResponse {
    pub count: usize,
    pub data: Vec<MatchBody>,
}

// ============================================================================
// Catalog queries
// ============================================================================

/// GET /tournaments query parameters
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentListQuery {
    pub is_grand_slam: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// GET /players query parameters
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerListQuery {
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// GET /matches query parameters
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchListQuery {
    pub tournament_id: Option<Uuid>,
    pub year: Option<i32>,
    pub best_of: Option<i16>,
    pub is_final: Option<bool>,
    pub category: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ============================================================================
// Picks
// ============================================================================

/// PUT /me/picks body — every slot tri-state
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPicksRequest {
    #[serde(default)]
    pub favorite_player_id: Patch<Uuid>,
    #[serde(default)]
    pub favorite_best_of5_match_id: Patch<Uuid>,
    #[serde(default)]
    pub favorite_best_of3_match_id: Patch<Uuid>,
    #[serde(default)]
    pub best_grand_slam_final_match_id: Patch<Uuid>,
}

/// Picks body with expanded references
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PicksBody {
    pub user_id: UserId,
    pub favorite_player: Option<PlayerBody>,
    pub favorite_best_of5_match: Option<MatchBody>,
    pub favorite_best_of3_match: Option<MatchBody>,
    pub best_grand_slam_final: Option<MatchBody>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PicksDetail> for PicksBody {
    fn from(d: PicksDetail) -> Self {
        Self {
            user_id: d.user_id,
            favorite_player: d.favorite_player.map(Into::into),
            favorite_best_of5_match: d.favorite_best_of5_match.map(Into::into),
            favorite_best_of3_match: d.favorite_best_of3_match.map(Into::into),
            best_grand_slam_final: d.best_grand_slam_final.map(Into::into),
            created_at: d.created_at,
            updated_at: d.updated_at,
        }
    }
}

/// GET/PUT /me/picks envelope; `data` is null until the first write
#[derive(Debug, Clone, Serialize)]
pub struct PicksResponse {
    pub data: Option<PicksBody>,
}

// ============================================================================
// Rankings
// ============================================================================

/// PUT body for the three match-ranking kinds
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchIdsRequest {
    pub match_ids: Vec<Uuid>,
}

/// PUT body for the player ranking
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerIdsRequest {
    pub player_ids: Vec<Uuid>,
}

/// One row of a match ranking
#[derive(Debug, Clone, Serialize)]
pub struct RankedMatchBody {
    pub position: i32,
    #[serde(rename = "match")]
    pub record: MatchBody,
}

impl From<RankedMatch> for RankedMatchBody {
    fn from(r: RankedMatch) -> Self {
        Self {
            position: r.position,
            record: r.record.into(),
        }
    }
}

/// One row of the player ranking
#[derive(Debug, Clone, Serialize)]
pub struct RankedPlayerBody {
    pub position: i32,
    pub player: PlayerBody,
}

impl From<RankedPlayer> for RankedPlayerBody {
    fn from(r: RankedPlayer) -> Self {
        Self {
            position: r.position,
            player: r.player.into(),
        }
    }
}
