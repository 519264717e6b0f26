//! Domain Entities
//!
//! The catalog (tournaments, players, matches) is immutable reference data;
//! only picks and ranking rows are ever written by this crate.

use chrono::{DateTime, Utc};
use kernel::id::{MatchId, PlayerId, TournamentId, UserId};

/// Tournament reference record
#[derive(Debug, Clone)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub slug: String,
    pub is_grand_slam: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Player reference record
#[derive(Debug, Clone)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub slug: String,
    /// ISO 3166-1 alpha-3 (e.g. "SRB", "CHE")
    pub country_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Match reference record
#[derive(Debug, Clone)]
pub struct Match {
    pub id: MatchId,
    pub tournament_id: TournamentId,
    pub year: i32,
    /// Round label (e.g. "Final", "Semifinal", "R16")
    pub round: String,
    pub is_final: bool,
    /// 3 or 5
    pub best_of: i16,
    /// Draw category (e.g. "men_singles")
    pub category: String,
    pub player1_id: PlayerId,
    pub player2_id: PlayerId,
    /// Free-form score line (e.g. "6-4 3-6 7-6(7)")
    pub score: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Match with its referenced tournament and players expanded
#[derive(Debug, Clone)]
pub struct MatchDetail {
    pub record: Match,
    pub tournament: Tournament,
    pub player1: Player,
    pub player2: Player,
}

/// A user's favorite picks row (unique per user)
#[derive(Debug, Clone)]
pub struct UserPicks {
    pub user_id: UserId,
    pub favorite_player_id: Option<PlayerId>,
    pub favorite_best_of5_match_id: Option<MatchId>,
    pub favorite_best_of3_match_id: Option<MatchId>,
    pub best_grand_slam_final_match_id: Option<MatchId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Picks with every referenced entity expanded
#[derive(Debug, Clone)]
pub struct PicksDetail {
    pub user_id: UserId,
    pub favorite_player: Option<Player>,
    pub favorite_best_of5_match: Option<MatchDetail>,
    pub favorite_best_of3_match: Option<MatchDetail>,
    pub best_grand_slam_final: Option<MatchDetail>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One row of a match ranking, 1-based position
#[derive(Debug, Clone)]
pub struct RankedMatch {
    pub position: i32,
    pub record: MatchDetail,
}

/// One row of the player ranking, 1-based position
#[derive(Debug, Clone)]
pub struct RankedPlayer {
    pub position: i32,
    pub player: Player,
}
