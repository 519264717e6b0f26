//! Domain Value Objects

use kernel::id::{MatchId, PlayerId, TournamentId};
use kernel::patch::Patch;

/// The three match-ranking kinds (the player ranking is its own table and
/// its own code path — it ranks a different entity)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchRankingKind {
    /// Top 10 best-of-5 matches
    BestOfFive,
    /// Top 10 best-of-3 men's singles matches
    BestOfThree,
    /// Top 5 finals held at a Grand Slam tournament
    GrandSlamFinals,
}

impl MatchRankingKind {
    /// Count bound for this kind
    pub const fn max_entries(&self) -> usize {
        match self {
            MatchRankingKind::BestOfFive | MatchRankingKind::BestOfThree => 10,
            MatchRankingKind::GrandSlamFinals => 5,
        }
    }

    /// Noun used in the count-bound error ("At most N {noun} allowed")
    pub const fn noun(&self) -> &'static str {
        match self {
            MatchRankingKind::BestOfFive | MatchRankingKind::BestOfThree => "matches",
            MatchRankingKind::GrandSlamFinals => "Grand Slam finals",
        }
    }

    /// Label used in the invalid-ids error
    pub const fn label(&self) -> &'static str {
        match self {
            MatchRankingKind::BestOfFive => "best-of-5",
            MatchRankingKind::BestOfThree => "best-of-3 men's singles",
            MatchRankingKind::GrandSlamFinals => "Grand Slam final",
        }
    }
}

/// Count bound for the player ranking
pub const MAX_PLAYER_RANKING_ENTRIES: usize = 10;

/// Tournament list filter
#[derive(Debug, Clone, Copy, Default)]
pub struct TournamentFilter {
    pub is_grand_slam: Option<bool>,
}

/// Match list filter; every field is optional and they compose with AND
#[derive(Debug, Clone, Default)]
pub struct MatchFilter {
    pub tournament_id: Option<TournamentId>,
    pub year: Option<i32>,
    pub best_of: Option<i16>,
    pub is_final: Option<bool>,
    pub category: Option<String>,
}

/// Validated picks update: each slot is tri-state (absent / clear / set)
/// and every `Value` has already passed its eligibility rule.
#[derive(Debug, Clone, Default)]
pub struct PicksUpdate {
    pub favorite_player_id: Patch<PlayerId>,
    pub favorite_best_of5_match_id: Patch<MatchId>,
    pub favorite_best_of3_match_id: Patch<MatchId>,
    pub best_grand_slam_final_match_id: Patch<MatchId>,
}
