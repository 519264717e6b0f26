//! Domain Layer
//!
//! Entities, eligibility rules, and repository traits.

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;

// Re-exports
pub use entities::{
    Match, MatchDetail, PicksDetail, Player, RankedMatch, RankedPlayer, Tournament, UserPicks,
};
pub use repository::{CatalogRepository, PicksRepository, RankingsRepository};
pub use value_objects::{MatchFilter, MatchRankingKind, PicksUpdate, TournamentFilter};
