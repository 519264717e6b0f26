//! Application Layer
//!
//! Use cases for catalog reads, picks and rankings.

pub mod catalog;
pub mod picks;
pub mod rankings;

// Re-exports
pub use catalog::CatalogQueries;
pub use picks::{GetPicksUseCase, PicksInput, SetPicksUseCase};
pub use rankings::{
    GetRankingsUseCase, SetMatchRankingUseCase, SetPlayerRankingUseCase,
};
