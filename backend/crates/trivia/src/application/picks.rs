//! Picks Use Cases
//!
//! A user has at most one picks row with four independently patchable
//! slots. Each slot presented with a value is validated against its
//! eligibility rule at write time; rules are not re-checked later.

use std::sync::Arc;

use kernel::id::{Id, UserId};
use kernel::patch::Patch;
use uuid::Uuid;

use crate::domain::entities::PicksDetail;
use crate::domain::repository::{CatalogRepository, PicksRepository};
use crate::domain::services::{
    is_best_of_five, is_best_of_three_mens_singles, is_grand_slam_final,
};
use crate::domain::value_objects::PicksUpdate;
use crate::error::{TriviaError, TriviaResult};

const INVALID_FAVORITE_PLAYER: &str = "Invalid favoritePlayerId";
const INVALID_FAVORITE_BO5: &str = "Invalid or not best-of-5 match for favoriteBestOf5MatchId";
const INVALID_FAVORITE_BO3: &str =
    "Invalid or not best-of-3 men's singles match for favoriteBestOf3MatchId";
const INVALID_BEST_GS_FINAL: &str =
    "Invalid or not Grand Slam final for bestGrandSlamFinalMatchId";

/// Raw picks input: untyped ids straight from the request body
#[derive(Debug, Clone, Default)]
pub struct PicksInput {
    pub favorite_player_id: Patch<Uuid>,
    pub favorite_best_of5_match_id: Patch<Uuid>,
    pub favorite_best_of3_match_id: Patch<Uuid>,
    pub best_grand_slam_final_match_id: Patch<Uuid>,
}

/// Get picks use case
pub struct GetPicksUseCase<P>
where
    P: PicksRepository,
{
    picks_repo: Arc<P>,
}

impl<P> GetPicksUseCase<P>
where
    P: PicksRepository,
{
    pub fn new(picks_repo: Arc<P>) -> Self {
        Self { picks_repo }
    }

    /// `None` means the user has no picks row yet; reads never create one
    pub async fn execute(&self, user_id: &UserId) -> TriviaResult<Option<PicksDetail>> {
        self.picks_repo.find_picks_detail(user_id).await
    }
}

/// Set picks use case
pub struct SetPicksUseCase<C, P>
where
    C: CatalogRepository,
    P: PicksRepository,
{
    catalog: Arc<C>,
    picks_repo: Arc<P>,
}

impl<C, P> SetPicksUseCase<C, P>
where
    C: CatalogRepository,
    P: PicksRepository,
{
    pub fn new(catalog: Arc<C>, picks_repo: Arc<P>) -> Self {
        Self { catalog, picks_repo }
    }

    pub async fn execute(
        &self,
        user_id: &UserId,
        input: PicksInput,
    ) -> TriviaResult<PicksDetail> {
        let update = self.validate(input).await?;

        self.picks_repo.apply_picks_update(user_id, &update).await?;

        tracing::debug!(user_id = %user_id, "Picks updated");

        // The upsert just wrote the row, so it exists
        self.picks_repo
            .find_picks_detail(user_id)
            .await?
            .ok_or_else(|| TriviaError::Internal("Picks row missing after upsert".to_string()))
    }

    /// Check each present slot against its rule, turning raw uuids into
    /// typed ids. `Missing` and `Null` pass through untouched.
    async fn validate(&self, input: PicksInput) -> TriviaResult<PicksUpdate> {
        let mut update = PicksUpdate::default();

        update.favorite_player_id = match input.favorite_player_id {
            Patch::Missing => Patch::Missing,
            Patch::Null => Patch::Null,
            Patch::Value(raw) => {
                let id = Id::from_uuid(raw);
                self.catalog
                    .find_player(&id)
                    .await?
                    .ok_or(TriviaError::InvalidPick(INVALID_FAVORITE_PLAYER))?;
                Patch::Value(id)
            }
        };

        update.favorite_best_of5_match_id = match input.favorite_best_of5_match_id {
            Patch::Missing => Patch::Missing,
            Patch::Null => Patch::Null,
            Patch::Value(raw) => {
                let id = Id::from_uuid(raw);
                let record = self
                    .catalog
                    .find_match(&id)
                    .await?
                    .ok_or(TriviaError::InvalidPick(INVALID_FAVORITE_BO5))?;
                if !is_best_of_five(&record) {
                    return Err(TriviaError::InvalidPick(INVALID_FAVORITE_BO5));
                }
                Patch::Value(id)
            }
        };

        update.favorite_best_of3_match_id = match input.favorite_best_of3_match_id {
            Patch::Missing => Patch::Missing,
            Patch::Null => Patch::Null,
            Patch::Value(raw) => {
                let id = Id::from_uuid(raw);
                let record = self
                    .catalog
                    .find_match(&id)
                    .await?
                    .ok_or(TriviaError::InvalidPick(INVALID_FAVORITE_BO3))?;
                if !is_best_of_three_mens_singles(&record) {
                    return Err(TriviaError::InvalidPick(INVALID_FAVORITE_BO3));
                }
                Patch::Value(id)
            }
        };

        update.best_grand_slam_final_match_id = match input.best_grand_slam_final_match_id {
            Patch::Missing => Patch::Missing,
            Patch::Null => Patch::Null,
            Patch::Value(raw) => {
                let id = Id::from_uuid(raw);
                let (record, tournament) = self
                    .catalog
                    .find_match_with_tournament(&id)
                    .await?
                    .ok_or(TriviaError::InvalidPick(INVALID_BEST_GS_FINAL))?;
                if !is_grand_slam_final(&record, &tournament) {
                    return Err(TriviaError::InvalidPick(INVALID_BEST_GS_FINAL));
                }
                Patch::Value(id)
            }
        };

        Ok(update)
    }
}
