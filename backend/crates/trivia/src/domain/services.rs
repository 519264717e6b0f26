//! Domain Services
//!
//! Pure eligibility rules and id-list checks shared by picks and rankings.

use std::collections::HashSet;
use std::hash::Hash;

use crate::domain::entities::{Match, Tournament};

/// The men's singles draw category
pub const MEN_SINGLES: &str = "men_singles";

/// Eligible for the best-of-5 slots and ranking
pub fn is_best_of_five(m: &Match) -> bool {
    m.best_of == 5
}

/// Eligible for the best-of-3 slots and ranking (men's singles only)
pub fn is_best_of_three_mens_singles(m: &Match) -> bool {
    m.best_of == 3 && m.category == MEN_SINGLES
}

/// Eligible for the Grand Slam final slots and ranking
pub fn is_grand_slam_final(m: &Match, tournament: &Tournament) -> bool {
    m.is_final && tournament.is_grand_slam
}

/// Ids that appear more than once, in first-occurrence order
pub fn duplicate_ids<T: Eq + Hash + Copy>(ids: &[T]) -> Vec<T> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut dupes = Vec::new();
    for id in ids {
        if !seen.insert(*id) && reported.insert(*id) {
            dupes.push(*id);
        }
    }
    dupes
}

/// Requested ids with no accepted counterpart, in request order
pub fn missing_ids<T: Eq + Hash + Copy>(requested: &[T], accepted: &HashSet<T>) -> Vec<T> {
    requested
        .iter()
        .copied()
        .filter(|id| !accepted.contains(id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use kernel::id::{Id, MatchId};

    fn fixture_match(best_of: i16, category: &str, is_final: bool) -> Match {
        let now = Utc::now();
        Match {
            id: Id::new(),
            tournament_id: Id::new(),
            year: 2019,
            round: if is_final { "Final" } else { "Semifinal" }.to_string(),
            is_final,
            best_of,
            category: category.to_string(),
            player1_id: Id::new(),
            player2_id: Id::new(),
            score: "7-6(5) 1-6 7-6(4) 4-6 13-12(3)".to_string(),
            title: "A long afternoon".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn fixture_tournament(is_grand_slam: bool) -> Tournament {
        let now = Utc::now();
        Tournament {
            id: Id::new(),
            name: "Wimbledon".to_string(),
            slug: "wimbledon".to_string(),
            is_grand_slam,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_best_of_five_rule() {
        assert!(is_best_of_five(&fixture_match(5, MEN_SINGLES, true)));
        assert!(!is_best_of_five(&fixture_match(3, MEN_SINGLES, true)));
    }

    #[test]
    fn test_best_of_three_rule_requires_mens_singles() {
        assert!(is_best_of_three_mens_singles(&fixture_match(
            3,
            MEN_SINGLES,
            false
        )));
        // Wrong format
        assert!(!is_best_of_three_mens_singles(&fixture_match(
            5,
            MEN_SINGLES,
            false
        )));
        // Wrong category
        assert!(!is_best_of_three_mens_singles(&fixture_match(
            3,
            "women_singles",
            false
        )));
    }

    #[test]
    fn test_grand_slam_final_rule() {
        let slam = fixture_tournament(true);
        let regular = fixture_tournament(false);

        assert!(is_grand_slam_final(
            &fixture_match(5, MEN_SINGLES, true),
            &slam
        ));
        // Final at a non-slam
        assert!(!is_grand_slam_final(
            &fixture_match(5, MEN_SINGLES, true),
            &regular
        ));
        // Non-final at a slam
        assert!(!is_grand_slam_final(
            &fixture_match(5, MEN_SINGLES, false),
            &slam
        ));
    }

    #[test]
    fn test_duplicate_ids() {
        let a: MatchId = Id::new();
        let b: MatchId = Id::new();
        let c: MatchId = Id::new();

        assert!(duplicate_ids(&[a, b, c]).is_empty());
        assert_eq!(duplicate_ids(&[a, b, a, c, b, a]), vec![a, b]);
        assert!(duplicate_ids::<MatchId>(&[]).is_empty());
    }

    #[test]
    fn test_missing_ids_preserves_request_order() {
        let a: MatchId = Id::new();
        let b: MatchId = Id::new();
        let c: MatchId = Id::new();

        let accepted: HashSet<MatchId> = [b].into_iter().collect();
        assert_eq!(missing_ids(&[a, b, c], &accepted), vec![a, c]);
    }
}
