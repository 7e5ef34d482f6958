//! Property-based tests for the rating engine

use elo_engine::{EloRatingEngine, MatchResult};
use proptest::prelude::*;

fn rating() -> impl Strategy<Value = f64> {
    0.0..3000.0f64
}

fn match_result() -> impl Strategy<Value = MatchResult> {
    (0.0..=1.0f64).prop_map(|value| MatchResult::new(value).unwrap())
}

proptest! {
    #[test]
    fn change_is_new_minus_old(home in rating(), opponent in rating(), result in match_result()) {
        let engine = EloRatingEngine::default();
        let outcome = engine.update_one_vs_one(home, opponent, result);

        prop_assert_eq!(outcome.home.change, outcome.home.new_rating - outcome.home.old_rating);
        prop_assert_eq!(
            outcome.opponent.change,
            outcome.opponent.new_rating - outcome.opponent.old_rating
        );
    }

    #[test]
    fn win_loss_swap_is_symmetric(a in rating(), b in rating()) {
        let engine = EloRatingEngine::default();
        let forward = engine.update_home(a, b, MatchResult::WIN).change;
        let reversed = engine.update_home(b, a, MatchResult::LOSS).change;

        prop_assert!((forward + reversed).abs() < 1e-9);
    }

    #[test]
    fn one_vs_one_is_zero_sum(home in rating(), opponent in rating(), result in match_result()) {
        let engine = EloRatingEngine::default();
        let outcome = engine.update_one_vs_one(home, opponent, result);

        prop_assert!((outcome.home.change + outcome.opponent.change).abs() < 1e-9);
    }

    #[test]
    fn change_is_bounded_by_k_factor(
        home in rating(),
        opponent in rating(),
        result in match_result(),
        k_factor in 0.0..64.0f64,
    ) {
        let engine = EloRatingEngine::with_k_factor(k_factor).unwrap();
        let change = engine.update_home(home, opponent, result).change;

        prop_assert!(change.abs() <= k_factor + 1e-9);
    }

    #[test]
    fn zero_k_factor_never_moves_ratings(
        home in rating(),
        opponent in rating(),
        result in match_result(),
    ) {
        let engine = EloRatingEngine::with_k_factor(0.0).unwrap();
        let outcome = engine.update_one_vs_one(home, opponent, result);

        prop_assert_eq!(outcome.home.change, 0.0);
        prop_assert_eq!(outcome.opponent.change, 0.0);
    }

    #[test]
    fn free_for_all_preserves_order_and_sums_to_zero(
        field in prop::collection::vec(rating(), 1..12),
    ) {
        let engine = EloRatingEngine::default();
        let changes = engine.update_free_for_all(&field).unwrap();

        prop_assert_eq!(changes.len(), field.len());
        for (change, rating) in changes.iter().zip(&field) {
            prop_assert_eq!(change.old_rating, *rating);
        }

        let total: f64 = changes.iter().map(|change| change.change).sum();
        prop_assert!(total.abs() < 1e-6);
    }

    #[test]
    fn team_outcome_aligns_with_inputs(
        home in prop::collection::vec(rating(), 1..6),
        opponent in prop::collection::vec(rating(), 1..6),
        result in match_result(),
    ) {
        let engine = EloRatingEngine::default();
        let outcome = engine.update_many_vs_many(&home, &opponent, result).unwrap();

        prop_assert_eq!(outcome.home.len(), home.len());
        prop_assert_eq!(outcome.opponent.len(), opponent.len());
        for (change, rating) in outcome.home.iter().zip(&home) {
            prop_assert_eq!(change.old_rating, *rating);
        }
        for (change, rating) in outcome.opponent.iter().zip(&opponent) {
            prop_assert_eq!(change.old_rating, *rating);
        }
    }
}
