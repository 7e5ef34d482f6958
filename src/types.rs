//! Common types used throughout the rating engine

use crate::error::{RatingError, Result};
use serde::{Deserialize, Serialize};
use skillratings::Outcomes;

/// Numeric skill estimate for a competitor
pub type Rating = f64;

/// Outcome of a match from the home side's perspective, in `0.0..=1.0`,
/// where `0.0` is a loss, `0.5` a draw and `1.0` a win.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct MatchResult(f64);

impl MatchResult {
    pub const LOSS: MatchResult = MatchResult(0.0);
    pub const DRAW: MatchResult = MatchResult(0.5);
    pub const WIN: MatchResult = MatchResult(1.0);

    /// Create a match result, rejecting values outside `0.0..=1.0`
    pub fn new(value: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&value) {
            return Err(RatingError::InvalidMatchResult { value });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// The same result seen from the other side: `|1 - r|`
    pub fn opposite(self) -> MatchResult {
        MatchResult((1.0 - self.0).abs())
    }
}

/// A home win, matching the default of every update operation
impl Default for MatchResult {
    fn default() -> Self {
        MatchResult::WIN
    }
}

impl From<MatchResult> for f64 {
    fn from(MatchResult(value): MatchResult) -> f64 {
        value
    }
}

impl TryFrom<f64> for MatchResult {
    type Error = RatingError;

    fn try_from(value: f64) -> Result<Self> {
        MatchResult::new(value)
    }
}

impl From<Outcomes> for MatchResult {
    fn from(outcome: Outcomes) -> Self {
        match outcome {
            Outcomes::WIN => MatchResult::WIN,
            Outcomes::DRAW => MatchResult::DRAW,
            Outcomes::LOSS => MatchResult::LOSS,
        }
    }
}

/// Rating change information for a single competitor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingChange {
    pub old_rating: Rating,
    pub new_rating: Rating,
    /// Always `new_rating - old_rating`
    pub change: f64,
}

impl RatingChange {
    pub fn new(old_rating: Rating, new_rating: Rating) -> Self {
        Self {
            old_rating,
            new_rating,
            change: new_rating - old_rating,
        }
    }

    /// A change of exactly zero
    pub fn unchanged(rating: Rating) -> Self {
        Self::new(rating, rating)
    }
}

/// Both sides of a one-versus-one update
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OneVsOneOutcome {
    pub home: RatingChange,
    pub opponent: RatingChange,
}

/// Per-player changes of a team match, aligned with the input order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamOutcome {
    pub home: Vec<RatingChange>,
    pub opponent: Vec<RatingChange>,
}

/// A competitor's rating and finishing rank in a free-for-all.
///
/// Lower ranks finished better; equal ranks are ties.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub rating: Rating,
    pub rank: u32,
}

impl Standing {
    pub fn new(rating: Rating, rank: u32) -> Self {
        Self { rating, rank }
    }
}

/// Home side's rating change for every possible outcome of a pending match
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingScenarios {
    pub win: RatingChange,
    pub draw: RatingChange,
    pub loss: RatingChange,
}

impl RatingScenarios {
    /// Largest possible gain
    pub fn max_gain(&self) -> f64 {
        self.win.change
    }

    /// Largest possible loss, as a non-positive number
    pub fn max_loss(&self) -> f64 {
        self.loss.change
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_result_range() {
        assert!(MatchResult::new(0.0).is_ok());
        assert!(MatchResult::new(0.3).is_ok());
        assert!(MatchResult::new(1.0).is_ok());

        assert_eq!(
            MatchResult::new(1.01),
            Err(RatingError::InvalidMatchResult { value: 1.01 })
        );
        assert!(MatchResult::new(-0.5).is_err());
        assert!(MatchResult::new(f64::NAN).is_err());
        assert!(MatchResult::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_match_result_opposite() {
        assert_eq!(MatchResult::WIN.opposite(), MatchResult::LOSS);
        assert_eq!(MatchResult::LOSS.opposite(), MatchResult::WIN);
        assert_eq!(MatchResult::DRAW.opposite(), MatchResult::DRAW);
        assert_eq!(MatchResult::new(0.25).unwrap().opposite().value(), 0.75);
    }

    #[test]
    fn test_match_result_default_is_win() {
        assert_eq!(MatchResult::default(), MatchResult::WIN);
    }

    #[test]
    fn test_match_result_from_outcomes() {
        assert_eq!(MatchResult::from(Outcomes::WIN), MatchResult::WIN);
        assert_eq!(MatchResult::from(Outcomes::DRAW), MatchResult::DRAW);
        assert_eq!(MatchResult::from(Outcomes::LOSS), MatchResult::LOSS);
    }

    #[test]
    fn test_match_result_serde() {
        let result: MatchResult = serde_json::from_str("0.5").unwrap();
        assert_eq!(result, MatchResult::DRAW);
        assert_eq!(serde_json::to_string(&MatchResult::WIN).unwrap(), "1.0");

        assert!(serde_json::from_str::<MatchResult>("2.0").is_err());
    }

    #[test]
    fn test_rating_change_identity() {
        let change = RatingChange::new(1000.0, 1016.5);
        assert_eq!(change.change, 16.5);
        assert_eq!(change.change, change.new_rating - change.old_rating);

        let unchanged = RatingChange::unchanged(1234.0);
        assert_eq!(unchanged.change, 0.0);
    }

    #[test]
    fn test_rating_change_serialization() {
        let change = RatingChange::new(1000.0, 1016.0);
        let json = serde_json::to_value(change).unwrap();
        assert_eq!(json["old_rating"], 1000.0);
        assert_eq!(json["new_rating"], 1016.0);
        assert_eq!(json["change"], 16.0);
    }
}
