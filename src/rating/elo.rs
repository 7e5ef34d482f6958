//! Elo rating system implementation
//!
//! Ratings are mapped onto a logistic strength scale, `10^(r / 400)`, so
//! that a 400 point gap corresponds to a 10:1 strength ratio. The expected
//! score of a side is its share of the combined strength, and a rating
//! moves by `K * (actual - expected)`.
//!
//! The team and free-for-all modes in [`crate::rating::team`] and
//! [`crate::rating::free_for_all`] are built on [`EloRatingEngine::update_home`].

use crate::error::{RatingError, Result};
use crate::types::{MatchResult, OneVsOneOutcome, Rating, RatingChange, RatingScenarios};
use serde::{Deserialize, Serialize};
use skillratings::elo::EloConfig;
use tracing::{debug, info, warn};

/// Rating points over which strength grows tenfold
pub const RATING_SCALE: f64 = 400.0;

/// K-factor used when none is configured
pub const DEFAULT_K_FACTOR: f64 = 32.0;

/// Map a rating onto the logistic strength scale, `10^(rating / 400)`.
///
/// Grows without bound; extremely large ratings overflow to infinity.
pub fn transformed_strength(rating: Rating) -> f64 {
    10f64.powf(rating / RATING_SCALE)
}

/// Expected score of the home side given both transformed strengths.
///
/// Both strengths are positive when produced by [`transformed_strength`];
/// the result is NaN if both are zero.
pub fn expected_score(home_strength: f64, opponent_strength: f64) -> f64 {
    home_strength / (home_strength + opponent_strength)
}

/// Extended configuration for the Elo rating system
/// This wraps the skillratings EloConfig with additional parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtendedEloConfig {
    /// Core Elo parameters (`k` is the K-factor)
    pub elo_config: EloConfig,
    /// Initial rating for new competitors
    pub initial_rating: Rating,
}

impl Default for ExtendedEloConfig {
    fn default() -> Self {
        Self {
            elo_config: EloConfig {
                k: DEFAULT_K_FACTOR,
            },
            initial_rating: 1000.0,
        }
    }
}

impl ExtendedEloConfig {
    /// Create conservative configuration (slower rating changes)
    pub fn conservative() -> Self {
        Self {
            elo_config: EloConfig { k: 16.0 },
            ..Self::default()
        }
    }

    /// Create aggressive configuration (faster rating changes)
    pub fn aggressive() -> Self {
        Self {
            elo_config: EloConfig { k: 40.0 },
            ..Self::default()
        }
    }

    /// Validate configuration parameters
    ///
    /// Zero and negative K-factors are accepted; they produce degenerate
    /// but well-defined updates.
    pub fn validate(&self) -> Result<()> {
        if !self.elo_config.k.is_finite() {
            return Err(RatingError::InvalidKFactor {
                value: self.elo_config.k,
            });
        }

        if !self.initial_rating.is_finite() {
            return Err(RatingError::ConfigurationError {
                message: format!("Initial rating must be finite, got {}", self.initial_rating),
            });
        }

        Ok(())
    }
}

/// Elo rating engine.
///
/// Owns its K-factor. Engines with different K-factors can be used side by
/// side, and every update reads the K-factor current at the time of the
/// call.
#[derive(Debug, Clone, Default)]
pub struct EloRatingEngine {
    pub(crate) config: ExtendedEloConfig,
}

impl EloRatingEngine {
    /// Create a new Elo rating engine
    pub fn new(config: ExtendedEloConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    /// Create an engine with default settings and the given K-factor
    pub fn with_k_factor(k_factor: f64) -> Result<Self> {
        Self::new(ExtendedEloConfig {
            elo_config: EloConfig { k: k_factor },
            ..ExtendedEloConfig::default()
        })
    }

    pub fn elo_config(&self) -> &ExtendedEloConfig {
        &self.config
    }

    pub fn k_factor(&self) -> f64 {
        self.config.elo_config.k
    }

    /// Replace the K-factor used by subsequent updates
    pub fn set_k_factor(&mut self, k_factor: f64) -> Result<()> {
        if !k_factor.is_finite() {
            warn!(k_factor, "Rejected non-finite K-factor");
            return Err(RatingError::InvalidKFactor { value: k_factor });
        }

        info!(
            old_k_factor = self.config.elo_config.k,
            new_k_factor = k_factor,
            "K-factor updated"
        );
        self.config.elo_config.k = k_factor;
        Ok(())
    }

    /// Get default rating for new competitors
    pub fn default_rating(&self) -> Rating {
        self.config.initial_rating
    }

    /// Expected score of `home_rating` against `opponent_rating`
    pub fn expected_score(&self, home_rating: Rating, opponent_rating: Rating) -> f64 {
        expected_score(
            transformed_strength(home_rating),
            transformed_strength(opponent_rating),
        )
    }

    /// Mean expected score of a competitor against every rating in a field
    pub fn expected_score_against_field(&self, rating: Rating, field: &[Rating]) -> f64 {
        if field.is_empty() {
            return 0.5; // Neutral expectation when no opponents
        }

        let total: f64 = field
            .iter()
            .map(|&opponent| self.expected_score(rating, opponent))
            .sum();

        total / field.len() as f64
    }

    /// Update both sides of a one-versus-one match.
    ///
    /// `home_result` is seen from the home side; the opponent is scored
    /// with its [`MatchResult::opposite`].
    pub fn update_one_vs_one(
        &self,
        home_rating: Rating,
        opponent_rating: Rating,
        home_result: MatchResult,
    ) -> OneVsOneOutcome {
        let k_factor = self.k_factor();

        let home_strength = transformed_strength(home_rating);
        let opponent_strength = transformed_strength(opponent_rating);
        let home_expected = expected_score(home_strength, opponent_strength);
        let opponent_expected = expected_score(opponent_strength, home_strength);

        let home = RatingChange::new(
            home_rating,
            home_rating + k_factor * (home_result.value() - home_expected),
        );
        let opponent = RatingChange::new(
            opponent_rating,
            opponent_rating + k_factor * (home_result.opposite().value() - opponent_expected),
        );

        debug!(
            home_rating,
            opponent_rating,
            home_result = home_result.value(),
            home_expected,
            k_factor,
            home_change = home.change,
            opponent_change = opponent.change,
            "One-vs-one update"
        );

        OneVsOneOutcome { home, opponent }
    }

    /// Update only the home side of a one-versus-one match
    pub fn update_home(
        &self,
        home_rating: Rating,
        opponent_rating: Rating,
        home_result: MatchResult,
    ) -> RatingChange {
        let home_expected = self.expected_score(home_rating, opponent_rating);

        RatingChange::new(
            home_rating,
            home_rating + self.k_factor() * (home_result.value() - home_expected),
        )
    }

    /// Home side's rating change for each possible outcome against `opponent_rating`
    pub fn rating_scenarios(&self, home_rating: Rating, opponent_rating: Rating) -> RatingScenarios {
        RatingScenarios {
            win: self.update_home(home_rating, opponent_rating, MatchResult::WIN),
            draw: self.update_home(home_rating, opponent_rating, MatchResult::DRAW),
            loss: self.update_home(home_rating, opponent_rating, MatchResult::LOSS),
        }
    }
}
