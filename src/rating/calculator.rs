//! Rating calculator trait and the Elo implementation
//!
//! Host applications that rank arbitrary fields can hold a
//! `Box<dyn RatingCalculator>` and swap or reconfigure the rating system at
//! runtime.

use crate::error::{RatingError, Result};
use crate::rating::elo::{EloRatingEngine, ExtendedEloConfig};
use crate::types::{Rating, RatingChange, Standing};
use tracing::info;

/// Trait for calculating rating changes after games
pub trait RatingCalculator: Send + Sync {
    /// Calculate rating changes for competitors based on their standings
    ///
    /// # Arguments
    /// * `standings` - Rating and finishing rank of each competitor, lower is better
    ///
    /// # Returns
    /// One change per competitor, in input order
    fn calculate_rating_changes(&self, standings: &[Standing]) -> Result<Vec<RatingChange>>;

    /// Get the initial rating for new competitors
    fn initial_rating(&self) -> Rating;

    /// Get current configuration as JSON
    fn config(&self) -> serde_json::Value;

    /// Update configuration from JSON
    fn update_config(&mut self, config: serde_json::Value) -> Result<()>;
}

impl RatingCalculator for EloRatingEngine {
    fn calculate_rating_changes(&self, standings: &[Standing]) -> Result<Vec<RatingChange>> {
        self.update_free_for_all_ranked(standings)
    }

    fn initial_rating(&self) -> Rating {
        self.default_rating()
    }

    fn config(&self) -> serde_json::Value {
        serde_json::to_value(&self.config).unwrap_or(serde_json::Value::Null)
    }

    fn update_config(&mut self, config: serde_json::Value) -> Result<()> {
        let new_config: ExtendedEloConfig =
            serde_json::from_value(config).map_err(|e| RatingError::ConfigurationError {
                message: format!("Invalid Elo configuration: {}", e),
            })?;

        new_config.validate()?;
        info!(
            k_factor = new_config.elo_config.k,
            initial_rating = new_config.initial_rating,
            "Elo configuration replaced"
        );
        self.config = new_config;
        Ok(())
    }
}
