//! Rating engine settings

use serde::{Deserialize, Serialize};

/// Settings used to build an [`crate::rating::EloRatingEngine`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingSettings {
    /// Magnitude of rating swings per match
    pub k_factor: f64,
    /// Rating assigned to new competitors
    pub initial_rating: f64,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            k_factor: 32.0,
            initial_rating: 1000.0,
        }
    }
}
