//! Team-versus-team updates
//!
//! Each player is rated individually against the mean rating of the
//! opposing team, using the team-level result.

use crate::error::{RatingError, Result};
use crate::rating::elo::EloRatingEngine;
use crate::types::{MatchResult, Rating, TeamOutcome};
use tracing::{debug, warn};

fn mean_rating(ratings: &[Rating]) -> Rating {
    ratings.iter().sum::<f64>() / ratings.len() as f64
}

impl EloRatingEngine {
    /// Update every player of a team match.
    ///
    /// Home players are scored with `home_result`, opponents with its
    /// [`MatchResult::opposite`]. Both sides must be non-empty; the returned
    /// changes follow the order of the inputs.
    pub fn update_many_vs_many(
        &self,
        home_ratings: &[Rating],
        opponent_ratings: &[Rating],
        home_result: MatchResult,
    ) -> Result<TeamOutcome> {
        if home_ratings.is_empty() {
            warn!("Rejected team update with an empty home team");
            return Err(RatingError::InvalidArgument {
                reason: "Home team has no players".to_string(),
            });
        }

        if opponent_ratings.is_empty() {
            warn!("Rejected team update with an empty opponent team");
            return Err(RatingError::InvalidArgument {
                reason: "Opponent team has no players".to_string(),
            });
        }

        let home_mean = mean_rating(home_ratings);
        let opponent_mean = mean_rating(opponent_ratings);
        let opponent_result = home_result.opposite();

        debug!(
            home_players = home_ratings.len(),
            opponent_players = opponent_ratings.len(),
            home_mean,
            opponent_mean,
            home_result = home_result.value(),
            "Many-vs-many update"
        );

        let home = home_ratings
            .iter()
            .map(|&rating| self.update_home(rating, opponent_mean, home_result))
            .collect();

        let opponent = opponent_ratings
            .iter()
            .map(|&rating| self.update_home(rating, home_mean, opponent_result))
            .collect();

        Ok(TeamOutcome { home, opponent })
    }
}
