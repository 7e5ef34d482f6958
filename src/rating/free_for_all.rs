//! Free-for-all updates
//!
//! A multi-competitor result is decomposed into every pairwise comparison.
//! Each competitor's new rating is its old rating plus the sum of the
//! changes from all of its pairings.

use crate::error::{RatingError, Result};
use crate::rating::elo::EloRatingEngine;
use crate::types::{MatchResult, Rating, RatingChange, Standing};
use std::cmp::Ordering;
use tracing::{debug, trace, warn};

fn pairing_result(home_rank: u32, opponent_rank: u32) -> MatchResult {
    match home_rank.cmp(&opponent_rank) {
        Ordering::Less => MatchResult::WIN,
        Ordering::Greater => MatchResult::LOSS,
        Ordering::Equal => MatchResult::DRAW,
    }
}

impl EloRatingEngine {
    /// Update a free-for-all given ratings in finishing order.
    ///
    /// Index `0` finished first. Every competitor beats everyone listed
    /// after it and loses to everyone listed before it.
    pub fn update_free_for_all(&self, ranked_ratings: &[Rating]) -> Result<Vec<RatingChange>> {
        let standings: Vec<Standing> = ranked_ratings
            .iter()
            .enumerate()
            .map(|(position, &rating)| Standing::new(rating, position as u32))
            .collect();

        self.update_free_for_all_ranked(&standings)
    }

    /// Update a free-for-all given explicit finishing ranks.
    ///
    /// Lower ranks finished better. Competitors sharing a rank are scored
    /// as a draw against each other. Output follows the input order.
    pub fn update_free_for_all_ranked(&self, standings: &[Standing]) -> Result<Vec<RatingChange>> {
        if standings.is_empty() {
            warn!("Rejected free-for-all update with no competitors");
            return Err(RatingError::InvalidArgument {
                reason: "No competitors provided for free-for-all update".to_string(),
            });
        }

        debug!(
            competitors = standings.len(),
            k_factor = self.k_factor(),
            "Free-for-all update"
        );

        let changes = standings
            .iter()
            .enumerate()
            .map(|(home_index, home)| {
                let total_change: f64 = standings
                    .iter()
                    .enumerate()
                    .filter(|&(opponent_index, _)| opponent_index != home_index)
                    .map(|(opponent_index, opponent)| {
                        let result = pairing_result(home.rank, opponent.rank);
                        let change = self.update_home(home.rating, opponent.rating, result).change;
                        trace!(
                            home_index,
                            opponent_index,
                            result = result.value(),
                            change,
                            "Free-for-all pairing"
                        );
                        change
                    })
                    .sum();

                RatingChange::new(home.rating, home.rating + total_change)
            })
            .collect();

        Ok(changes)
    }
}
