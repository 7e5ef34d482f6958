//! Elo rating calculations
//!
//! This module provides the pairwise Elo update and the team and
//! free-for-all modes composed from it.

pub mod calculator;
pub mod elo;
pub mod free_for_all;
pub mod team;

// Re-export commonly used types
pub use calculator::RatingCalculator;
pub use elo::{expected_score, transformed_strength, EloRatingEngine, ExtendedEloConfig};
