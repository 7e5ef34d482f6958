//! Elo Engine - Elo rating updates for competitive matches
//!
//! This crate computes new ratings after one-versus-one duels,
//! team-versus-team matches and free-for-all rankings. Every mode is built
//! on the same pairwise Elo update, parameterised by an engine-owned
//! K-factor.
//!
//! ```
//! use elo_engine::{EloRatingEngine, MatchResult};
//!
//! let engine = EloRatingEngine::default();
//! let outcome = engine.update_one_vs_one(1000.0, 1000.0, MatchResult::WIN);
//! assert_eq!(outcome.home.change, 16.0);
//! assert_eq!(outcome.opponent.change, -16.0);
//! ```

pub mod config;
pub mod error;
pub mod rating;
pub mod types;

// Re-export commonly used types and traits
pub use error::{RatingError, Result};
pub use types::*;

// Re-export key components
pub use rating::{EloRatingEngine, ExtendedEloConfig, RatingCalculator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
