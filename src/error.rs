//! Error types for the rating engine
//!
//! Rating operations report recoverable input problems through
//! [`RatingError`]. Application-level configuration loading uses `anyhow`
//! (see [`crate::config`]).

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, RatingError>;

/// Errors reported by rating calculations and engine configuration
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RatingError {
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("Invalid K-factor: {value} (must be a finite number)")]
    InvalidKFactor { value: f64 },

    #[error("Invalid match result: {value} (expected a value in 0.0..=1.0)")]
    InvalidMatchResult { value: f64 },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
