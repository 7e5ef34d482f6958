//! Application-level configuration
//!
//! Hosts can describe the engine in a TOML file, override individual values
//! through environment variables, and build an engine from the result.

use crate::config::rating::RatingSettings;
use crate::rating::elo::{EloRatingEngine, ExtendedEloConfig};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use skillratings::elo::EloConfig;
use std::env;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Environment variable overriding the K-factor
pub const K_FACTOR_ENV: &str = "ELO_K_FACTOR";

/// Environment variable overriding the initial rating
pub const INITIAL_RATING_ENV: &str = "ELO_INITIAL_RATING";

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub rating: RatingSettings,
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_overrides(|key| env::var(key).ok())?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Parse configuration from a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).context("Invalid TOML configuration")?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading configuration file");

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to load configuration file {}", path.display()))
    }

    /// Apply overrides from a variable lookup such as the process environment
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(k_factor) = lookup(K_FACTOR_ENV) {
            self.rating.k_factor = k_factor
                .parse()
                .map_err(|_| anyhow!("Invalid {} value: {}", K_FACTOR_ENV, k_factor))?;
        }
        if let Some(initial_rating) = lookup(INITIAL_RATING_ENV) {
            self.rating.initial_rating = initial_rating.parse().map_err(|_| {
                anyhow!("Invalid {} value: {}", INITIAL_RATING_ENV, initial_rating)
            })?;
        }
        Ok(())
    }

    /// Elo configuration described by these settings
    pub fn elo_config(&self) -> ExtendedEloConfig {
        ExtendedEloConfig {
            elo_config: EloConfig {
                k: self.rating.k_factor,
            },
            initial_rating: self.rating.initial_rating,
        }
    }

    /// Build a rating engine from these settings
    pub fn build_engine(&self) -> Result<EloRatingEngine> {
        EloRatingEngine::new(self.elo_config()).context("Failed to build rating engine")
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    if !config.rating.k_factor.is_finite() {
        return Err(anyhow!(
            "K-factor must be a finite number, got {}",
            config.rating.k_factor
        ));
    }

    if !config.rating.initial_rating.is_finite() {
        return Err(anyhow!(
            "Initial rating must be a finite number, got {}",
            config.rating.initial_rating
        ));
    }

    Ok(())
}
