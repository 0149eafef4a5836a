//! Planner configuration
//!
//! Every key is optional; missing tables fall back to the defaults.
//!
//! ```toml
//! [recommendation]
//! max_suggestions = 3
//! high_risk_threshold = 30
//! mitigation_suggestions = 2
//!
//! [gauge]
//! min = -50
//! max = 50
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Recommendation engine tuning
    pub recommendation: RecommendationConfig,
    /// Risk gauge bounds
    pub gauge: GaugeConfig,
}

impl PlannerConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document
    ///
    /// # Errors
    /// [`ConfigError::Parse`] for malformed input,
    /// [`ConfigError::EmptyGaugeRange`] for inverted gauge bounds.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file
    ///
    /// # Errors
    /// [`ConfigError::Io`] when the file cannot be read, plus any error from
    /// [`PlannerConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&input)?;
        tracing::debug!(path = %path.display(), ?config, "loaded planner config");
        Ok(config)
    }

    /// Check cross-field constraints
    ///
    /// # Errors
    /// [`ConfigError::EmptyGaugeRange`] when `gauge.min >= gauge.max`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gauge.min >= self.gauge.max {
            return Err(ConfigError::EmptyGaugeRange {
                min: self.gauge.min,
                max: self.gauge.max,
            });
        }
        Ok(())
    }
}

/// Recommendation engine tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    /// Maximum number of suggestions returned
    pub max_suggestions: usize,
    /// Magnitude at which a risk-increasing scenario triggers mitigation
    pub high_risk_threshold: u32,
    /// Number of risk-decreasing scenarios suggested as mitigation
    pub mitigation_suggestions: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            max_suggestions: 3,
            high_risk_threshold: 30,
            mitigation_suggestions: 2,
        }
    }
}

/// Risk gauge bounds
///
/// Values outside `[min, max]` pin the needle to the nearest end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaugeConfig {
    /// Lower bound (needle at -90°)
    pub min: i64,
    /// Upper bound (needle at +90°)
    pub max: i64,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self { min: -50, max: 50 }
    }
}
