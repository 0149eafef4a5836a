//! Error types for the planner
//!
//! Aggregation itself never fails. Errors come from controller actions that
//! name a missing preset and from configuration loading.

use std::path::PathBuf;

/// Main planner error type
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    /// Preset id not present in the catalog
    #[error("unknown preset: '{0}'")]
    UnknownPreset(String),
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Malformed TOML
    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Gauge bounds with `min >= max`
    #[error("gauge range is empty: min {min} must be below max {max}")]
    EmptyGaugeRange {
        /// Lower bound
        min: i64,
        /// Upper bound
        max: i64,
    },
}
