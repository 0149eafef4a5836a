//! Error types for catalog construction and loading
//!
//! Covers:
//! - Integrity violations (duplicate ids, inverted cost ranges)
//! - Parse failures for JSON, YAML and TOML documents
//! - File access

use std::path::PathBuf;

/// Errors raised while building or loading a [`Catalog`](crate::Catalog)
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Scenario with an empty id
    #[error("scenario id must not be empty")]
    EmptyId,

    /// Two scenarios share an id
    #[error("duplicate scenario id: '{0}'")]
    DuplicateScenario(String),

    /// Two presets share an id
    #[error("duplicate preset id: '{0}'")]
    DuplicatePreset(String),

    /// Cost range with `min > max`
    #[error("inverted cost range for '{id}': min {min} exceeds max {max}")]
    InvertedCostRange {
        /// Offending scenario
        id: String,
        /// Lower bound
        min: u32,
        /// Upper bound
        max: u32,
    },

    /// File extension not recognised
    #[error("unsupported catalog format: '{0}'")]
    UnsupportedFormat(String),

    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON document
    #[error("invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed YAML document
    #[error("invalid YAML catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Malformed TOML document
    #[error("invalid TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),
}

impl CatalogError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Check whether the error is an integrity violation rather than a
    /// parse or IO failure
    #[inline]
    #[must_use]
    pub fn is_integrity(&self) -> bool {
        matches!(
            self,
            Self::EmptyId
                | Self::DuplicateScenario(_)
                | Self::DuplicatePreset(_)
                | Self::InvertedCostRange { .. }
        )
    }
}
