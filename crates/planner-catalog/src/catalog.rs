//! Scenario catalog
//!
//! Provides [`Catalog`], an immutable table of scenarios and preset bundles
//! indexed by id while preserving catalog order.

use crate::builtin;
use crate::error::CatalogError;
use crate::preset::PresetBundle;
use crate::scenario::{Scenario, ScenarioId};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use schemars::schema::RootSchema;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

static BUILTIN: Lazy<Catalog> = Lazy::new(builtin::catalog);

/// Serialized form of a catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CatalogDocument {
    /// Scenarios in catalog order
    pub scenarios: Vec<Scenario>,
    /// Preset bundles
    #[serde(default)]
    pub presets: Vec<PresetBundle>,
}

/// Immutable scenario table
///
/// Lookups never fail loudly: callers ask with [`Catalog::get`] and skip ids
/// that are not present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogDocument", into = "CatalogDocument")]
pub struct Catalog {
    scenarios: IndexMap<ScenarioId, Scenario>,
    presets: IndexMap<String, PresetBundle>,
}

impl Catalog {
    /// Build a validated catalog
    ///
    /// # Errors
    /// - [`CatalogError::EmptyId`] for a scenario with an empty id
    /// - [`CatalogError::DuplicateScenario`] when two scenarios share an id
    /// - [`CatalogError::InvertedCostRange`] when `min > max`
    /// - [`CatalogError::DuplicatePreset`] when two presets share an id
    pub fn new(
        scenarios: Vec<Scenario>,
        presets: Vec<PresetBundle>,
    ) -> Result<Self, CatalogError> {
        let mut by_id = IndexMap::with_capacity(scenarios.len());
        for scenario in scenarios {
            if scenario.id.is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if !scenario.cost_range.is_ordered() {
                return Err(CatalogError::InvertedCostRange {
                    id: scenario.id.to_string(),
                    min: scenario.cost_range.min,
                    max: scenario.cost_range.max,
                });
            }
            if by_id.contains_key(&scenario.id) {
                return Err(CatalogError::DuplicateScenario(scenario.id.to_string()));
            }
            by_id.insert(scenario.id.clone(), scenario);
        }

        let mut by_preset = IndexMap::with_capacity(presets.len());
        for preset in presets {
            if by_preset.contains_key(&preset.id) {
                return Err(CatalogError::DuplicatePreset(preset.id));
            }
            for id in preset.scenario_ids().filter(|id| !by_id.contains_key(*id)) {
                tracing::warn!(preset = %preset.id, scenario = id, "preset references unknown scenario");
            }
            by_preset.insert(preset.id.clone(), preset);
        }

        Ok(Self {
            scenarios: by_id,
            presets: by_preset,
        })
    }

    /// Built-in catalog, constructed once on first use
    #[inline]
    #[must_use]
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Assemble from parts that are already known to be valid
    pub(crate) fn from_trusted(scenarios: Vec<Scenario>, presets: Vec<PresetBundle>) -> Self {
        Self {
            scenarios: scenarios.into_iter().map(|s| (s.id.clone(), s)).collect(),
            presets: presets.into_iter().map(|p| (p.id.clone(), p)).collect(),
        }
    }

    /// Parse and validate a JSON document
    ///
    /// # Errors
    /// Returns [`CatalogError::Json`] for malformed input, or any integrity
    /// error from [`Catalog::new`].
    pub fn from_json_str(input: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(input)?;
        Self::try_from(document)
    }

    /// Parse and validate a YAML document
    ///
    /// # Errors
    /// Returns [`CatalogError::Yaml`] for malformed input, or any integrity
    /// error from [`Catalog::new`].
    pub fn from_yaml_str(input: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_yaml::from_str(input)?;
        Self::try_from(document)
    }

    /// Parse and validate a TOML document
    ///
    /// # Errors
    /// Returns [`CatalogError::Toml`] for malformed input, or any integrity
    /// error from [`Catalog::new`].
    pub fn from_toml_str(input: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = toml::from_str(input)?;
        Self::try_from(document)
    }

    /// Load a catalog file, choosing the parser by extension
    ///
    /// Recognised extensions: `json`, `yaml`, `yml`, `toml`.
    ///
    /// # Errors
    /// [`CatalogError::UnsupportedFormat`] for other extensions,
    /// [`CatalogError::Io`] when the file cannot be read, plus any parse or
    /// integrity error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let parse: fn(&str) -> Result<Self, CatalogError> = match extension.as_str() {
            "json" => Self::from_json_str,
            "yaml" | "yml" => Self::from_yaml_str,
            "toml" => Self::from_toml_str,
            other => return Err(CatalogError::UnsupportedFormat(other.to_string())),
        };

        let input =
            std::fs::read_to_string(path).map_err(|e| CatalogError::io_error(path, e))?;
        let catalog = parse(&input)?;
        tracing::info!(
            path = %path.display(),
            scenarios = catalog.len(),
            presets = catalog.preset_count(),
            "loaded scenario catalog"
        );
        Ok(catalog)
    }

    /// JSON schema of [`CatalogDocument`]
    #[must_use]
    pub fn json_schema() -> RootSchema {
        schemars::schema_for!(CatalogDocument)
    }

    /// Serializable snapshot of this catalog
    #[must_use]
    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument::from(self.clone())
    }

    /// Look up a scenario by id
    #[inline]
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.get(id)
    }

    /// Check whether a scenario id exists
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.scenarios.contains_key(id)
    }

    /// Iterate scenarios in catalog order
    pub fn scenarios(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios.values()
    }

    /// Iterate scenario ids in catalog order
    pub fn ids(&self) -> impl Iterator<Item = &ScenarioId> {
        self.scenarios.keys()
    }

    /// Position of a scenario in catalog order
    #[inline]
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.scenarios.get_index_of(id)
    }

    /// Resolve ids to scenarios, skipping unknown ids
    pub fn resolve<'a, I>(&'a self, ids: I) -> impl Iterator<Item = &'a Scenario> + 'a
    where
        I: IntoIterator + 'a,
        I::Item: AsRef<str>,
        I::IntoIter: 'a,
    {
        ids.into_iter().filter_map(move |id| self.get(id.as_ref()))
    }

    /// Number of scenarios
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Check whether the catalog has no scenarios
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Look up a preset bundle by id
    #[inline]
    #[must_use]
    pub fn preset(&self, id: &str) -> Option<&PresetBundle> {
        self.presets.get(id)
    }

    /// Iterate preset bundles in declaration order
    pub fn presets(&self) -> impl Iterator<Item = &PresetBundle> {
        self.presets.values()
    }

    /// Number of preset bundles
    #[inline]
    #[must_use]
    pub fn preset_count(&self) -> usize {
        self.presets.len()
    }
}

impl TryFrom<CatalogDocument> for Catalog {
    type Error = CatalogError;

    fn try_from(document: CatalogDocument) -> Result<Self, Self::Error> {
        Self::new(document.scenarios, document.presets)
    }
}

impl From<Catalog> for CatalogDocument {
    fn from(catalog: Catalog) -> Self {
        Self {
            scenarios: catalog.scenarios.into_values().collect(),
            presets: catalog.presets.into_values().collect(),
        }
    }
}
