//! Preset bundles
//!
//! Named, fixed lists of scenario ids used to bulk-populate a selection.

use crate::scenario::ScenarioId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Named bundle of scenarios
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PresetBundle {
    /// Bundle identifier (e.g. `beginner`)
    pub id: String,
    /// Display name
    pub name: String,
    /// One-line description
    pub description: String,
    /// Single glyph shown on the bundle card
    pub icon: String,
    /// Scenario ids in display order
    pub scenarios: Vec<ScenarioId>,
    /// Audience the bundle suits
    pub recommended_for: String,
}

impl PresetBundle {
    /// Iterate scenario ids as string slices
    pub fn scenario_ids(&self) -> impl Iterator<Item = &str> {
        self.scenarios.iter().map(ScenarioId::as_str)
    }

    /// Check whether the bundle includes a scenario
    #[inline]
    #[must_use]
    pub fn includes(&self, id: &str) -> bool {
        self.scenarios.iter().any(|s| s.as_str() == id)
    }
}
