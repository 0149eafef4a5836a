//! Scenario records
//!
//! A [`Scenario`] is a single land management action with a fixed, signed
//! effect on invasive plant risk and an estimated cost range.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt::{self, Display, Formatter};

/// Stable scenario identifier (e.g. `irrigation`, `clearing`)
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct ScenarioId(String);

impl ScenarioId {
    /// Create identifier from any string
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow as string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check for the empty identifier
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for ScenarioId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ScenarioId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ScenarioId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ScenarioId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ScenarioId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Direction of a scenario's effect on risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RiskChange {
    /// Raises invasive plant risk
    Increase,
    /// Lowers invasive plant risk
    Decrease,
}

impl RiskChange {
    /// Sign applied to a magnitude: `+1` or `-1`
    #[inline]
    #[must_use]
    pub const fn sign(self) -> i64 {
        match self {
            Self::Increase => 1,
            Self::Decrease => -1,
        }
    }
}

impl Display for RiskChange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Increase => f.write_str("increase"),
            Self::Decrease => f.write_str("decrease"),
        }
    }
}

/// Estimated cost in whole dollars, `min..=max`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct CostRange {
    /// Lower estimate
    pub min: u32,
    /// Upper estimate
    pub max: u32,
}

impl CostRange {
    /// Create cost range
    #[inline]
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// `min <= max`
    #[inline]
    #[must_use]
    pub const fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}

/// Catalog entry for one land management action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    /// Unique identifier
    pub id: ScenarioId,
    /// Display name
    pub name: String,
    /// Single glyph shown on cards
    pub icon: String,
    /// One-line description
    pub description: String,
    /// Effect direction
    pub risk_change: RiskChange,
    /// Effect magnitude in percent
    pub risk_percentage: u32,
    /// Estimated cost
    pub cost_range: CostRange,
    /// Why the scenario moves risk the way it does
    pub explanation: String,
    /// Bullet points for the breakdown view
    #[serde(default)]
    pub details: Vec<String>,
    /// Time until the effect shows
    pub timeline: String,
    /// Recommended season
    pub best_season: String,
    /// Species most affected
    #[serde(default)]
    pub affected_species: Vec<String>,
}

impl Scenario {
    /// Signed contribution to aggregate risk
    ///
    /// `+risk_percentage` for [`RiskChange::Increase`], `-risk_percentage`
    /// otherwise.
    #[inline]
    #[must_use]
    pub fn signed_risk(&self) -> i64 {
        self.risk_change.sign() * i64::from(self.risk_percentage)
    }

    /// Check whether this scenario raises risk
    #[inline]
    #[must_use]
    pub fn is_increase(&self) -> bool {
        self.risk_change == RiskChange::Increase
    }

    /// Check whether this scenario lowers risk
    #[inline]
    #[must_use]
    pub fn is_decrease(&self) -> bool {
        self.risk_change == RiskChange::Decrease
    }
}
