//! Plan summary
//!
//! A serializable snapshot of everything derived from a selection, with a
//! plain-text rendering for terminals.

use crate::aggregate::CostTotal;
use crate::meter::RiskMeter;
use crate::recommend::Recommendation;
use planner_catalog::ScenarioId;
use serde::Serialize;
use std::fmt::{self, Display, Formatter};

/// One selected scenario as shown in the plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanLine {
    /// Scenario id
    pub id: ScenarioId,
    /// Display name
    pub name: String,
    /// Glyph
    pub icon: String,
    /// Signed effect, e.g. `+25%`
    pub badge: String,
    /// Cost range, e.g. `$2,000 - $8,000`
    pub cost: String,
    /// Time until the effect shows
    pub timeline: String,
}

/// Everything derived from the current selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanSummary {
    /// Known selected scenarios in insertion order
    pub selected: Vec<PlanLine>,
    /// Selected ids absent from the catalog
    pub ignored: Vec<String>,
    /// `n of total scenarios selected`
    pub progress: String,
    /// Signed aggregate risk
    pub combined_risk: i64,
    /// Signed aggregate risk as text, e.g. `+10%`
    pub combined_risk_text: String,
    /// Band label
    pub label: &'static str,
    /// Band color
    pub color: &'static str,
    /// Band glyph
    pub glyph: &'static str,
    /// Band and gauge reading
    pub meter: RiskMeter,
    /// Aggregated cost
    pub cost: CostTotal,
    /// Aggregated cost as text
    pub cost_text: String,
    /// Suggestions with their producing rule
    pub recommendations: Vec<Recommendation>,
}

impl Display for PlanSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Patch Plan")?;
        writeln!(f, "==========")?;
        writeln!(f, "{}", self.progress)?;
        writeln!(f)?;

        if self.selected.is_empty() {
            writeln!(f, "No scenarios selected.")?;
        } else {
            for line in &self.selected {
                writeln!(
                    f,
                    "  {} {} {}  {}  {}",
                    line.icon, line.name, line.badge, line.cost, line.timeline
                )?;
            }
        }
        if !self.ignored.is_empty() {
            writeln!(f, "  (ignored unknown: {})", self.ignored.join(", "))?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "Combined risk: {} {} ({})",
            self.combined_risk_text, self.glyph, self.label
        )?;
        writeln!(f, "Gauge: {:+.1}°", self.meter.gauge.angle_degrees)?;
        writeln!(f, "Total estimated cost: {}", self.cost_text)?;

        if !self.recommendations.is_empty() {
            writeln!(f)?;
            writeln!(f, "Recommended next:")?;
            for rec in &self.recommendations {
                writeln!(f, "  - {}", rec.id)?;
            }
        }
        Ok(())
    }
}
