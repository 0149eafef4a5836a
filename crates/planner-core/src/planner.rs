//! Page-level planner controller
//!
//! [`Planner`] owns the selection and applies user actions to it. Everything
//! it reports is recomputed from `(catalog, selection)` on demand; there is
//! no cached derived state.

use crate::aggregate::{self, CostTotal};
use crate::config::{GaugeConfig, PlannerConfig};
use crate::error::PlannerError;
use crate::format;
use crate::meter::RiskMeter;
use crate::recommend::{Recommendation, RecommendationEngine};
use crate::selection::{Selection, Toggle};
use crate::summary::{PlanLine, PlanSummary};
use planner_catalog::{Catalog, PresetBundle, Scenario};

/// Selection owner for one planning session
#[derive(Debug, Clone)]
pub struct Planner<'c> {
    catalog: &'c Catalog,
    selection: Selection,
    engine: RecommendationEngine,
    gauge: GaugeConfig,
    presets_dismissed: bool,
}

impl<'c> Planner<'c> {
    /// Planner with default configuration
    #[inline]
    #[must_use]
    pub fn new(catalog: &'c Catalog) -> Self {
        Self::with_config(catalog, PlannerConfig::default())
    }

    /// Planner with explicit configuration
    #[must_use]
    pub fn with_config(catalog: &'c Catalog, config: PlannerConfig) -> Self {
        Self {
            catalog,
            selection: Selection::new(),
            engine: RecommendationEngine::new(config.recommendation),
            gauge: config.gauge,
            presets_dismissed: false,
        }
    }

    /// Scenario table in use
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Current selection
    #[inline]
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Add a scenario, returning `false` if already selected
    pub fn add(&mut self, id: &str) -> bool {
        let added = self.selection.insert(id);
        if added {
            self.presets_dismissed = true;
            tracing::debug!(scenario = id, known = self.catalog.contains(id), "added scenario");
        }
        added
    }

    /// Remove a scenario, returning `false` if it was not selected
    pub fn remove(&mut self, id: &str) -> bool {
        let removed = self.selection.remove(id);
        if removed {
            tracing::debug!(scenario = id, "removed scenario");
        }
        removed
    }

    /// Tap behaviour: add if absent, remove if present
    pub fn toggle(&mut self, id: &str) -> Toggle {
        let outcome = self.selection.toggle(id);
        if outcome == Toggle::Added {
            self.presets_dismissed = true;
        }
        tracing::debug!(scenario = id, ?outcome, "toggled scenario");
        outcome
    }

    /// Empty the selection and show presets again
    pub fn clear(&mut self) {
        self.selection.clear();
        self.presets_dismissed = false;
        tracing::debug!("cleared selection");
    }

    /// Replace the selection with a preset's scenarios
    ///
    /// Unknown ids inside the preset are kept and ignored by aggregation.
    ///
    /// # Errors
    /// [`PlannerError::UnknownPreset`] if the catalog has no such preset; the
    /// selection is left unchanged.
    pub fn load_preset(&mut self, preset_id: &str) -> Result<&'c PresetBundle, PlannerError> {
        let catalog = self.catalog;
        let preset = catalog
            .preset(preset_id)
            .ok_or_else(|| PlannerError::UnknownPreset(preset_id.to_string()))?;
        self.selection.replace(preset.scenarios.iter().cloned());
        self.presets_dismissed = true;
        tracing::debug!(preset = preset_id, selected = self.selection.len(), "loaded preset");
        Ok(preset)
    }

    /// Hide the preset picker without selecting anything
    #[inline]
    pub fn dismiss_presets(&mut self) {
        self.presets_dismissed = true;
    }

    /// Whether the preset picker should be shown
    #[inline]
    #[must_use]
    pub fn presets_visible(&self) -> bool {
        !self.presets_dismissed && self.selection.is_empty()
    }

    /// Signed aggregate risk
    #[must_use]
    pub fn combined_risk(&self) -> i64 {
        aggregate::combined_risk(self.catalog, self.selection.iter())
    }

    /// Aggregated cost range
    #[must_use]
    pub fn total_cost(&self) -> CostTotal {
        aggregate::total_cost(self.catalog, self.selection.iter())
    }

    /// Suggestions for the current selection
    #[must_use]
    pub fn recommendations(&self) -> Vec<Recommendation> {
        self.engine.explain(self.catalog, &self.selection)
    }

    /// Meter reading for the current aggregate risk
    #[must_use]
    pub fn meter(&self) -> RiskMeter {
        RiskMeter::read(self.combined_risk(), self.gauge)
    }

    /// Known selected scenarios in insertion order
    #[must_use]
    pub fn selected_scenarios(&self) -> Vec<&'c Scenario> {
        let catalog = self.catalog;
        self.selection.iter().filter_map(|id| catalog.get(id)).collect()
    }

    /// Selected ids that the catalog does not know
    pub fn ignored_ids(&self) -> impl Iterator<Item = &str> {
        self.selection
            .iter()
            .filter(move |id| !self.catalog.contains(id))
    }

    /// Snapshot of everything derived from the selection
    #[must_use]
    pub fn summary(&self) -> PlanSummary {
        let combined_risk = self.combined_risk();
        let meter = RiskMeter::read(combined_risk, self.gauge);
        let cost = self.total_cost();

        let selected = self
            .selected_scenarios()
            .into_iter()
            .map(|s| PlanLine {
                id: s.id.clone(),
                name: s.name.clone(),
                icon: s.icon.clone(),
                badge: format::badge(s),
                cost: format::cost_range(s.cost_range),
                timeline: s.timeline.clone(),
            })
            .collect();

        PlanSummary {
            selected,
            ignored: self.ignored_ids().map(str::to_string).collect(),
            progress: format::selection_count(self.selection.len(), self.catalog.len()),
            combined_risk,
            combined_risk_text: format::signed_percent(combined_risk),
            label: meter.band.label(),
            color: meter.band.color(),
            glyph: meter.band.glyph(),
            meter,
            cost,
            cost_text: format::cost_total(&cost),
            recommendations: self.recommendations(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meter::RiskBand;

    #[test]
    fn new_planner_shows_presets_and_starters() {
        let planner = Planner::new(Catalog::builtin());
        assert!(planner.presets_visible());
        assert_eq!(planner.combined_risk(), 0);
        let recs: Vec<String> = planner
            .recommendations()
            .into_iter()
            .map(|r| r.id.to_string())
            .collect();
        assert_eq!(recs, vec!["planting", "mulching"]);
    }

    #[test]
    fn add_hides_presets_and_clear_restores() {
        let mut planner = Planner::new(Catalog::builtin());
        assert!(planner.add("clearing"));
        assert!(!planner.add("clearing"));
        assert!(!planner.presets_visible());

        planner.clear();
        assert!(planner.selection().is_empty());
        assert!(planner.presets_visible());
    }

    #[test]
    fn dismissed_presets_stay_hidden_after_remove() {
        let mut planner = Planner::new(Catalog::builtin());
        planner.add("fencing");
        planner.remove("fencing");
        assert!(!planner.presets_visible());
    }

    #[test]
    fn toggle_round_trip() {
        let mut planner = Planner::new(Catalog::builtin());
        assert_eq!(planner.toggle("burning"), Toggle::Added);
        assert_eq!(planner.combined_risk(), 30);
        assert_eq!(planner.toggle("burning"), Toggle::Removed);
        assert_eq!(planner.combined_risk(), 0);
    }

    #[test]
    fn load_preset_replaces_selection() {
        let mut planner = Planner::new(Catalog::builtin());
        planner.add("burning");
        let preset = planner.load_preset("intensive").unwrap();
        assert_eq!(preset.name, "Intensive Farming");
        assert_eq!(
            planner.selection().iter().collect::<Vec<_>>(),
            vec!["clearing", "irrigation", "planting", "mulching"]
        );
        // 40 + 25 - 15 - 20
        assert_eq!(planner.combined_risk(), 30);
        assert_eq!(planner.meter().band, RiskBand::High);
    }

    #[test]
    fn unknown_preset_leaves_selection_alone() {
        let mut planner = Planner::new(Catalog::builtin());
        planner.add("mulching");
        let err = planner.load_preset("nope").unwrap_err();
        assert!(matches!(err, PlannerError::UnknownPreset(ref id) if id == "nope"));
        assert_eq!(planner.selection().len(), 1);
    }

    #[test]
    fn unknown_ids_are_listed_but_not_counted() {
        let mut planner = Planner::new(Catalog::builtin());
        planner.add("irrigation");
        planner.add("ghost");
        assert_eq!(planner.combined_risk(), 25);
        assert_eq!(planner.ignored_ids().collect::<Vec<_>>(), vec!["ghost"]);
        assert_eq!(planner.selected_scenarios().len(), 1);
    }

    #[test]
    fn summary_for_irrigation_and_planting() {
        let mut planner = Planner::new(Catalog::builtin());
        planner.add("irrigation");
        planner.add("planting");
        let summary = planner.summary();

        assert_eq!(summary.combined_risk, 10);
        assert_eq!(summary.combined_risk_text, "+10%");
        assert_eq!(summary.label, "Slight Risk");
        assert_eq!(summary.cost.as_pair(), (3_000, 13_000));
        assert_eq!(summary.cost_text, "$3,000 - $13,000");
        assert_eq!(summary.progress, "2 of 6 scenarios selected");
        assert_eq!(summary.selected[0].badge, "+25%");
        assert_eq!(summary.selected[1].cost, "$1,000 - $5,000");
        assert!(summary.recommendations.is_empty());

        let text = summary.to_string();
        assert!(text.contains("Combined risk: +10%"));
        assert!(text.contains("$3,000 - $13,000"));
    }

    #[test]
    fn empty_summary_costs_zero() {
        let summary = Planner::new(Catalog::builtin()).summary();
        assert_eq!(summary.cost_text, "$0");
        assert_eq!(summary.label, "Neutral");
        assert!(summary.to_string().contains("No scenarios selected."));
    }
}
