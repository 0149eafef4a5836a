//! Testing utilities for the Patch Planner workspace
//!
//! Shared fixtures, builders and proptest strategies.

#![allow(missing_docs)]

use planner_catalog::{Catalog, CostRange, PresetBundle, RiskChange, Scenario, ScenarioId};
use planner_core::Selection;
use proptest::prelude::*;

/// Ids that no catalog fixture contains
pub const UNKNOWN_IDS: [&str; 3] = ["ghost", "", "IRRIGATION"];

pub fn scenario(id: &str, change: RiskChange, percentage: u32, min: u32, max: u32) -> Scenario {
    Scenario {
        id: ScenarioId::new(id),
        name: id.to_string(),
        icon: "*".to_string(),
        description: format!("{id} fixture"),
        risk_change: change,
        risk_percentage: percentage,
        cost_range: CostRange::new(min, max),
        explanation: String::new(),
        details: Vec::new(),
        timeline: "soon".to_string(),
        best_season: "any".to_string(),
        affected_species: Vec::new(),
    }
}

pub fn preset(id: &str, scenarios: &[&str]) -> PresetBundle {
    PresetBundle {
        id: id.to_string(),
        name: id.to_string(),
        description: String::new(),
        icon: "*".to_string(),
        scenarios: scenarios.iter().copied().map(ScenarioId::from).collect(),
        recommended_for: String::new(),
    }
}

/// Two-scenario catalog: irrigation (+25, $2000-$8000) and planting
/// (-15, $1000-$5000)
pub fn two_scenario_catalog() -> Catalog {
    Catalog::new(
        vec![
            scenario("irrigation", RiskChange::Increase, 25, 2_000, 8_000),
            scenario("planting", RiskChange::Decrease, 15, 1_000, 5_000),
        ],
        vec![preset("both", &["irrigation", "planting", "ghost"])],
    )
    .unwrap()
}

pub fn selection(ids: &[&str]) -> Selection {
    ids.iter().copied().collect()
}

pub fn builtin_ids() -> Vec<String> {
    Catalog::builtin().ids().map(ToString::to_string).collect()
}

/// Any id from the built-in catalog or from [`UNKNOWN_IDS`]
pub fn arb_id() -> impl Strategy<Value = String> {
    let mut pool = builtin_ids();
    pool.extend(UNKNOWN_IDS.iter().map(|s| (*s).to_string()));
    proptest::sample::select(pool)
}

/// Up to ten ids, duplicates allowed
pub fn arb_ids() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(arb_id(), 0..10)
}

/// Duplicate-free subset of built-in ids in random order
pub fn arb_builtin_subset() -> impl Strategy<Value = Vec<String>> {
    proptest::sample::subsequence(builtin_ids(), 0..=builtin_ids().len())
        .prop_shuffle()
}
