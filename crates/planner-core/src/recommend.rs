//! Rule-based recommendations
//!
//! The engine walks an ordered decision table of [`RecommendationRule`]s.
//! Each rule pairs a predicate with a candidate list; candidates accumulate
//! in rule order, skipping ids that are already selected, already suggested
//! or absent from the catalog, until the cap is reached.
//!
//! # Default table
//!
//! | # | rule | when | suggests |
//! |---|------|------|----------|
//! | 1 | `starter` | nothing selected | planting, mulching |
//! | 2 | `mitigate_high_risk` | a selected increase is >= threshold | first N unselected decreases |
//! | 3 | `clearing_needs_planting` | clearing without planting | planting |
//! | 4 | `clearing_needs_mulching` | clearing without mulching | mulching |
//! | 5 | `irrigation_needs_planting` | irrigation without planting | planting |

use crate::config::RecommendationConfig;
use crate::selection::Selection;
use planner_catalog::{Catalog, ScenarioId};
use serde::Serialize;
use std::fmt;

/// Irrigation scenario id
pub const IRRIGATION: &str = "irrigation";
/// Bush clearing scenario id
pub const CLEARING: &str = "clearing";
/// Crop planting scenario id
pub const PLANTING: &str = "planting";
/// Mulching scenario id
pub const MULCHING: &str = "mulching";

/// Suggested for an empty selection, in this order
pub const STARTERS: [&str; 2] = [PLANTING, MULCHING];

/// Inputs visible to every rule
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Scenario table
    pub catalog: &'a Catalog,
    /// Current selection
    pub selection: &'a Selection,
    /// Engine tuning
    pub config: &'a RecommendationConfig,
}

type Predicate = fn(&RuleContext<'_>) -> bool;
type Candidates = fn(&RuleContext<'_>) -> Vec<ScenarioId>;

/// One row of the decision table
#[derive(Clone, Copy)]
pub struct RecommendationRule {
    name: &'static str,
    predicate: Predicate,
    candidates: Candidates,
}

impl RecommendationRule {
    /// Create rule from a predicate and a candidate producer
    #[inline]
    #[must_use]
    pub const fn new(name: &'static str, predicate: Predicate, candidates: Candidates) -> Self {
        Self {
            name,
            predicate,
            candidates,
        }
    }

    /// Rule name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Check whether the rule fires
    #[inline]
    #[must_use]
    pub fn applies(&self, ctx: &RuleContext<'_>) -> bool {
        (self.predicate)(ctx)
    }

    /// Candidates if the rule fires, nothing otherwise
    ///
    /// Candidates are raw: the engine filters and caps them.
    #[must_use]
    pub fn evaluate(&self, ctx: &RuleContext<'_>) -> Vec<ScenarioId> {
        if self.applies(ctx) {
            (self.candidates)(ctx)
        } else {
            Vec::new()
        }
    }
}

impl fmt::Debug for RecommendationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecommendationRule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

fn selection_is_empty(ctx: &RuleContext<'_>) -> bool {
    ctx.selection.is_empty()
}

fn starters(_ctx: &RuleContext<'_>) -> Vec<ScenarioId> {
    STARTERS.iter().copied().map(ScenarioId::from).collect()
}

fn has_high_risk(ctx: &RuleContext<'_>) -> bool {
    ctx.catalog
        .resolve(ctx.selection.iter())
        .any(|s| s.is_increase() && s.risk_percentage >= ctx.config.high_risk_threshold)
}

fn unselected_decreases(ctx: &RuleContext<'_>) -> Vec<ScenarioId> {
    ctx.catalog
        .scenarios()
        .filter(|s| s.is_decrease() && !ctx.selection.contains(s.id.as_str()))
        .take(ctx.config.mitigation_suggestions)
        .map(|s| s.id.clone())
        .collect()
}

fn clearing_without_planting(ctx: &RuleContext<'_>) -> bool {
    ctx.selection.contains(CLEARING) && !ctx.selection.contains(PLANTING)
}

fn clearing_without_mulching(ctx: &RuleContext<'_>) -> bool {
    ctx.selection.contains(CLEARING) && !ctx.selection.contains(MULCHING)
}

fn irrigation_without_planting(ctx: &RuleContext<'_>) -> bool {
    ctx.selection.contains(IRRIGATION) && !ctx.selection.contains(PLANTING)
}

fn planting(_ctx: &RuleContext<'_>) -> Vec<ScenarioId> {
    vec![ScenarioId::from(PLANTING)]
}

fn mulching(_ctx: &RuleContext<'_>) -> Vec<ScenarioId> {
    vec![ScenarioId::from(MULCHING)]
}

/// The five editorial rules, highest priority first
#[must_use]
pub fn default_rules() -> Vec<RecommendationRule> {
    vec![
        RecommendationRule::new("starter", selection_is_empty, starters),
        RecommendationRule::new("mitigate_high_risk", has_high_risk, unselected_decreases),
        RecommendationRule::new("clearing_needs_planting", clearing_without_planting, planting),
        RecommendationRule::new("clearing_needs_mulching", clearing_without_mulching, mulching),
        RecommendationRule::new(
            "irrigation_needs_planting",
            irrigation_without_planting,
            planting,
        ),
    ]
}

/// A suggestion and the rule that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// Suggested scenario
    pub id: ScenarioId,
    /// Producing rule
    pub rule: &'static str,
}

/// Ordered decision table with accumulate-and-cap semantics
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    rules: Vec<RecommendationRule>,
    config: RecommendationConfig,
}

impl RecommendationEngine {
    /// Engine with the default rule table
    #[inline]
    #[must_use]
    pub fn new(config: RecommendationConfig) -> Self {
        Self::with_rules(config, default_rules())
    }

    /// Engine with a custom rule table
    #[inline]
    #[must_use]
    pub fn with_rules(config: RecommendationConfig, rules: Vec<RecommendationRule>) -> Self {
        Self { rules, config }
    }

    /// Suggestions with the rule that produced each
    ///
    /// Never returns an id that is selected, unknown to the catalog, or
    /// already suggested; never returns more than `max_suggestions` items.
    #[must_use]
    pub fn explain(&self, catalog: &Catalog, selection: &Selection) -> Vec<Recommendation> {
        let ctx = RuleContext {
            catalog,
            selection,
            config: &self.config,
        };
        let cap = self.config.max_suggestions;
        let mut out: Vec<Recommendation> = Vec::with_capacity(cap);

        for rule in &self.rules {
            if out.len() >= cap {
                break;
            }
            for id in rule.evaluate(&ctx) {
                if out.len() >= cap {
                    break;
                }
                let skip = selection.contains(id.as_str())
                    || !catalog.contains(id.as_str())
                    || out.iter().any(|r| r.id == id);
                if !skip {
                    out.push(Recommendation {
                        id,
                        rule: rule.name(),
                    });
                }
            }
        }

        tracing::debug!(
            selected = selection.len(),
            suggested = out.len(),
            "computed recommendations"
        );
        out
    }

    /// Suggested scenario ids, highest priority first
    #[must_use]
    pub fn recommend(&self, catalog: &Catalog, selection: &Selection) -> Vec<ScenarioId> {
        self.explain(catalog, selection)
            .into_iter()
            .map(|r| r.id)
            .collect()
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(RecommendationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(selection: &[&str]) -> Vec<String> {
        let selection: Selection = selection.iter().copied().collect();
        RecommendationEngine::default()
            .recommend(Catalog::builtin(), &selection)
            .into_iter()
            .map(|id| id.to_string())
            .collect()
    }

    fn rule(name: &str) -> RecommendationRule {
        default_rules()
            .into_iter()
            .find(|r| r.name() == name)
            .unwrap()
    }

    fn context<'a>(
        selection: &'a Selection,
        config: &'a RecommendationConfig,
    ) -> RuleContext<'a> {
        RuleContext {
            catalog: Catalog::builtin(),
            selection,
            config,
        }
    }

    #[test]
    fn empty_selection_gets_starters() {
        assert_eq!(ids(&[]), vec!["planting", "mulching"]);
    }

    #[test]
    fn clearing_gets_mitigation_then_mulching() {
        assert_eq!(ids(&["clearing"]), vec!["planting", "fencing", "mulching"]);
    }

    #[test]
    fn irrigation_alone_suggests_planting() {
        // 25% is below the high-risk threshold
        assert_eq!(ids(&["irrigation"]), vec!["planting"]);
    }

    #[test]
    fn burning_hits_threshold_exactly() {
        assert_eq!(ids(&["burning"]), vec!["planting", "fencing"]);
    }

    #[test]
    fn mitigation_skips_selected_decreases() {
        assert_eq!(
            ids(&["clearing", "planting"]),
            vec!["fencing", "mulching"]
        );
    }

    #[test]
    fn decreases_only_selection_gets_nothing() {
        assert!(ids(&["planting", "mulching"]).is_empty());
        assert!(ids(&["fencing"]).is_empty());
    }

    #[test]
    fn unknown_only_selection_gets_nothing() {
        assert!(ids(&["ghost"]).is_empty());
    }

    #[test]
    fn fully_mitigated_plan_gets_nothing() {
        assert!(ids(&["clearing", "planting", "fencing", "mulching"]).is_empty());
    }

    #[test]
    fn cap_is_respected() {
        let selection: Selection = ["clearing"].into_iter().collect();
        let config = RecommendationConfig {
            max_suggestions: 1,
            ..RecommendationConfig::default()
        };
        let engine = RecommendationEngine::new(config);
        assert_eq!(
            engine.recommend(Catalog::builtin(), &selection),
            vec![ScenarioId::from("planting")]
        );
    }

    #[test]
    fn explain_names_producing_rule() {
        let selection: Selection = ["clearing"].into_iter().collect();
        let explained = RecommendationEngine::default().explain(Catalog::builtin(), &selection);
        let rules: Vec<&str> = explained.iter().map(|r| r.rule).collect();
        assert_eq!(
            rules,
            vec![
                "mitigate_high_risk",
                "mitigate_high_risk",
                "clearing_needs_mulching"
            ]
        );
    }

    #[test]
    fn starter_rule_only_fires_when_empty() {
        let config = RecommendationConfig::default();
        let empty = Selection::new();
        let some: Selection = ["fencing"].into_iter().collect();
        assert!(rule("starter").applies(&context(&empty, &config)));
        assert!(!rule("starter").applies(&context(&some, &config)));
    }

    #[test]
    fn mitigation_rule_honours_threshold() {
        let selection: Selection = ["irrigation"].into_iter().collect();
        let strict = RecommendationConfig::default();
        let lenient = RecommendationConfig {
            high_risk_threshold: 25,
            ..RecommendationConfig::default()
        };
        assert!(!rule("mitigate_high_risk").applies(&context(&selection, &strict)));
        assert_eq!(
            rule("mitigate_high_risk").evaluate(&context(&selection, &lenient)),
            vec![ScenarioId::from("planting"), ScenarioId::from("fencing")]
        );
    }

    #[test]
    fn clearing_rules_check_their_own_partner() {
        let config = RecommendationConfig::default();
        let with_mulch: Selection = ["clearing", "mulching"].into_iter().collect();
        assert!(rule("clearing_needs_planting").applies(&context(&with_mulch, &config)));
        assert!(!rule("clearing_needs_mulching").applies(&context(&with_mulch, &config)));
    }

    #[test]
    fn irrigation_rule_requires_missing_planting() {
        let config = RecommendationConfig::default();
        let both: Selection = ["irrigation", "planting"].into_iter().collect();
        assert!(!rule("irrigation_needs_planting").applies(&context(&both, &config)));
        assert!(rule("irrigation_needs_planting")
            .evaluate(&context(&both, &config))
            .is_empty());
    }

    #[test]
    fn custom_table_runs_in_order() {
        fn always(_: &RuleContext<'_>) -> bool {
            true
        }
        fn burning(_: &RuleContext<'_>) -> Vec<ScenarioId> {
            vec![ScenarioId::from("burning"), ScenarioId::from("ghost")]
        }
        let engine = RecommendationEngine::with_rules(
            RecommendationConfig::default(),
            vec![RecommendationRule::new("always_burn", always, burning)],
        );
        let explained = engine.explain(Catalog::builtin(), &Selection::new());
        assert_eq!(
            explained,
            vec![Recommendation {
                id: ScenarioId::from("burning"),
                rule: "always_burn",
            }]
        );
    }
}
