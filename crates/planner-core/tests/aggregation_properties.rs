use planner_catalog::Catalog;
use planner_core::{
    combined_risk, total_cost, GaugeConfig, RecommendationEngine, RiskBand, RiskMeter, Selection,
};
use planner_test_utils::{arb_builtin_subset, arb_ids, selection, two_scenario_catalog};
use proptest::prelude::*;

fn reference_risk(catalog: &Catalog, selection: &Selection) -> i64 {
    catalog
        .scenarios()
        .filter(|s| selection.contains(s.id.as_str()))
        .map(|s| s.risk_change.sign() * i64::from(s.risk_percentage))
        .sum()
}

#[test]
fn two_scenario_example() {
    let catalog = two_scenario_catalog();
    let chosen = selection(&["irrigation", "planting"]);

    let risk = combined_risk(&catalog, chosen.iter());
    assert_eq!(risk, 10);
    assert_eq!(RiskBand::classify(risk).label(), "Slight Risk");
    assert_eq!(total_cost(&catalog, chosen.iter()).as_pair(), (3_000, 13_000));
}

#[test]
fn empty_selection_aggregates_to_zero() {
    let catalog = Catalog::builtin();
    let empty = Selection::new();
    assert_eq!(combined_risk(catalog, empty.iter()), 0);
    assert_eq!(total_cost(catalog, empty.iter()).as_pair(), (0, 0));
}

proptest! {
    #[test]
    fn prop_risk_matches_catalog_sum(ids in arb_ids()) {
        let catalog = Catalog::builtin();
        let chosen: Selection = ids.iter().map(String::as_str).collect();
        prop_assert_eq!(
            combined_risk(catalog, chosen.iter()),
            reference_risk(catalog, &chosen)
        );
    }

    #[test]
    fn prop_aggregation_is_order_independent(ids in arb_builtin_subset()) {
        let catalog = Catalog::builtin();
        let mut reversed = ids.clone();
        reversed.reverse();

        prop_assert_eq!(combined_risk(catalog, &ids), combined_risk(catalog, &reversed));
        prop_assert_eq!(total_cost(catalog, &ids), total_cost(catalog, &reversed));
    }

    #[test]
    fn prop_unknown_ids_change_nothing(ids in arb_builtin_subset()) {
        let catalog = Catalog::builtin();
        let mut noisy = ids.clone();
        noisy.insert(0, "ghost".to_string());
        noisy.push("not-a-scenario".to_string());

        prop_assert_eq!(combined_risk(catalog, &ids), combined_risk(catalog, &noisy));
        prop_assert_eq!(
            total_cost(catalog, &ids).as_pair(),
            total_cost(catalog, &noisy).as_pair()
        );
    }

    #[test]
    fn prop_cost_min_never_exceeds_max(ids in arb_ids()) {
        let catalog = Catalog::builtin();
        let chosen: Selection = ids.iter().map(String::as_str).collect();
        let cost = total_cost(catalog, chosen.iter());
        prop_assert!(cost.min <= cost.max);
    }

    #[test]
    fn prop_recommendations_are_capped_fresh_and_unique(ids in arb_ids()) {
        let catalog = Catalog::builtin();
        let chosen: Selection = ids.iter().map(String::as_str).collect();
        let recs = RecommendationEngine::default().recommend(catalog, &chosen);

        prop_assert!(recs.len() <= 3);
        for (i, id) in recs.iter().enumerate() {
            prop_assert!(!chosen.contains(id.as_str()));
            prop_assert!(catalog.contains(id.as_str()));
            prop_assert!(!recs[..i].contains(id));
        }
    }

    #[test]
    fn prop_band_ignores_gauge_clamp(risk in any::<i32>()) {
        let risk = i64::from(risk);
        let meter = RiskMeter::read(risk, GaugeConfig::default());
        prop_assert_eq!(meter.band, RiskBand::classify(risk));
        prop_assert!((-50..=50).contains(&meter.gauge.clamped));
        prop_assert!((-90.0..=90.0).contains(&meter.gauge.angle_degrees));
    }

    #[test]
    fn prop_bands_are_monotonic(a in -200i64..200, b in -200i64..200) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(RiskBand::classify(lo) <= RiskBand::classify(hi));
    }
}
