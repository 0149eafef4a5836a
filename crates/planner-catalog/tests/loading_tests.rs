use planner_catalog::{Catalog, CatalogError, CostRange, RiskChange};
use pretty_assertions::assert_eq;
use std::io::Write;

const YAML_CATALOG: &str = r#"
scenarios:
  - id: irrigation
    name: Add Irrigation
    icon: "💧"
    description: Install irrigation system for crops
    riskChange: increase
    riskPercentage: 25
    costRange: { min: 2000, max: 8000 }
    explanation: Moist soil favours weeds.
    timeline: 3-6 months to see effects
    bestSeason: Spring/Summer
  - id: planting
    name: Plant Crops
    icon: "🌾"
    description: Establish crop fields
    riskChange: decrease
    riskPercentage: 15
    costRange: { min: 1000, max: 5000 }
    explanation: Crops compete with weeds.
    details: [Crops compete with invasive plants]
    timeline: 6-12 months for full effect
    bestSeason: Spring
    affectedSpecies: [Lantana]
presets:
  - id: starter
    name: Starter
    description: Two practices
    icon: "🌱"
    scenarios: [irrigation, planting]
    recommendedFor: Anyone
"#;

const TOML_CATALOG: &str = r#"
[[scenarios]]
id = "fencing"
name = "Install Fencing"
icon = "🚧"
description = "Add perimeter fencing to property"
riskChange = "decrease"
riskPercentage = 10
explanation = "Fencing stops livestock spreading seed."
timeline = "3-6 months to see effects"
bestSeason = "Any season"
costRange = { min = 3000, max = 10000 }
"#;

fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn yaml_catalog_loads_with_defaults() {
    let catalog = Catalog::from_yaml_str(YAML_CATALOG).unwrap();
    assert_eq!(catalog.len(), 2);

    let irrigation = catalog.get("irrigation").unwrap();
    assert_eq!(irrigation.risk_change, RiskChange::Increase);
    assert_eq!(irrigation.cost_range, CostRange::new(2000, 8000));
    assert!(irrigation.details.is_empty());
    assert!(irrigation.affected_species.is_empty());

    let preset = catalog.preset("starter").unwrap();
    assert_eq!(
        preset.scenario_ids().collect::<Vec<_>>(),
        vec!["irrigation", "planting"]
    );
}

#[test]
fn toml_catalog_without_presets() {
    let catalog = Catalog::from_toml_str(TOML_CATALOG).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.preset_count(), 0);
    assert_eq!(catalog.get("fencing").unwrap().signed_risk(), -10);
}

#[test]
fn builtin_catalog_round_trips_through_json() {
    let json = serde_json::to_string_pretty(Catalog::builtin()).unwrap();
    let parsed = Catalog::from_json_str(&json).unwrap();
    assert_eq!(&parsed, Catalog::builtin());
}

#[test]
fn load_dispatches_on_extension() {
    let yaml = write_temp(".yml", YAML_CATALOG);
    assert_eq!(Catalog::load(yaml.path()).unwrap().len(), 2);

    let toml = write_temp(".toml", TOML_CATALOG);
    assert_eq!(Catalog::load(toml.path()).unwrap().len(), 1);

    let json = write_temp(
        ".JSON",
        &serde_json::to_string(&Catalog::builtin().to_document()).unwrap(),
    );
    assert_eq!(Catalog::load(json.path()).unwrap().len(), 6);
}

#[test]
fn integrity_errors_surface_through_parsers() {
    let duplicated = r#"{"scenarios": [
        {"id": "a", "name": "A", "icon": "*", "description": "", "riskChange": "increase",
         "riskPercentage": 1, "costRange": {"min": 1, "max": 2}, "explanation": "",
         "timeline": "", "bestSeason": ""},
        {"id": "a", "name": "A", "icon": "*", "description": "", "riskChange": "increase",
         "riskPercentage": 1, "costRange": {"min": 1, "max": 2}, "explanation": "",
         "timeline": "", "bestSeason": ""}
    ]}"#;
    let err = Catalog::from_json_str(duplicated).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateScenario(_)));
}

#[test]
fn malformed_documents_report_their_format() {
    assert!(matches!(
        Catalog::from_json_str("{not json").unwrap_err(),
        CatalogError::Json(_)
    ));
    assert!(matches!(
        Catalog::from_yaml_str("scenarios: [unclosed").unwrap_err(),
        CatalogError::Yaml(_)
    ));
    assert!(matches!(
        Catalog::from_toml_str("scenarios = 3").unwrap_err(),
        CatalogError::Toml(_)
    ));
}

#[test]
fn unknown_risk_change_is_rejected() {
    let input = TOML_CATALOG.replace("\"decrease\"", "\"sideways\"");
    assert!(Catalog::from_toml_str(&input).is_err());
}
