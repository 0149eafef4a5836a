//! Built-in scenario table and preset bundles

use crate::catalog::Catalog;
use crate::preset::PresetBundle;
use crate::scenario::{CostRange, RiskChange, Scenario, ScenarioId};

struct ScenarioSeed {
    id: &'static str,
    name: &'static str,
    icon: &'static str,
    description: &'static str,
    risk_change: RiskChange,
    risk_percentage: u32,
    cost_range: CostRange,
    explanation: &'static str,
    details: &'static [&'static str],
    timeline: &'static str,
    best_season: &'static str,
    affected_species: &'static [&'static str],
}

struct PresetSeed {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    icon: &'static str,
    scenarios: &'static [&'static str],
    recommended_for: &'static str,
}

const SCENARIOS: &[ScenarioSeed] = &[
    ScenarioSeed {
        id: "irrigation",
        name: "Add Irrigation",
        icon: "💧",
        description: "Install irrigation system for crops",
        risk_change: RiskChange::Increase,
        risk_percentage: 25,
        cost_range: CostRange::new(2_000, 8_000),
        explanation: "Extra irrigation creates moist conditions that many invasive weeds thrive in, \
                      especially during dry periods when native plants struggle.",
        details: &[
            "Increases soil moisture levels",
            "Creates ideal conditions for water-loving weeds",
            "May disrupt natural plant competition",
            "Can lead to overwatering issues",
        ],
        timeline: "3-6 months to see effects",
        best_season: "Spring/Summer",
        affected_species: &["Gamba Grass", "Lantana", "Bitou Bush"],
    },
    ScenarioSeed {
        id: "clearing",
        name: "Clear Bush",
        icon: "🪓",
        description: "Remove native vegetation for farming",
        risk_change: RiskChange::Increase,
        risk_percentage: 40,
        cost_range: CostRange::new(500, 3_000),
        explanation: "Clearing native bush removes natural competition and creates open spaces \
                      where invasive plants can quickly establish and spread.",
        details: &[
            "Removes natural weed competition",
            "Creates disturbed soil conditions",
            "Eliminates native plant barriers",
            "Opens areas for weed colonization",
        ],
        timeline: "Immediate impact",
        best_season: "Autumn/Winter",
        affected_species: &["Lantana", "Gorse", "Buffel Grass", "Gamba Grass"],
    },
    ScenarioSeed {
        id: "planting",
        name: "Plant Crops",
        icon: "🌾",
        description: "Establish crop fields on cleared land",
        risk_change: RiskChange::Decrease,
        risk_percentage: 15,
        cost_range: CostRange::new(1_000, 5_000),
        explanation: "Well-managed crop fields can actually reduce invasive plant risk by creating \
                      competition and regular soil disturbance that prevents weed establishment.",
        details: &[
            "Crops compete with invasive plants",
            "Regular cultivation disrupts weeds",
            "Proper crop rotation prevents buildup",
            "Managed fields reduce open spaces",
        ],
        timeline: "6-12 months for full effect",
        best_season: "Spring",
        affected_species: &["Buffel Grass", "Gamba Grass", "Lantana"],
    },
    ScenarioSeed {
        id: "fencing",
        name: "Install Fencing",
        icon: "🚧",
        description: "Add perimeter fencing to property",
        risk_change: RiskChange::Decrease,
        risk_percentage: 10,
        cost_range: CostRange::new(3_000, 10_000),
        explanation: "Fencing helps control livestock movement and can prevent invasive seeds from \
                      being spread by animals, reducing overall risk.",
        details: &[
            "Controls animal movement patterns",
            "Prevents seed spread by livestock",
            "Creates defined property boundaries",
            "Reduces trampling damage",
        ],
        timeline: "3-6 months to see effects",
        best_season: "Any season",
        affected_species: &["All species benefit from controlled livestock"],
    },
    ScenarioSeed {
        id: "mulching",
        name: "Add Mulch",
        icon: "🍂",
        description: "Apply organic mulch to garden areas",
        risk_change: RiskChange::Decrease,
        risk_percentage: 20,
        cost_range: CostRange::new(500, 2_000),
        explanation: "Mulching suppresses weed growth by blocking sunlight and creating a barrier \
                      that prevents invasive seeds from germinating.",
        details: &[
            "Blocks sunlight from weed seeds",
            "Creates physical barrier to germination",
            "Improves soil health",
            "Reduces need for herbicides",
        ],
        timeline: "1-3 months to see effects",
        best_season: "Spring/Autumn",
        affected_species: &["Gorse", "Lantana", "Bitou Bush"],
    },
    ScenarioSeed {
        id: "burning",
        name: "Controlled Burn",
        icon: "🔥",
        description: "Use fire to manage vegetation",
        risk_change: RiskChange::Increase,
        risk_percentage: 30,
        cost_range: CostRange::new(200, 1_000),
        explanation: "While controlled burns can help with some weeds, they may also stimulate the \
                      growth of fire-adapted invasive species and create disturbed conditions.",
        details: &[
            "May stimulate fire-adapted weeds",
            "Creates disturbed soil conditions",
            "Can spread weed seeds via wind",
            "May damage beneficial soil organisms",
        ],
        timeline: "Immediate impact",
        best_season: "Autumn/Winter (with permits)",
        affected_species: &["Gamba Grass", "Buffel Grass", "Gorse"],
    },
];

const PRESETS: &[PresetSeed] = &[
    PresetSeed {
        id: "beginner",
        name: "Beginner Friendly",
        description: "Low-cost, easy-to-implement practices for new hobby farmers",
        icon: "🌱",
        scenarios: &["planting", "mulching", "fencing"],
        recommended_for: "New to farming and want quick, affordable wins",
    },
    PresetSeed {
        id: "sustainable",
        name: "Sustainable Manager",
        description: "Eco-friendly practices that reduce risk without chemicals",
        icon: "♻️",
        scenarios: &["planting", "mulching", "fencing"],
        recommended_for: "Environmentally conscious land management",
    },
    PresetSeed {
        id: "intensive",
        name: "Intensive Farming",
        description: "Maximum productivity with managed risk",
        icon: "🚜",
        scenarios: &["clearing", "irrigation", "planting", "mulching"],
        recommended_for: "High-yield farming with risk mitigation strategies",
    },
    PresetSeed {
        id: "conversion",
        name: "Bush to Farm Conversion",
        description: "Converting natural land while minimizing invasive risk",
        icon: "🌳",
        scenarios: &["clearing", "planting", "mulching", "fencing"],
        recommended_for: "Converting bushland to productive farmland",
    },
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn scenario(seed: &ScenarioSeed) -> Scenario {
    Scenario {
        id: ScenarioId::new(seed.id),
        name: seed.name.to_string(),
        icon: seed.icon.to_string(),
        description: seed.description.to_string(),
        risk_change: seed.risk_change,
        risk_percentage: seed.risk_percentage,
        cost_range: seed.cost_range,
        explanation: seed.explanation.to_string(),
        details: owned(seed.details),
        timeline: seed.timeline.to_string(),
        best_season: seed.best_season.to_string(),
        affected_species: owned(seed.affected_species),
    }
}

fn preset(seed: &PresetSeed) -> PresetBundle {
    PresetBundle {
        id: seed.id.to_string(),
        name: seed.name.to_string(),
        description: seed.description.to_string(),
        icon: seed.icon.to_string(),
        scenarios: seed.scenarios.iter().copied().map(ScenarioId::from).collect(),
        recommended_for: seed.recommended_for.to_string(),
    }
}

/// Built-in scenarios in catalog order
#[must_use]
pub fn scenarios() -> Vec<Scenario> {
    SCENARIOS.iter().map(scenario).collect()
}

/// Built-in preset bundles
#[must_use]
pub fn presets() -> Vec<PresetBundle> {
    PRESETS.iter().map(preset).collect()
}

pub(crate) fn catalog() -> Catalog {
    Catalog::from_trusted(scenarios(), presets())
}
