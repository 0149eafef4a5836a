//! Patch Planner Core
//!
//! Pure functions over `(catalog, selection)` plus the controller that owns a
//! selection for one planning session.
//!
//! # Core Concepts
//!
//! - [`Selection`]: Duplicate-free set of chosen scenario ids
//! - [`combined_risk`] / [`total_cost`]: Aggregators that skip unknown ids
//! - [`RecommendationEngine`]: Ordered decision table of [`RecommendationRule`]s
//! - [`RiskBand`] / [`Gauge`]: Risk meter classification and needle position
//! - [`Planner`]: Applies add / remove / toggle / clear / preset actions
//! - [`PlanSummary`]: Serializable snapshot for display
//!
//! # Example
//!
//! ```rust
//! use planner_catalog::Catalog;
//! use planner_core::{Planner, RiskBand};
//!
//! let mut planner = Planner::new(Catalog::builtin());
//! planner.add("irrigation");
//! planner.add("planting");
//!
//! assert_eq!(planner.combined_risk(), 10);
//! assert_eq!(planner.meter().band, RiskBand::Slight);
//! assert_eq!(planner.total_cost().as_pair(), (3_000, 13_000));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod aggregate;
mod config;
mod error;
mod meter;
mod planner;
mod recommend;
mod selection;
mod summary;

/// Display helpers
pub mod format;

// Re-exports
pub use aggregate::{combined_risk, total_cost, CostTotal};
pub use config::{GaugeConfig, PlannerConfig, RecommendationConfig};
pub use error::{ConfigError, PlannerError};
pub use meter::{Gauge, RiskBand, RiskMeter};
pub use planner::Planner;
pub use recommend::{
    default_rules, Recommendation, RecommendationEngine, RecommendationRule, RuleContext,
    CLEARING, IRRIGATION, MULCHING, PLANTING, STARTERS,
};
pub use selection::{Selection, Toggle};
pub use summary::{PlanLine, PlanSummary};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
