//! Patch Planner Catalog
//!
//! Static table of land management scenarios and preset bundles.
//!
//! # Core Concepts
//!
//! - [`Scenario`]: One land management action with a signed risk effect
//! - [`RiskChange`]: Direction of the effect (increase / decrease)
//! - [`CostRange`]: Estimated cost in whole dollars
//! - [`PresetBundle`]: Named list of scenario ids for bulk selection
//! - [`Catalog`]: Immutable, validated table indexed by id
//!
//! # Example
//!
//! ```rust
//! use planner_catalog::Catalog;
//!
//! let catalog = Catalog::builtin();
//! let irrigation = catalog.get("irrigation").unwrap();
//! assert_eq!(irrigation.signed_risk(), 25);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod catalog;
mod error;
mod preset;
mod scenario;

/// Built-in scenario data
pub mod builtin;

// Re-exports
pub use catalog::{Catalog, CatalogDocument};
pub use error::CatalogError;
pub use preset::PresetBundle;
pub use scenario::{CostRange, RiskChange, Scenario, ScenarioId};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
