//! Risk and cost aggregation
//!
//! Both aggregators are pure functions over `(catalog, ids)`. Ids missing
//! from the catalog are skipped without error.

use planner_catalog::Catalog;
use serde::{Deserialize, Serialize};

/// Summed cost range of a set of scenarios
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostTotal {
    /// Sum of lower estimates
    pub min: u64,
    /// Sum of upper estimates
    pub max: u64,
    /// Number of catalog scenarios that contributed
    pub counted: usize,
}

impl CostTotal {
    /// `(min, max)` pair
    #[inline]
    #[must_use]
    pub fn as_pair(&self) -> (u64, u64) {
        (self.min, self.max)
    }

    /// Check whether no known scenario contributed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counted == 0
    }
}

/// Signed sum of risk contributions
///
/// Each known id adds `+risk_percentage` (increase) or `-risk_percentage`
/// (decrease). No clamping is applied.
pub fn combined_risk<I>(catalog: &Catalog, ids: I) -> i64
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    ids.into_iter()
        .filter_map(|id| catalog.get(id.as_ref()))
        .map(planner_catalog::Scenario::signed_risk)
        .sum()
}

/// Component-wise sum of cost ranges
///
/// The empty selection yields `(0, 0)`.
pub fn total_cost<I>(catalog: &Catalog, ids: I) -> CostTotal
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    ids.into_iter()
        .filter_map(|id| catalog.get(id.as_ref()))
        .fold(CostTotal::default(), |acc, scenario| CostTotal {
            min: acc.min + u64::from(scenario.cost_range.min),
            max: acc.max + u64::from(scenario.cost_range.max),
            counted: acc.counted + 1,
        })
}
