//! User selection of scenarios
//!
//! Provides [`Selection`]: a duplicate-free set of scenario ids that keeps
//! insertion order for display. Aggregation never depends on that order.

use indexmap::IndexSet;
use planner_catalog::ScenarioId;
use serde::{Deserialize, Serialize};

/// Outcome of [`Selection::toggle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// Id was absent and is now selected
    Added,
    /// Id was selected and is now removed
    Removed,
}

/// Set of chosen scenario ids
///
/// Ids are not checked against a catalog; unknown ids are kept and simply
/// contribute nothing when aggregated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    ids: IndexSet<ScenarioId>,
}

impl Selection {
    /// Create empty selection
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an id, returning `false` if it was already selected
    pub fn insert(&mut self, id: impl Into<ScenarioId>) -> bool {
        self.ids.insert(id.into())
    }

    /// Remove an id, returning `false` if it was not selected
    ///
    /// Remaining ids keep their relative order.
    pub fn remove(&mut self, id: &str) -> bool {
        self.ids.shift_remove(id)
    }

    /// Add the id if absent, remove it otherwise
    pub fn toggle(&mut self, id: impl Into<ScenarioId>) -> Toggle {
        let id = id.into();
        if self.ids.shift_remove(id.as_str()) {
            Toggle::Removed
        } else {
            self.ids.insert(id);
            Toggle::Added
        }
    }

    /// Remove every id
    #[inline]
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Replace the contents, dropping duplicates from `ids`
    pub fn replace<I>(&mut self, ids: I)
    where
        I: IntoIterator,
        I::Item: Into<ScenarioId>,
    {
        self.ids.clear();
        self.ids.extend(ids.into_iter().map(Into::into));
    }

    /// Check whether an id is selected
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Iterate ids in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(ScenarioId::as_str)
    }

    /// Number of selected ids
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check for the empty selection
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<T: Into<ScenarioId>> FromIterator<T> for Selection {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<T: Into<ScenarioId>> Extend<T> for Selection {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.ids.extend(iter.into_iter().map(Into::into));
    }
}
