//! Row selection by id.
//!
//! Selection uses row ids rather than positions, so it stays stable when rows
//! are filtered out, reordered, or paged away.

use serde::{Deserialize, Serialize};

use super::cell::RowId;

/// What happens to selected ids whose rows leave the data entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPruning {
    /// Keep every id until the user unchecks it.
    #[default]
    Keep,
    /// Drop ids with no matching row after the data is replaced.
    PruneMissing,
}

/// Ordered set of selected row ids, in the order they were checked.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    selected: Vec<RowId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle an id. Returns true if it is now selected.
    pub fn toggle(&mut self, id: &RowId) -> bool {
        match self.selected.iter().position(|s| s == id) {
            Some(index) => {
                self.selected.remove(index);
                false
            }
            None => {
                self.selected.push(id.clone());
                true
            }
        }
    }

    pub fn contains(&self, id: &RowId) -> bool {
        self.selected.contains(id)
    }

    pub fn ids(&self) -> &[RowId] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Keep only ids matching `keep`. Returns how many were removed.
    pub fn retain(&mut self, mut keep: impl FnMut(&RowId) -> bool) -> usize {
        let before = self.selected.len();
        self.selected.retain(|id| keep(id));
        before - self.selected.len()
    }
}
