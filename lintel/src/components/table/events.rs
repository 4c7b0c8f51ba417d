//! Event handling for the Table component.
//!
//! Each rendered control gets a handler holding a clone of the table, so
//! dispatching through the registry runs the same transitions as the direct
//! API.

use std::sync::Arc;

use super::Table;
use super::cell::RowId;
use crate::handlers::{EventData, Handler};

impl Table {
    /// Filter input: every keystroke replaces the column's filter.
    pub(super) fn filter_handler(&self, key: &str) -> Handler {
        let table = self.clone();
        let key = key.to_string();
        Arc::new(move |data: &EventData| match data.text() {
            Some(text) => {
                table.set_filter(&key, text);
            }
            None => log::debug!("Filter input for {} without text payload", key),
        })
    }

    /// Sort header click.
    pub(super) fn sort_handler(&self, key: &str) -> Handler {
        let table = self.clone();
        let key = key.to_string();
        Arc::new(move |_: &EventData| {
            table.toggle_sort(&key);
        })
    }

    /// Row checkbox change. The toggle is driven by current membership, so a
    /// stale `checked` payload can't desynchronize the selection.
    pub(super) fn select_handler(&self, id: RowId) -> Handler {
        let table = self.clone();
        Arc::new(move |data: &EventData| {
            if let Some(checked) = data.checked()
                && checked == table.is_selected(&id)
            {
                log::debug!("Row {} already {}", id, if checked { "checked" } else { "unchecked" });
                return;
            }
            table.toggle_selection(&id);
        })
    }

    pub(super) fn prev_handler(&self) -> Handler {
        let table = self.clone();
        Arc::new(move |_: &EventData| {
            table.prev_page();
        })
    }

    pub(super) fn next_handler(&self) -> Handler {
        let table = self.clone();
        Arc::new(move |_: &EventData| {
            table.next_page();
        })
    }
}
