//! Table component - a data grid with filtering, sorting, pagination, and
//! row selection.
//!
//! The Table component provides:
//! - Columns declared as plain descriptors, in display order
//! - Per-column text filters, combined with AND across columns
//! - A single active sorter toggled from the column headers
//! - Optional pagination that returns to the first page when the filtered
//!   row count changes
//! - Checkbox selection by unique row id, kept across filtering and paging
//!
//! Rows always pass through filter, then sort, then pagination, over the
//! entire data set.
//!
//! # Example
//!
//! ```ignore
//! use lintel::prelude::*;
//!
//! let table = Table::new(
//!     vec![
//!         Column::new("name", "Name"),
//!         Column::new("age", "Age").numeric(),
//!     ],
//!     TableConfig::new()
//!         .id("people")
//!         .filterable(true)
//!         .sortable(true)
//!         .selectable(true)
//!         .unique_id_key("id")
//!         .items_per_page(10),
//! )?
//! .on_selection_change(|ids| log::info!("{} selected", ids.len()));
//!
//! table.set_rows(rows);
//! let element = table.render(&cx);
//! ```

mod cell;
mod column;
mod events;
mod pagination;
pub mod policy;
mod render;
mod selection;
mod state;

use std::collections::HashSet;
use std::sync::Arc;

pub use cell::{CellContent, CellValue, ComputeFn, Row, RowId, format_number};
pub use column::{Alignment, Column, ValueRenderer, ValueType};
pub use pagination::{PageChange, Pagination};
pub use policy::{Comparator, FilterFn, SortDirection, SorterFactory};
pub use selection::{Selection, SelectionPruning};
pub use state::{FilterEntry, SortSpec, TableConfig};

use crate::error::ConfigError;
use crate::state::State;
use state::TableInner;

/// Receives the complete selection after every toggle.
pub type SelectionCallback = Arc<dyn Fn(&[RowId]) + Send + Sync>;

/// A data grid.
///
/// Cloning is cheap and shares state, which is how handlers registered
/// during [`render`](Table::render) reach back into the table.
#[derive(Clone)]
pub struct Table {
    inner: State<TableInner>,
    on_selection_change: Option<SelectionCallback>,
}

impl Table {
    /// Create a table.
    ///
    /// Fails when the table is selectable without a unique id key.
    pub fn new(columns: Vec<Column>, config: TableConfig) -> Result<Self, ConfigError> {
        if config.selectable && config.unique_id_key.is_none() {
            return Err(ConfigError::SelectableWithoutUniqueIdKey {
                table: config.id.clone(),
            });
        }

        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.key.as_str()) {
                log::warn!("Table {}: duplicate column key {}", config.id, column.key);
            }
        }

        log::debug!("Created table {} with {} columns", config.id, columns.len());
        Ok(Self {
            inner: State::new(TableInner::new(columns, config)),
            on_selection_change: None,
        })
    }

    /// Set the callback invoked with the full selection after each toggle.
    pub fn on_selection_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&[RowId]) + Send + Sync + 'static,
    {
        self.on_selection_change = Some(Arc::new(callback));
        self
    }

    /// Id prefix for rendered controls.
    pub fn id(&self) -> String {
        self.inner.read(|inner| inner.config.id.clone())
    }

    pub fn config(&self) -> TableConfig {
        self.inner.read(|inner| inner.config.clone())
    }

    pub fn columns(&self) -> Vec<Column> {
        self.inner.read(|inner| inner.columns.clone())
    }

    // -------------------------------------------------------------------------
    // Data
    // -------------------------------------------------------------------------

    /// Replace the row data. Filters, sorter, and selection are kept;
    /// pagination returns to the first page if the filtered count changed.
    pub fn set_rows(&self, rows: Vec<Row>) {
        self.inner.update(|inner| inner.set_rows(rows));
    }

    pub fn row_count(&self) -> usize {
        self.inner.read(|inner| inner.rows.len())
    }

    /// Number of rows passing the active filters.
    pub fn filtered_count(&self) -> usize {
        self.inner.read(|inner| inner.view.len())
    }

    /// Filtered and sorted rows, across all pages.
    pub fn filtered_rows(&self) -> Vec<Row> {
        self.inner
            .read(|inner| inner.view.iter().map(|&i| inner.rows[i].clone()).collect())
    }

    /// Rows on the current page, in display order.
    pub fn visible_rows(&self) -> Vec<Row> {
        self.inner.read(|inner| {
            inner
                .visible_indices()
                .iter()
                .map(|&i| inner.rows[i].clone())
                .collect()
        })
    }

    // -------------------------------------------------------------------------
    // Filtering and sorting
    // -------------------------------------------------------------------------

    /// Replace the filter for a column. Returns false when the column cannot
    /// be filtered.
    pub fn set_filter(&self, key: &str, query: &str) -> bool {
        self.inner
            .update(|inner| inner.set_filter(key, query))
    }

    /// The query text filtering a column, if any.
    pub fn filter(&self, key: &str) -> Option<String> {
        self.inner
            .read(|inner| inner.filters.get(key).map(|f| f.query.clone()))
    }

    /// Click the sort header of a column.
    pub fn toggle_sort(&self, key: &str) -> Option<SortDirection> {
        self.inner.update(|inner| inner.toggle_sort(key))
    }

    /// The active sort column and direction.
    pub fn sort(&self) -> Option<(String, SortDirection)> {
        self.inner.read(|inner| {
            inner
                .sorter
                .as_ref()
                .map(|s| (s.column_key.clone(), s.direction))
        })
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Toggle a row id and notify the selection callback with the full
    /// selection. Returns whether the id is now selected, or None when the
    /// table is not selectable.
    pub fn toggle_selection(&self, id: &RowId) -> Option<bool> {
        let (selected, ids) = self
            .inner
            .update(|inner| {
                if !inner.config.selectable {
                    log::debug!("Ignoring selection on non-selectable table {}", inner.config.id);
                    return None;
                }
                let selected = inner.selection.toggle(id);
                log::debug!(
                    "Row {} {} ({} selected)",
                    id,
                    if selected { "selected" } else { "deselected" },
                    inner.selection.len()
                );
                Some((selected, inner.selection.ids().to_vec()))
            })?;

        // Outside the lock so the callback may read the table.
        if let Some(callback) = &self.on_selection_change {
            callback(&ids);
        }
        Some(selected)
    }

    pub fn is_selected(&self, id: &RowId) -> bool {
        self.inner.read(|inner| inner.selection.contains(id))
    }

    /// Selected ids in the order they were checked, across the whole data set.
    pub fn selected_ids(&self) -> Vec<RowId> {
        self.inner.read(|inner| inner.selection.ids().to_vec())
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    pub fn next_page(&self) -> Option<PageChange> {
        self.inner
            .update(|inner| inner.pagination.as_mut().and_then(Pagination::next_page))
    }

    pub fn prev_page(&self) -> Option<PageChange> {
        self.inner
            .update(|inner| inner.pagination.as_mut().and_then(Pagination::prev_page))
    }

    /// Zero-based active page, None without pagination.
    pub fn page(&self) -> Option<usize> {
        self.inner
            .read(|inner| inner.pagination.as_ref().map(Pagination::active_page))
    }

    pub fn total_pages(&self) -> Option<usize> {
        self.inner
            .read(|inner| inner.pagination.as_ref().map(Pagination::total_pages))
    }

    pub fn first_visible_index(&self) -> usize {
        self.inner.read(|inner| {
            inner
                .pagination
                .as_ref()
                .map(Pagination::first_visible_index)
                .unwrap_or(0)
        })
    }
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.inner.read(|inner| {
            f.debug_struct("Table")
                .field("id", &inner.config.id)
                .field("columns", &inner.columns.len())
                .field("rows", &inner.rows.len())
                .field("visible", &inner.view.len())
                .field("selected", &inner.selection.len())
                .finish()
        })
    }
}
