//! Table configuration and the filter → sort → paginate pipeline.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::cell::{Row, RowId};
use super::column::Column;
use super::pagination::Pagination;
use super::policy::{
    FilterFn, SortDirection, SorterFactory, default_filter, default_sorter_factory,
};
use super::selection::{Selection, SelectionPruning};

/// Table-level switches.
///
/// Column-level `filterable`/`sortable` flags only take effect when the
/// matching table-level flag is on. Deserializes from JSON with every field
/// optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Prefix for the ids of rendered controls
    pub id: String,
    pub filterable: bool,
    pub sortable: bool,
    /// Requires `unique_id_key`
    pub selectable: bool,
    pub unique_id_key: Option<String>,
    /// None renders every row without pagination controls
    pub items_per_page: Option<usize>,
    pub selection_pruning: SelectionPruning,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            id: "table".into(),
            filterable: false,
            sortable: false,
            selectable: false,
            unique_id_key: None,
            items_per_page: None,
            selection_pruning: SelectionPruning::Keep,
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    pub fn unique_id_key(mut self, key: impl Into<String>) -> Self {
        self.unique_id_key = Some(key.into());
        self
    }

    pub fn items_per_page(mut self, items_per_page: usize) -> Self {
        self.items_per_page = Some(items_per_page);
        self
    }

    pub fn selection_pruning(mut self, pruning: SelectionPruning) -> Self {
        self.selection_pruning = pruning;
        self
    }

    /// Parse a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// One column's active text filter.
#[derive(Clone)]
pub struct FilterEntry {
    pub column_key: String,
    pub query: String,
    pub match_fn: FilterFn,
}

impl FilterEntry {
    pub fn matches(&self, row: &Row) -> bool {
        (self.match_fn)(&row.value(&self.column_key), &self.query)
    }
}

/// The single active sorter.
#[derive(Clone)]
pub struct SortSpec {
    pub column_key: String,
    pub direction: SortDirection,
    pub factory: SorterFactory,
}

pub(crate) struct TableInner {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
    pub config: TableConfig,
    pub filters: HashMap<String, FilterEntry>,
    pub sorter: Option<SortSpec>,
    pub selection: Selection,
    pub pagination: Option<Pagination>,
    /// Indices into `rows` after filtering and sorting
    pub view: Vec<usize>,
}

impl TableInner {
    pub fn new(columns: Vec<Column>, config: TableConfig) -> Self {
        let pagination = config.items_per_page.map(Pagination::new);
        Self {
            columns,
            rows: Vec::new(),
            config,
            filters: HashMap::new(),
            sorter: None,
            selection: Selection::new(),
            pagination,
            view: Vec::new(),
        }
    }

    pub fn column(&self, key: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// True when the filter row renders.
    pub fn shows_filters(&self) -> bool {
        self.config.filterable && self.columns.iter().any(|c| c.filterable)
    }

    pub fn column_filterable(&self, column: &Column) -> bool {
        self.config.filterable && column.filterable
    }

    pub fn column_sortable(&self, column: &Column) -> bool {
        self.config.sortable && column.sortable
    }

    pub fn row_id(&self, row: &Row) -> Option<RowId> {
        self.config.unique_id_key.as_deref().map(|key| row.id(key))
    }

    /// Replace the row data.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        let view = build_view(&rows, &self.filters, self.sorter.as_ref());
        self.rows = rows;
        if self.config.selection_pruning == SelectionPruning::PruneMissing
            && let Some(key) = self.config.unique_id_key.clone()
        {
            let present: Vec<RowId> = self.rows.iter().map(|r| r.id(&key)).collect();
            let pruned = self.selection.retain(|id| present.contains(id));
            if pruned > 0 {
                log::debug!("Pruned {} selected ids with no matching row", pruned);
            }
        }
        self.commit_view(view);
    }

    /// Replace the filter entry for a column. Returns false when the column
    /// cannot be filtered.
    pub fn set_filter(&mut self, key: &str, query: &str) -> bool {
        let Some(column) = self.column(key) else {
            log::debug!("Ignoring filter on unknown column {}", key);
            return false;
        };
        if !self.column_filterable(column) {
            log::debug!("Ignoring filter on non-filterable column {}", key);
            return false;
        }

        let match_fn = column.custom_filter.clone().unwrap_or_else(default_filter);
        let mut filters = self.filters.clone();
        filters.insert(
            key.to_string(),
            FilterEntry {
                column_key: key.to_string(),
                query: query.to_string(),
                match_fn,
            },
        );
        // Nothing is stored until the new view is built, so a panicking
        // filter leaves the table as it was.
        let view = build_view(&self.rows, &filters, self.sorter.as_ref());
        self.filters = filters;
        log::debug!("Filter on {} set to {:?}", key, query);
        self.commit_view(view);
        true
    }

    /// Apply the sort-header click transition. Returns the new direction, or
    /// None when the column cannot be sorted.
    pub fn toggle_sort(&mut self, key: &str) -> Option<SortDirection> {
        let Some(column) = self.column(key) else {
            log::debug!("Ignoring sort on unknown column {}", key);
            return None;
        };
        if !self.column_sortable(column) {
            log::debug!("Ignoring sort on non-sortable column {}", key);
            return None;
        }

        let direction = match &self.sorter {
            Some(active) if active.column_key == key => active.direction.toggled(),
            _ => SortDirection::Asc,
        };
        let factory = column
            .custom_sorter_factory
            .clone()
            .unwrap_or_else(default_sorter_factory);
        let sorter = SortSpec {
            column_key: key.to_string(),
            direction,
            factory,
        };
        let view = build_view(&self.rows, &self.filters, Some(&sorter));
        self.sorter = Some(sorter);
        log::debug!("Sorting by {} {:?}", key, direction);
        self.commit_view(view);
        Some(direction)
    }

    /// Store a freshly built view and hand its count to pagination.
    fn commit_view(&mut self, view: Vec<usize>) {
        log::trace!("Table {}: {} of {} rows pass", self.config.id, view.len(), self.rows.len());
        let count = view.len();
        self.view = view;
        if let Some(pagination) = &mut self.pagination {
            pagination.set_item_count(count);
        }
    }

    /// Indices into `rows` for the current page.
    pub fn visible_indices(&self) -> &[usize] {
        match &self.pagination {
            Some(pagination) => &self.view[pagination.visible_range()],
            None => &self.view,
        }
    }
}

/// Filter the whole row set, then sort it. Returns indices into `rows`.
fn build_view(
    rows: &[Row],
    filters: &HashMap<String, FilterEntry>,
    sorter: Option<&SortSpec>,
) -> Vec<usize> {
    let mut view: Vec<usize> = (0..rows.len())
        .filter(|&i| filters.values().all(|f| f.matches(&rows[i])))
        .collect();

    if let Some(sorter) = sorter {
        let compare = (sorter.factory)(&sorter.column_key, sorter.direction);
        view.sort_by(|&a, &b| compare(&rows[a], &rows[b]));
    }
    view
}
