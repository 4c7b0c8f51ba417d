//! Column descriptors.

use std::sync::Arc;

use super::cell::{CellValue, Row};
use super::policy::{FilterFn, SorterFactory};

/// How a column's values are treated for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueType {
    #[default]
    Text,
    /// Cells render right-aligned.
    Numeric,
}

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn as_css(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

/// Replaces cell resolution for a column. Receives the raw cell value and
/// its row.
pub type ValueRenderer = Arc<dyn Fn(&CellValue, &Row) -> CellValue + Send + Sync>;

/// Column configuration.
///
/// Columns carry no markup of their own. Their order in the table's column
/// list fixes the order of the header, filter row, and body cells.
///
/// # Examples
///
/// ```ignore
/// let columns = vec![
///     Column::new("name", "Name"),
///     Column::new("age", "Age").numeric().width("80px"),
///     Column::new("notes", "Notes").filterable(false).sortable(false),
/// ];
/// ```
#[derive(Clone)]
pub struct Column {
    /// Row key this column reads
    pub key: String,
    /// Header text
    pub text: String,
    pub value_type: ValueType,
    /// CSS width; `auto` when unset
    pub width: Option<String>,
    /// Only effective when the table is filterable
    pub filterable: bool,
    /// Only effective when the table is sortable
    pub sortable: bool,
    pub custom_filter: Option<FilterFn>,
    pub custom_sorter_factory: Option<SorterFactory>,
    pub custom_value: Option<ValueRenderer>,
}

impl Column {
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
            value_type: ValueType::Text,
            width: None,
            filterable: true,
            sortable: true,
            custom_filter: None,
            custom_sorter_factory: None,
            custom_value: None,
        }
    }

    /// Mark the column numeric.
    pub fn numeric(mut self) -> Self {
        self.value_type = ValueType::Numeric;
        self
    }

    pub fn value_type(mut self, value_type: ValueType) -> Self {
        self.value_type = value_type;
        self
    }

    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
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

    pub fn custom_filter(mut self, filter: FilterFn) -> Self {
        self.custom_filter = Some(filter);
        self
    }

    pub fn custom_sorter_factory(mut self, factory: SorterFactory) -> Self {
        self.custom_sorter_factory = Some(factory);
        self
    }

    /// Override how this column's cells resolve for display.
    pub fn custom_value<F>(mut self, renderer: F) -> Self
    where
        F: Fn(&CellValue, &Row) -> CellValue + Send + Sync + 'static,
    {
        self.custom_value = Some(Arc::new(renderer));
        self
    }

    pub fn alignment(&self) -> Alignment {
        match self.value_type {
            ValueType::Numeric => Alignment::Right,
            ValueType::Text => Alignment::Left,
        }
    }

    pub fn css_width(&self) -> &str {
        self.width.as_deref().unwrap_or("auto")
    }

    /// Display value of this column's cell in `row`.
    pub(crate) fn cell_value(&self, row: &Row) -> CellValue {
        match &self.custom_value {
            Some(renderer) => {
                let raw = row.get(&self.key).cloned().unwrap_or(CellValue::Empty);
                renderer(&raw, row)
            }
            None => row.get(&self.key).cloned().unwrap_or(CellValue::Empty),
        }
    }
}

impl std::fmt::Debug for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("text", &self.text)
            .field("value_type", &self.value_type)
            .field("width", &self.width)
            .field("filterable", &self.filterable)
            .field("sortable", &self.sortable)
            .field("custom_filter", &self.custom_filter.is_some())
            .field("custom_sorter_factory", &self.custom_sorter_factory.is_some())
            .field("custom_value", &self.custom_value.is_some())
            .finish()
    }
}
