//! Filter and sort policies.
//!
//! Columns use [`default_filter`] and [`default_sorter_factory`] unless they
//! supply their own; a custom policy replaces the default for its column
//! entirely.

use std::cmp::Ordering;
use std::sync::Arc;

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use super::cell::{CellValue, Row};

/// Decides whether a cell value matches the query text.
pub type FilterFn = Arc<dyn Fn(&CellValue, &str) -> bool + Send + Sync>;

/// Orders two rows.
pub type Comparator = Arc<dyn Fn(&Row, &Row) -> Ordering + Send + Sync>;

/// Builds a comparator for a column key and direction.
pub type SorterFactory = Arc<dyn Fn(&str, SortDirection) -> Comparator + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// The string a filter sees for a cell value.
pub fn stringify(value: &CellValue) -> String {
    value.resolve(&Row::new()).plain_text()
}

/// Case-insensitive substring match on the stringified value.
///
/// An empty query matches everything.
pub fn default_filter() -> FilterFn {
    Arc::new(|value: &CellValue, query: &str| {
        stringify(value)
            .to_lowercase()
            .contains(&query.to_lowercase())
    })
}

/// Fuzzy match on the stringified value using nucleo-matcher.
///
/// An empty query matches everything.
pub fn fuzzy_filter() -> FilterFn {
    Arc::new(|value: &CellValue, query: &str| {
        if query.is_empty() {
            return true;
        }
        let mut matcher = Matcher::new(Config::DEFAULT);
        let pattern = Pattern::new(
            query,
            CaseMatching::Ignore,
            Normalization::Smart,
            AtomKind::Fuzzy,
        );
        let text = stringify(value);
        let mut buf = Vec::new();
        let haystack = Utf32Str::new(&text, &mut buf);
        pattern.score(haystack, &mut matcher).is_some()
    })
}

/// Natural ascending order between two values; equal values compare equal.
///
/// Values of different kinds have no natural order. They are grouped by kind
/// (empty, boolean, number, date, text, other) so the order stays total, but
/// callers should not rely on where a kind lands relative to another.
pub fn natural_order(a: &CellValue, b: &CellValue) -> Ordering {
    match (a, b) {
        (CellValue::Number(x), CellValue::Number(y)) => x.total_cmp(y),
        _ => a
            .natural_cmp(b)
            .unwrap_or_else(|| a.kind_rank().cmp(&b.kind_rank())),
    }
}

/// Compare the column's values naturally, inverted for descending.
pub fn default_sorter_factory() -> SorterFactory {
    Arc::new(|key: &str, direction: SortDirection| {
        let key = key.to_string();
        Arc::new(move |a: &Row, b: &Row| {
            let order = natural_order(&a.value(&key), &b.value(&key));
            match direction {
                SortDirection::Asc => order,
                SortDirection::Desc => order.reverse(),
            }
        })
    })
}
