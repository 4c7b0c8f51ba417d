//! Rows, cell values, and cell display resolution.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use webdom::Element;

/// Computed cells nest at most this deep before resolving to empty.
const MAX_COMPUTED_DEPTH: usize = 8;

/// Closure producing a cell's value from its row.
pub type ComputeFn = Arc<dyn Fn(&Row) -> CellValue + Send + Sync>;

/// The value stored in one cell.
///
/// Resolution to display content is explicit (see [`CellValue::resolve`]); no
/// variant falls through to another.
#[derive(Clone)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Boolean(bool),
    /// Evaluated against the row whenever the cell is read.
    Computed(ComputeFn),
    Empty,
    Date(DateTime<Utc>),
    /// Markup passed through to the cell untouched.
    Embedded(Element),
    /// Any other value; displayed with its default string conversion.
    Raw(serde_json::Value),
}

/// What a cell displays after resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    Text(String),
    Embedded(Element),
}

impl CellContent {
    /// The text a cell contributes to filtering.
    pub fn plain_text(&self) -> String {
        match self {
            CellContent::Text(s) => s.clone(),
            CellContent::Embedded(el) => el.text_content(),
        }
    }

    pub fn into_element(self) -> Element {
        match self {
            CellContent::Text(s) => Element::text(s),
            CellContent::Embedded(el) => el,
        }
    }
}

impl CellValue {
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&Row) -> CellValue + Send + Sync + 'static,
    {
        CellValue::Computed(Arc::new(f))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Resolve to display content, in this order:
    /// text verbatim, numbers formatted, booleans as `True`/`False`,
    /// computed values evaluated against `row`, empty as `""`, embedded
    /// markup passed through, anything else via its default string form.
    pub fn resolve(&self, row: &Row) -> CellContent {
        self.resolve_at_depth(row, 0)
    }

    fn resolve_at_depth(&self, row: &Row, depth: usize) -> CellContent {
        match self {
            CellValue::Text(s) => CellContent::Text(s.clone()),
            CellValue::Number(n) => CellContent::Text(format_number(*n)),
            CellValue::Boolean(b) => CellContent::Text(if *b { "True" } else { "False" }.into()),
            CellValue::Computed(f) => {
                if depth >= MAX_COMPUTED_DEPTH {
                    log::warn!("Computed cell nested deeper than {}", MAX_COMPUTED_DEPTH);
                    return CellContent::Text(String::new());
                }
                f(row).resolve_at_depth(row, depth + 1)
            }
            CellValue::Empty => CellContent::Text(String::new()),
            CellValue::Embedded(el) => CellContent::Embedded(el.clone()),
            CellValue::Date(d) => CellContent::Text(d.to_string()),
            CellValue::Raw(v) => CellContent::Text(v.to_string()),
        }
    }

    /// Evaluate computed values against `row` until a stored value remains.
    pub fn materialize(&self, row: &Row) -> CellValue {
        let mut value = self.clone();
        for _ in 0..MAX_COMPUTED_DEPTH {
            match value {
                CellValue::Computed(f) => value = f(row),
                other => return other,
            }
        }
        log::warn!("Computed cell nested deeper than {}", MAX_COMPUTED_DEPTH);
        CellValue::Empty
    }

    /// Natural ordering between two values of the same kind.
    ///
    /// Values of different kinds (and NaN) are not comparable and yield None.
    pub fn natural_cmp(&self, other: &CellValue) -> Option<Ordering> {
        match (self, other) {
            (CellValue::Text(a), CellValue::Text(b)) => Some(a.cmp(b)),
            (CellValue::Number(a), CellValue::Number(b)) => a.partial_cmp(b),
            (CellValue::Boolean(a), CellValue::Boolean(b)) => Some(a.cmp(b)),
            (CellValue::Date(a), CellValue::Date(b)) => Some(a.cmp(b)),
            (CellValue::Empty, CellValue::Empty) => Some(Ordering::Equal),
            (CellValue::Raw(a), CellValue::Raw(b)) if a == b => Some(Ordering::Equal),
            _ => None,
        }
    }

    /// Rank used to keep ordering total across kinds.
    pub(crate) fn kind_rank(&self) -> u8 {
        match self {
            CellValue::Empty => 0,
            CellValue::Boolean(_) => 1,
            CellValue::Number(_) => 2,
            CellValue::Date(_) => 3,
            CellValue::Text(_) => 4,
            CellValue::Raw(_) => 5,
            CellValue::Embedded(_) => 6,
            CellValue::Computed(_) => 7,
        }
    }

    /// Convert a JSON value: null is empty, scalars map to their kind, arrays
    /// and objects are kept raw.
    pub fn from_json(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => CellValue::Empty,
            serde_json::Value::Bool(b) => CellValue::Boolean(b),
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(f) => CellValue::Number(f),
                None => CellValue::Raw(serde_json::Value::Number(n)),
            },
            serde_json::Value::String(s) => CellValue::Text(s),
            other => CellValue::Raw(other),
        }
    }
}

/// Format a number the way it reads in a cell: integers without a fraction,
/// exponent form (`1e+21`, `1.5e-7`) outside `[1e-6, 1e21)`.
pub fn format_number(n: f64) -> String {
    if n.is_infinite() {
        return if n > 0.0 { "Infinity".into() } else { "-Infinity".into() };
    }
    if n == 0.0 {
        return "0".into();
    }
    let magnitude = n.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{n:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        };
    }
    n.to_string()
}

impl fmt::Debug for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "Text({s:?})"),
            Self::Number(n) => write!(f, "Number({n})"),
            Self::Boolean(b) => write!(f, "Boolean({b})"),
            Self::Computed(_) => write!(f, "Computed(...)"),
            Self::Empty => write!(f, "Empty"),
            Self::Date(d) => write!(f, "Date({d})"),
            Self::Embedded(_) => write!(f, "Embedded(...)"),
            Self::Raw(v) => write!(f, "Raw({v})"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<usize> for CellValue {
    fn from(value: usize) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Boolean(value)
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(value: DateTime<Utc>) -> Self {
        CellValue::Date(value)
    }
}

impl From<Element> for CellValue {
    fn from(value: Element) -> Self {
        CellValue::Embedded(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Empty)
    }
}

// =============================================================================
// Row
// =============================================================================

/// Identity of a row for selection: the display string of its id cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub String);

impl RowId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RowId {
    fn from(value: &str) -> Self {
        RowId(value.to_string())
    }
}

impl From<String> for RowId {
    fn from(value: String) -> Self {
        RowId(value)
    }
}

/// One record of table data, keyed by column key.
#[derive(Debug, Clone, Default)]
pub struct Row {
    cells: HashMap<String, CellValue>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.insert(key.into(), value.into());
    }

    /// The stored value, computed cells unevaluated.
    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.cells.get(key)
    }

    /// The value with computed cells evaluated; missing keys are empty.
    pub fn value(&self, key: &str) -> CellValue {
        match self.cells.get(key) {
            Some(value) => value.materialize(self),
            None => CellValue::Empty,
        }
    }

    /// Display content of a cell.
    pub fn display(&self, key: &str) -> CellContent {
        match self.cells.get(key) {
            Some(value) => value.resolve(self),
            None => CellContent::Text(String::new()),
        }
    }

    /// Identity of this row under `id_key`.
    pub fn id(&self, id_key: &str) -> RowId {
        RowId(self.display(id_key).plain_text())
    }

    /// Build a row from a JSON object. Returns None for any other JSON value.
    pub fn from_json(value: serde_json::Value) -> Option<Self> {
        let serde_json::Value::Object(map) = value else {
            return None;
        };
        let cells = map
            .into_iter()
            .map(|(k, v)| (k, CellValue::from_json(v)))
            .collect();
        Some(Self { cells })
    }

    /// Parse a JSON array of objects into rows, skipping non-object entries.
    pub fn from_json_array(json: &str) -> Result<Vec<Self>, serde_json::Error> {
        let values: Vec<serde_json::Value> = serde_json::from_str(json)?;
        Ok(values.into_iter().filter_map(Row::from_json).collect())
    }
}
