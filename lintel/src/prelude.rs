//! Prelude module for convenient imports.
//!
//! ```ignore
//! use lintel::prelude::*;
//! ```

// Components
pub use crate::components::button::Button;
pub use crate::components::chart::{
    ChartPhase, Curve, Dots, Line, LineChart, LineChartProps, Point, ScaleKind, XAxis, XValue,
    YAxis,
};
pub use crate::components::popover::{Popover, PopoverProps};
pub use crate::components::table::{
    CellValue, Column, Row, RowId, SelectionPruning, SortDirection, Table, TableConfig, ValueType,
};

// Core types
pub use crate::context::RenderContext;
pub use crate::debounce::Debouncer;
pub use crate::error::ConfigError;
pub use crate::handlers::{EventData, Handler, HandlerRegistry, events};
pub use crate::state::State;

// Re-export webdom primitives components are built from
pub use webdom::{DefaultTheme, Element, Measure, Rect, SharedRect, Theme, Window, WindowEvent};
