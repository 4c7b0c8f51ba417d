//! UI components with self-managed state.
//!
//! The table and chart live in their own modules with:
//! - `state.rs` / `draw.rs` - the component state and its transitions
//! - `render.rs` - markup
//! - `mod.rs` - the public component type and exports
//!
//! `Button` and `Popover` are small enough for a single file each.

pub mod button;
pub mod chart;
pub mod popover;
pub mod table;

pub use button::Button;
pub use chart::{ChartPhase, Dots, Line, LineChart, LineChartProps, Point, XAxis, XValue, YAxis};
pub use popover::{Popover, PopoverPosition, PopoverProps};
pub use table::{CellValue, Column, Row, RowId, SelectionPruning, SortDirection, Table, TableConfig};
