//! Axis configuration and tick labelling.

use std::sync::Arc;

use super::line::XValue;
use super::scale::format_time_tick;

/// Formats an x tick from its value and index.
pub type TickFormat = Arc<dyn Fn(&XValue, usize) -> String + Send + Sync>;

/// Which kind of scale the x axis uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScaleKind {
    #[default]
    Time,
    Linear,
}

#[derive(Clone)]
pub struct XAxis {
    pub tick_count: usize,
    pub tick_format: Option<TickFormat>,
    pub scale: ScaleKind,
}

impl Default for XAxis {
    fn default() -> Self {
        Self {
            tick_count: 4,
            tick_format: None,
            scale: ScaleKind::Time,
        }
    }
}

impl XAxis {
    pub fn tick_count(mut self, count: usize) -> Self {
        self.tick_count = count;
        self
    }

    pub fn tick_format<F>(mut self, format: F) -> Self
    where
        F: Fn(&XValue, usize) -> String + Send + Sync + 'static,
    {
        self.tick_format = Some(Arc::new(format));
        self
    }

    pub fn scale(mut self, scale: ScaleKind) -> Self {
        self.scale = scale;
        self
    }

    /// Label for the tick at `index`.
    pub fn label(&self, value: &XValue, index: usize) -> String {
        if let Some(format) = &self.tick_format {
            return format(value, index);
        }
        match value {
            XValue::Time(t) => format_time_tick(t),
            XValue::Linear(v) => format!("{}", v),
        }
    }
}

impl std::fmt::Debug for XAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XAxis")
            .field("tick_count", &self.tick_count)
            .field("tick_format", &self.tick_format.is_some())
            .field("scale", &self.scale)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YAxis {
    pub tick_count: usize,
}

impl Default for YAxis {
    fn default() -> Self {
        Self { tick_count: 5 }
    }
}

/// Y tick label: values from 1000 up read as `{n}k`, rounded up.
pub fn shorten_value(value: f64) -> String {
    if value >= 1000.0 {
        format!("{}k", (value / 1000.0).ceil())
    } else {
        format!("{}", value)
    }
}

/// A tick ready to draw: pixel offset along the axis and its label.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}
