//! Line data and path generation.

use chrono::{DateTime, Utc};

/// A point's position on the x axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum XValue {
    Time(DateTime<Utc>),
    Linear(f64),
}

impl XValue {
    /// Numeric position: milliseconds since the epoch for times.
    pub fn as_f64(&self) -> f64 {
        match self {
            XValue::Time(t) => t.timestamp_millis() as f64,
            XValue::Linear(v) => *v,
        }
    }
}

impl From<DateTime<Utc>> for XValue {
    fn from(value: DateTime<Utc>) -> Self {
        XValue::Time(value)
    }
}

impl From<f64> for XValue {
    fn from(value: f64) -> Self {
        XValue::Linear(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: XValue,
    pub y: f64,
}

impl Point {
    pub fn new(x: impl Into<XValue>, y: f64) -> Self {
        Self { x: x.into(), y }
    }
}

/// How consecutive points are joined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Curve {
    #[default]
    Linear,
    /// Step at the midpoint between points.
    Step,
    /// Step at the start of each segment.
    StepBefore,
    /// Step at the end of each segment.
    StepAfter,
}

impl Curve {
    /// SVG path data through `points`, in pixels. Empty without points.
    pub fn path(&self, points: &[(f64, f64)]) -> String {
        let Some(&(x0, y0)) = points.first() else {
            return String::new();
        };

        let mut d = format!("M{},{}", x0, y0);
        for pair in points.windows(2) {
            let ((xa, ya), (xb, yb)) = (pair[0], pair[1]);
            match self {
                Curve::Linear => {}
                Curve::Step => {
                    let xm = (xa + xb) / 2.0;
                    d.push_str(&format!("L{},{}L{},{}", xm, ya, xm, yb));
                }
                Curve::StepBefore => d.push_str(&format!("L{},{}", xa, yb)),
                Curve::StepAfter => d.push_str(&format!("L{},{}", xb, ya)),
            }
            d.push_str(&format!("L{},{}", xb, yb));
        }
        d
    }
}

/// One series on the chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Line {
    pub points: Vec<Point>,
    /// Stroke colour; the theme's line colour when unset
    pub color: Option<String>,
    /// Overrides the chart's curve
    pub curve: Option<Curve>,
}

impl Line {
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            ..Default::default()
        }
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn curve(mut self, curve: Curve) -> Self {
        self.curve = Some(curve);
        self
    }

    pub fn max_y(&self) -> Option<f64> {
        self.points.iter().map(|p| p.y).reduce(f64::max)
    }
}
