//! Line chart component - animated lines over a time or linear x axis.
//!
//! The chart owns a [`Scene`](webdom::Scene) that it mutates only from its
//! lifecycle hooks:
//! - [`LineChart::mount`] builds the scaffold (svg, groups, scales, axes),
//!   draws with animation, and starts listening for window resizes
//! - [`LineChart::set_lines`] redraws with animation, keeping the scaffold
//! - a window resize fades the chart and schedules a rebuild 200ms after the
//!   last resize; the rebuild tears the scaffold down, recreates it at the
//!   new width, and redraws without animation
//! - [`LineChart::unmount`] removes the listener and cancels a pending rebuild
//!
//! # Example
//!
//! ```ignore
//! let chart = LineChart::new(
//!     LineChartProps::new(vec![Line::new(points).color("#e05757")]).height(300.0),
//!     Arc::new(container_rect.clone()),
//! );
//! chart.mount(&window);
//! let element = chart.render(&cx);
//! ```

mod axis;
mod draw;
mod line;
mod scale;

use std::sync::Arc;
use std::time::Duration;

pub use axis::{ScaleKind, Tick, TickFormat, XAxis, YAxis, shorten_value};
pub use draw::{CHART_PADDING, MARGIN, XScale};
pub use line::{Curve, Line, Point, XValue};
pub use scale::{LinearScale, TickInterval, TimeScale, format_time_tick, nice_ticks, start_of_day};

use webdom::{Element, EventKind, ListenerId, Measure, Scene, StyleValue, Window, WindowEvent};

use crate::context::RenderContext;
use crate::debounce::Debouncer;
use crate::state::State;
use draw::ChartInner;

/// Quiet period after the last resize before the chart rebuilds.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(200);

/// Where the chart is in its lifecycle.
///
/// Once mounted, the chart never returns to `Uninitialized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartPhase {
    Uninitialized,
    /// Scaffold built, nothing animating.
    Mounted,
    /// An animated redraw is in flight.
    Updating,
    /// Faded out, rebuild pending.
    Resizing,
    Unmounted,
}

/// Point markers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dots {
    pub radius: f64,
    pub show: bool,
}

impl Default for Dots {
    fn default() -> Self {
        Self {
            radius: 4.0,
            show: true,
        }
    }
}

/// Line chart configuration.
#[derive(Debug, Clone)]
pub struct LineChartProps {
    pub lines: Vec<Line>,
    /// Total height in pixels, axes included
    pub height: f64,
    /// Default curve for lines without their own
    pub curve: Curve,
    pub x_axis: XAxis,
    pub y_axis: YAxis,
    pub dots: Dots,
    pub animation_duration: Duration,
}

impl Default for LineChartProps {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            height: 250.0,
            curve: Curve::Linear,
            x_axis: XAxis::default(),
            y_axis: YAxis::default(),
            dots: Dots::default(),
            animation_duration: Duration::from_millis(750),
        }
    }
}

impl LineChartProps {
    pub fn new(lines: Vec<Line>) -> Self {
        Self {
            lines,
            ..Default::default()
        }
    }

    pub fn height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    pub fn curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    pub fn x_axis(mut self, x_axis: XAxis) -> Self {
        self.x_axis = x_axis;
        self
    }

    pub fn y_axis(mut self, y_axis: YAxis) -> Self {
        self.y_axis = y_axis;
        self
    }

    pub fn dots(mut self, dots: Dots) -> Self {
        self.dots = dots;
        self
    }

    pub fn animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = duration;
        self
    }
}

/// An animated line chart.
///
/// Cloning is cheap and shares state. Resize rebuilds run on the tokio
/// runtime the chart was mounted from.
#[derive(Clone)]
pub struct LineChart {
    inner: State<ChartInner>,
    debouncer: Arc<Debouncer>,
    listener: State<Option<(Window, ListenerId)>>,
}

impl LineChart {
    /// `container` reports the element the chart is drawn into; its width is
    /// read whenever the scaffold is built.
    pub fn new(props: LineChartProps, container: Arc<dyn Measure>) -> Self {
        Self {
            inner: State::new(ChartInner::new(props, container)),
            debouncer: Arc::new(Debouncer::new(RESIZE_DEBOUNCE)),
            listener: State::new(None),
        }
    }

    /// Build the scaffold, draw with animation, and listen for resizes.
    pub fn mount(&self, window: &Window) {
        let mounted = self
            .inner
            .update(|inner| {
                if inner.phase != ChartPhase::Uninitialized {
                    log::warn!("Line chart mounted twice; ignoring");
                    return false;
                }
                inner.build_scaffold();
                inner.draw(true);
                inner.phase = ChartPhase::Updating;
                true
            });
        if !mounted {
            return;
        }

        let chart = self.clone();
        let id = window.add_listener(
            EventKind::Resize,
            Arc::new(move |_: &WindowEvent| chart.handle_resize()),
        );
        self.listener.set(Some((window.clone(), id)));
        log::debug!("Line chart mounted");
    }

    /// Replace the lines and redraw with animation.
    pub fn set_lines(&self, lines: Vec<Line>) {
        self.inner.update(|inner| {
            inner.props.lines = lines;
            match inner.phase {
                ChartPhase::Mounted | ChartPhase::Updating => {
                    inner.draw(true);
                    inner.phase = ChartPhase::Updating;
                    log::debug!("Line chart updating");
                }
                // The rebuild draws the new lines.
                ChartPhase::Resizing => {}
                ChartPhase::Uninitialized | ChartPhase::Unmounted => {}
            }
        });
    }

    /// Complete running animations.
    pub fn finish_animation(&self) {
        self.inner.update(|inner| {
            inner.scene.settle();
            if inner.phase == ChartPhase::Updating {
                inner.phase = ChartPhase::Mounted;
            }
        });
    }

    /// Fade out and (re)start the rebuild timer.
    pub fn handle_resize(&self) {
        let resizing = self
            .inner
            .update(|inner| match inner.phase {
                ChartPhase::Uninitialized | ChartPhase::Unmounted => false,
                _ => {
                    if !inner.fading {
                        log::debug!("Line chart resizing");
                    }
                    inner.fading = true;
                    inner.phase = ChartPhase::Resizing;
                    true
                }
            });
        if !resizing {
            return;
        }

        let inner = self.inner.clone();
        self.debouncer.call(move || rebuild(&inner));
    }

    /// Stop listening for resizes and drop a pending rebuild.
    pub fn unmount(&self) {
        if let Some((window, id)) = self.listener.update(Option::take) {
            window.remove_listener(id);
        }
        if self.debouncer.cancel() {
            log::debug!("Cancelled pending chart rebuild");
        }
        self.inner.update(|inner| {
            inner.teardown();
            inner.fading = false;
            inner.phase = ChartPhase::Unmounted;
        });
        log::debug!("Line chart unmounted");
    }

    pub fn phase(&self) -> ChartPhase {
        self.inner.read(|inner| inner.phase)
    }

    pub fn is_fading(&self) -> bool {
        self.inner.read(|inner| inner.fading)
    }

    /// How many resize rebuilds have run.
    pub fn rebuild_count(&self) -> usize {
        self.inner.read(|inner| inner.rebuild_count)
    }

    pub fn is_rebuild_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn x_domain(&self) -> Option<(f64, f64)> {
        self.inner.read(|inner| inner.x_scale.map(|x| x.domain()))
    }

    pub fn y_domain(&self) -> Option<(f64, f64)> {
        self.inner.read(|inner| inner.y_scale.map(|y| y.domain()))
    }

    pub fn x_ticks(&self) -> Vec<Tick> {
        self.inner.read(|inner| inner.x_ticks())
    }

    pub fn y_ticks(&self) -> Vec<Tick> {
        self.inner.read(|inner| inner.y_ticks())
    }

    /// Width the current scaffold was built for.
    pub fn width(&self) -> f64 {
        self.inner.read(|inner| inner.width)
    }

    /// Inspect the scene.
    pub fn with_scene<R>(&self, f: impl FnOnce(&Scene) -> R) -> R {
        self.inner.read(|inner| f(&inner.scene))
    }

    /// Path node of each line, in line order.
    pub fn line_paths(&self) -> Vec<webdom::NodeId> {
        self.inner.read(|inner| inner.line_paths.clone())
    }

    /// Dot nodes of one line.
    pub fn dots(&self, line: usize) -> Vec<webdom::NodeId> {
        self.inner
            .read(|inner| inner.dots.get(line).cloned().unwrap_or_default())
    }

    /// The chart container with the scene's current target state.
    pub fn render(&self, _cx: &RenderContext) -> Element {
        self.inner.read(|inner| {
            log::trace!("Rendering line chart");
            let mut root = Element::div()
                .class("line-chart")
                .class_if(inner.fading, "fading")
                .css("height", format!("{}px", inner.props.height))
                .css("stroke", StyleValue::var("line-chart-default-line-color"));
            if let Some(scaffold) = inner.scaffold
                && let Some(svg) = inner.scene.to_element(scaffold.svg)
            {
                root = root.child(svg);
            }
            root
        })
    }
}

/// Tear down, rebuild at the current width, and redraw without animation.
fn rebuild(state: &State<ChartInner>) {
    state.update(|inner| {
        if inner.phase != ChartPhase::Resizing {
            return;
        }
        inner.teardown();
        inner.build_scaffold();
        inner.draw(false);
        inner.fading = false;
        inner.phase = ChartPhase::Mounted;
        inner.rebuild_count += 1;
        log::debug!("Line chart rebuilt ({} so far)", inner.rebuild_count);
    });
}

impl std::fmt::Debug for LineChart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.inner.read(|inner| {
            f.debug_struct("LineChart")
                .field("phase", &inner.phase)
                .field("lines", &inner.props.lines.len())
                .field("fading", &inner.fading)
                .finish()
        })
    }
}
