//! Scaffold construction and redraw for the line chart.

use std::sync::Arc;

use chrono::Utc;
use webdom::{AttrValue, Easing, Measure, NodeId, Scene, TransitionConfig};

use super::axis::{ScaleKind, Tick, shorten_value};
use super::line::XValue;
use super::scale::{LinearScale, TimeScale, start_of_day};
use super::{ChartPhase, LineChartProps};

/// Horizontal space reserved for the axes, and the height of the x axis.
pub const MARGIN: f64 = 30.0;
/// Gap between the plot edges and the first/last x position.
pub const CHART_PADDING: f64 = 5.0;
/// Distance between y tick labels and the axis.
const TICK_PADDING: f64 = 7.0;
/// Length of x tick marks.
const TICK_SIZE: f64 = 6.0;

/// The x scale in use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum XScale {
    Time(TimeScale),
    Linear(LinearScale),
}

impl XScale {
    pub fn map(&self, value: &XValue) -> f64 {
        match self {
            XScale::Time(scale) => scale.map_millis(value.as_f64()),
            XScale::Linear(scale) => scale.map(value.as_f64()),
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        match self {
            XScale::Time(scale) => scale.linear().domain(),
            XScale::Linear(scale) => scale.domain(),
        }
    }

    fn set_domain(&mut self, domain: (f64, f64)) {
        match self {
            XScale::Time(scale) => scale.linear_mut().set_domain(domain),
            XScale::Linear(scale) => scale.set_domain(domain),
        }
    }

    fn ticks(&self, count: usize) -> Vec<XValue> {
        match self {
            XScale::Time(scale) => scale.ticks(count).into_iter().map(XValue::Time).collect(),
            XScale::Linear(scale) => scale.ticks(count).into_iter().map(XValue::Linear).collect(),
        }
    }
}

/// Group nodes created once per scaffold.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Scaffold {
    pub svg: NodeId,
    pub paths: NodeId,
    pub x_axis: NodeId,
    pub y_axis: NodeId,
}

pub(crate) struct ChartInner {
    pub props: LineChartProps,
    pub container: Arc<dyn Measure>,
    pub scene: Scene,
    pub phase: ChartPhase,
    pub fading: bool,
    pub scaffold: Option<Scaffold>,
    pub x_scale: Option<XScale>,
    pub y_scale: Option<LinearScale>,
    /// Width of the container when the scaffold was built
    pub width: f64,
    /// One path per line, in line order
    pub line_paths: Vec<NodeId>,
    /// One dot group per line, in line order
    pub dot_groups: Vec<NodeId>,
    pub dots: Vec<Vec<NodeId>>,
    pub rebuild_count: usize,
}

impl ChartInner {
    pub fn new(props: LineChartProps, container: Arc<dyn Measure>) -> Self {
        Self {
            props,
            container,
            scene: Scene::new(),
            phase: ChartPhase::Uninitialized,
            fading: false,
            scaffold: None,
            x_scale: None,
            y_scale: None,
            width: 0.0,
            line_paths: Vec::new(),
            dot_groups: Vec::new(),
            dots: Vec::new(),
            rebuild_count: 0,
        }
    }

    pub fn inner_height(&self) -> f64 {
        self.props.height - MARGIN
    }

    /// x domain over every point, day-truncated for times; y domain from 0 to
    /// 1.1 × the largest value.
    pub fn domains(&self) -> ((f64, f64), (f64, f64)) {
        let xs = self.props.lines.iter().flat_map(|l| l.points.iter()).map(|p| {
            match (self.props.x_axis.scale, p.x) {
                (ScaleKind::Time, XValue::Time(t)) => start_of_day(t.timestamp_millis()) as f64,
                (_, x) => x.as_f64(),
            }
        });

        let x = xs
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
            .unwrap_or_else(|| match self.props.x_axis.scale {
                ScaleKind::Time => {
                    let now = Utc::now().timestamp_millis() as f64;
                    (now, now)
                }
                ScaleKind::Linear => (0.0, 0.0),
            });

        let max = self
            .props
            .lines
            .iter()
            .filter_map(|l| l.max_y())
            .fold(0.0, f64::max);
        (x, (0.0, max * 1.1))
    }

    /// Create the svg, groups, scales, and axes for the current container
    /// width.
    pub fn build_scaffold(&mut self) {
        self.width = self.container.bounds().width;
        let plot_width = self.width - MARGIN * 2.0;
        let height = self.inner_height();
        let (x_domain, y_domain) = self.domains();

        let svg = self.scene.append(None, "svg");
        self.scene.set(svg, "height", self.props.height);
        self.scene.set(svg, "width", "100%");

        let main = self.scene.append(Some(svg), "g");
        self.scene.set(main, "transform", "translate(0, 0)");

        let paths = self.scene.append(Some(main), "g");
        self.scene.add_class(paths, "paths");
        self.scene.set(paths, "transform", format!("translate({}, 0)", MARGIN));

        let x_range = (CHART_PADDING, plot_width - CHART_PADDING);
        self.x_scale = Some(match self.props.x_axis.scale {
            ScaleKind::Time => XScale::Time(TimeScale::from_millis(x_domain, x_range).rounded()),
            ScaleKind::Linear => XScale::Linear(LinearScale::new(x_domain, x_range).rounded()),
        });
        self.y_scale = Some(LinearScale::new(y_domain, (height, 0.0)).rounded());

        let x_axis = self.scene.append(Some(main), "g");
        self.scene.add_class(x_axis, "axis-group");
        self.scene.add_class(x_axis, "x-axis");
        self.scene
            .set(x_axis, "transform", format!("translate({}, {})", MARGIN, height));

        let y_axis = self.scene.append(Some(main), "g");
        self.scene.add_class(y_axis, "axis-group");
        self.scene.add_class(y_axis, "y-axis");
        self.scene.set(y_axis, "transform", format!("translate({}, 0)", MARGIN));

        self.scaffold = Some(Scaffold {
            svg,
            paths,
            x_axis,
            y_axis,
        });
        self.draw_axes();
        log::debug!("Built chart scaffold at width {}", self.width);
    }

    /// Drop every scene node.
    pub fn teardown(&mut self) {
        self.scene.clear();
        self.scaffold = None;
        self.line_paths.clear();
        self.dot_groups.clear();
        self.dots.clear();
    }

    /// Recompute scales from the data and bring paths and dots up to date.
    ///
    /// With `animate`, entering elements start at the baseline and every
    /// element transitions to its new position; exiting elements are removed
    /// immediately either way.
    pub fn draw(&mut self, animate: bool) {
        let Some(scaffold) = self.scaffold else {
            return;
        };
        let (x_domain, y_domain) = self.domains();
        if let Some(x) = &mut self.x_scale {
            x.set_domain(x_domain);
        }
        if let Some(y) = &mut self.y_scale {
            y.set_domain(y_domain);
        }
        self.draw_axes();

        let transition = TransitionConfig::new(self.props.animation_duration, Easing::CubicInOut);
        self.draw_paths(scaffold.paths, animate.then_some(transition));
        if self.props.dots.show {
            self.draw_dots(scaffold.paths, animate.then_some(transition));
        } else {
            for group in self.dot_groups.drain(..) {
                self.scene.remove(group);
            }
            self.dots.clear();
        }
    }

    /// Pixel positions of a line's points; all at `baseline` when given.
    fn pixel_points(&self, index: usize, baseline: Option<f64>) -> Vec<(f64, f64)> {
        let (Some(x), Some(y)) = (&self.x_scale, &self.y_scale) else {
            return Vec::new();
        };
        self.props.lines[index]
            .points
            .iter()
            .map(|p| (x.map(&p.x), baseline.unwrap_or_else(|| y.map(p.y))))
            .collect()
    }

    fn path_data(&self, index: usize, baseline: Option<f64>) -> String {
        let curve = self.props.lines[index].curve.unwrap_or(self.props.curve);
        curve.path(&self.pixel_points(index, baseline))
    }

    fn draw_paths(&mut self, group: NodeId, transition: Option<TransitionConfig>) {
        let line_count = self.props.lines.len();

        // Exit
        for path in self.line_paths.drain(line_count.min(self.line_paths.len())..) {
            self.scene.remove(path);
        }

        // Update
        for index in 0..self.line_paths.len() {
            let path = self.line_paths[index];
            let d = self.path_data(index, None);
            match transition {
                Some(config) => {
                    self.scene
                        .transition(path, vec![("d", AttrValue::from(d))], config)
                }
                None => self.scene.set(path, "d", d),
            }
        }

        // Enter
        let baseline = self.inner_height();
        for index in self.line_paths.len()..line_count {
            let path = self.scene.append(Some(group), "path");
            self.scene.add_class(path, "line-path");
            if let Some(color) = &self.props.lines[index].color {
                self.scene.set(path, "style", format!("stroke: {}", color));
            }
            let d = self.path_data(index, None);
            match transition {
                Some(config) => {
                    let start = self.path_data(index, Some(baseline));
                    self.scene.set(path, "d", start);
                    self.scene.transition(path, vec![("d", AttrValue::from(d))], config);
                }
                None => self.scene.set(path, "d", d),
            }
            self.line_paths.push(path);
        }
    }

    fn draw_dots(&mut self, group: NodeId, transition: Option<TransitionConfig>) {
        let line_count = self.props.lines.len();
        let baseline = self.inner_height();

        for dot_group in self.dot_groups.drain(line_count.min(self.dot_groups.len())..) {
            self.scene.remove(dot_group);
        }
        self.dots.truncate(line_count);
        while self.dot_groups.len() < line_count {
            let dot_group = self.scene.append(Some(group), "g");
            self.scene.add_class(dot_group, "line-dots");
            self.dot_groups.push(dot_group);
            self.dots.push(Vec::new());
        }

        for index in 0..line_count {
            let points = self.pixel_points(index, None);
            let dots = &mut self.dots[index];

            for dot in dots.drain(points.len().min(dots.len())..) {
                self.scene.remove(dot);
            }

            for (dot, &(cx, cy)) in dots.iter().zip(&points) {
                match transition {
                    Some(config) => self.scene.transition(
                        *dot,
                        vec![("cx", cx.into()), ("cy", cy.into())],
                        config,
                    ),
                    None => {
                        self.scene.set(*dot, "cx", cx);
                        self.scene.set(*dot, "cy", cy);
                    }
                }
            }

            for &(cx, cy) in &points[dots.len()..] {
                let dot = self.scene.append(Some(self.dot_groups[index]), "circle");
                self.scene.add_class(dot, "line-path-dot");
                self.scene.set(dot, "r", self.props.dots.radius);
                self.scene.set(dot, "cx", cx);
                match transition {
                    Some(config) => {
                        self.scene.set(dot, "cy", baseline);
                        self.scene.transition(dot, vec![("cy", cy.into())], config);
                    }
                    None => self.scene.set(dot, "cy", cy),
                }
                dots.push(dot);
            }
        }
    }

    /// Current x ticks at pixel positions.
    pub fn x_ticks(&self) -> Vec<Tick> {
        let Some(x) = &self.x_scale else {
            return Vec::new();
        };
        x.ticks(self.props.x_axis.tick_count)
            .iter()
            .enumerate()
            .map(|(i, value)| Tick {
                position: x.map(value),
                label: self.props.x_axis.label(value, i),
            })
            .collect()
    }

    /// Current y ticks at pixel positions.
    pub fn y_ticks(&self) -> Vec<Tick> {
        let Some(y) = &self.y_scale else {
            return Vec::new();
        };
        y.ticks(self.props.y_axis.tick_count)
            .into_iter()
            .map(|value| Tick {
                position: y.map(value),
                label: shorten_value(value),
            })
            .collect()
    }

    fn draw_axes(&mut self) {
        let Some(scaffold) = self.scaffold else {
            return;
        };
        let grid_width = self.width - 2.0 * MARGIN;

        self.scene.clear_children(scaffold.x_axis);
        for tick in self.x_ticks() {
            let g = self.scene.append(Some(scaffold.x_axis), "g");
            self.scene.add_class(g, "tick");
            self.scene
                .set(g, "transform", format!("translate({}, 0)", tick.position));
            let line = self.scene.append(Some(g), "line");
            self.scene.set(line, "y2", TICK_SIZE);
            let text = self.scene.append(Some(g), "text");
            self.scene.set(text, "y", TICK_SIZE + 3.0);
            self.scene.set_text(text, tick.label);
        }

        self.scene.clear_children(scaffold.y_axis);
        for tick in self.y_ticks() {
            let g = self.scene.append(Some(scaffold.y_axis), "g");
            self.scene.add_class(g, "tick");
            self.scene
                .set(g, "transform", format!("translate(0, {})", tick.position));
            let line = self.scene.append(Some(g), "line");
            self.scene.set(line, "x2", grid_width);
            let text = self.scene.append(Some(g), "text");
            self.scene.set(text, "x", -TICK_PADDING);
            self.scene.set_text(text, tick.label);
        }
    }
}
