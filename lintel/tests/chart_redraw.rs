use chrono::{TimeZone, Utc};
use lintel::RenderContext;
use lintel::components::chart::{
    ChartPhase, Dots, Line, LineChart, LineChartProps, Point, ScaleKind, XAxis,
};
use std::sync::Arc;
use std::time::Duration;
use webdom::element::find_by_tag;
use webdom::{EventKind, NodeId, Rect, Window};

const DURATION: Duration = Duration::from_millis(750);

fn line(points: &[(f64, f64)]) -> Line {
    Line::new(points.iter().map(|&(x, y)| Point::new(x, y)).collect())
}

fn linear_chart(lines: Vec<Line>) -> LineChart {
    let props = LineChartProps::new(lines)
        .height(250.0)
        .x_axis(XAxis::default().scale(ScaleKind::Linear));
    LineChart::new(props, Arc::new(Rect::new(0.0, 0.0, 500.0, 250.0)))
}

fn text_at(chart: &LineChart, node: NodeId, name: &str, elapsed: Duration) -> String {
    chart.with_scene(|scene| {
        scene
            .value_at(node, name, elapsed)
            .and_then(|v| v.as_text().map(str::to_string))
            .unwrap_or_default()
    })
}

fn number_at(chart: &LineChart, node: NodeId, name: &str, elapsed: Duration) -> f64 {
    chart.with_scene(|scene| {
        scene
            .value_at(node, name, elapsed)
            .and_then(|v| v.as_number())
            .unwrap_or(f64::NAN)
    })
}

#[test]
fn test_domains_from_data() {
    let chart = linear_chart(vec![line(&[(0.0, 10.0), (10.0, 20.0)])]);
    chart.mount(&Window::new());

    assert_eq!(chart.x_domain(), Some((0.0, 10.0)));
    let (y0, y1) = chart.y_domain().unwrap();
    assert_eq!(y0, 0.0);
    assert!((y1 - 22.0).abs() < 1e-9);
}

#[test]
fn test_time_domain_truncates_to_days() {
    let first = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
    let last = Utc.with_ymd_and_hms(2024, 1, 3, 15, 0, 0).unwrap();
    let chart = LineChart::new(
        LineChartProps::new(vec![Line::new(vec![Point::new(first, 1.0), Point::new(last, 2.0)])]),
        Arc::new(Rect::new(0.0, 0.0, 500.0, 250.0)),
    );
    chart.mount(&Window::new());

    let day1 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let day3 = Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap();
    assert_eq!(
        chart.x_domain(),
        Some((day1.timestamp_millis() as f64, day3.timestamp_millis() as f64))
    );
    let labels: Vec<String> = chart.x_ticks().into_iter().map(|t| t.label).collect();
    assert_eq!(labels.first().map(String::as_str), Some("Jan 01"));
}

#[test]
fn test_axes_ticks() {
    let chart = linear_chart(vec![line(&[(0.0, 10.0), (10.0, 20.0)])]);
    chart.mount(&Window::new());

    let y: Vec<String> = chart.y_ticks().into_iter().map(|t| t.label).collect();
    assert_eq!(y, vec!["0", "5", "10", "15", "20"]);

    let x = chart.x_ticks();
    assert_eq!(x.len(), 6);
    assert_eq!(x[0].position, 5.0);
    assert_eq!(x[5].position, 435.0);
    assert_eq!(x[1].label, "2");
}

#[test]
fn test_enter_animates_from_baseline() {
    let chart = linear_chart(vec![line(&[(0.0, 10.0), (10.0, 20.0)]).color("#e05757")]);
    chart.mount(&Window::new());
    assert_eq!(chart.phase(), ChartPhase::Updating);

    let paths = chart.line_paths();
    assert_eq!(paths.len(), 1);
    assert_eq!(text_at(&chart, paths[0], "d", Duration::ZERO), "M5,220L435,220");
    assert_eq!(text_at(&chart, paths[0], "d", DURATION), "M5,120L435,20");
    assert_eq!(text_at(&chart, paths[0], "style", Duration::ZERO), "stroke: #e05757");

    let dots = chart.dots(0);
    assert_eq!(dots.len(), 2);
    assert_eq!(number_at(&chart, dots[0], "cy", Duration::ZERO), 220.0);
    assert_eq!(number_at(&chart, dots[0], "cy", DURATION), 120.0);
    assert_eq!(number_at(&chart, dots[1], "cy", DURATION), 20.0);
    let halfway = number_at(&chart, dots[1], "cy", DURATION / 2);
    assert!(halfway < 220.0 && halfway > 20.0);

    chart.finish_animation();
    assert_eq!(chart.phase(), ChartPhase::Mounted);
    assert!(!chart.with_scene(|scene| scene.has_transitions()));
}

#[test]
fn test_update_transitions_existing_elements() {
    let chart = linear_chart(vec![line(&[(0.0, 10.0), (10.0, 20.0)])]);
    chart.mount(&Window::new());
    chart.finish_animation();
    let path = chart.line_paths()[0];
    let dot = chart.dots(0)[1];

    // Max y doubles, so the old top point drops to the middle.
    chart.set_lines(vec![line(&[(0.0, 10.0), (10.0, 40.0)])]);
    assert_eq!(chart.phase(), ChartPhase::Updating);
    assert_eq!(chart.line_paths(), vec![path]);
    assert_eq!(chart.dots(0)[1], dot);

    assert_eq!(number_at(&chart, dot, "cy", Duration::ZERO), 20.0);
    assert_eq!(number_at(&chart, dot, "cy", DURATION), 20.0);
    let first = chart.dots(0)[0];
    assert_eq!(number_at(&chart, first, "cy", Duration::ZERO), 120.0);
    assert_eq!(number_at(&chart, first, "cy", DURATION), 170.0);
}

#[test]
fn test_exit_removes_line_immediately() {
    let chart = linear_chart(vec![
        line(&[(0.0, 1.0), (10.0, 2.0)]),
        line(&[(0.0, 3.0), (10.0, 4.0)]),
    ]);
    chart.mount(&Window::new());
    let paths = chart.line_paths();
    let removed_dots = chart.dots(1);
    assert_eq!(paths.len(), 2);

    chart.set_lines(vec![line(&[(0.0, 1.0), (10.0, 2.0)])]);
    assert_eq!(chart.line_paths(), vec![paths[0]]);
    chart.with_scene(|scene| {
        assert!(!scene.contains(paths[1]));
        assert!(removed_dots.iter().all(|d| !scene.contains(*d)));
        assert_eq!(scene.find_by_class("line-dots").len(), 1);
    });
    assert!(chart.dots(1).is_empty());
}

#[test]
fn test_entering_line_during_update() {
    let chart = linear_chart(vec![line(&[(0.0, 10.0), (10.0, 20.0)])]);
    chart.mount(&Window::new());
    chart.finish_animation();

    chart.set_lines(vec![
        line(&[(0.0, 10.0), (10.0, 20.0)]),
        line(&[(0.0, 20.0), (10.0, 10.0)]),
    ]);
    let paths = chart.line_paths();
    assert_eq!(paths.len(), 2);
    assert_eq!(text_at(&chart, paths[1], "d", Duration::ZERO), "M5,220L435,220");
    assert_eq!(text_at(&chart, paths[1], "d", DURATION), "M5,20L435,120");
}

#[test]
fn test_hidden_dots() {
    let props = LineChartProps::new(vec![line(&[(0.0, 1.0), (1.0, 2.0)])])
        .x_axis(XAxis::default().scale(ScaleKind::Linear))
        .dots(Dots { radius: 4.0, show: false });
    let chart = LineChart::new(props, Arc::new(Rect::new(0.0, 0.0, 300.0, 250.0)));
    chart.mount(&Window::new());
    assert!(chart.dots(0).is_empty());
    assert!(chart.with_scene(|scene| scene.find_by_class("line-path-dot").is_empty()));
}

#[test]
fn test_set_lines_before_mount_only_stores() {
    let chart = linear_chart(Vec::new());
    chart.set_lines(vec![line(&[(0.0, 1.0)])]);
    assert_eq!(chart.phase(), ChartPhase::Uninitialized);
    assert!(chart.line_paths().is_empty());

    chart.mount(&Window::new());
    assert_eq!(chart.line_paths().len(), 1);
}

#[test]
fn test_empty_linear_chart() {
    let chart = linear_chart(Vec::new());
    chart.mount(&Window::new());
    assert_eq!(chart.x_domain(), Some((0.0, 0.0)));
    assert_eq!(chart.y_domain(), Some((0.0, 0.0)));
    assert!(chart.line_paths().is_empty());
}

#[test]
fn test_render_emits_svg() {
    let chart = linear_chart(vec![line(&[(0.0, 10.0), (10.0, 20.0)])]);
    chart.mount(&Window::new());

    let root = chart.render(&RenderContext::default());
    assert!(root.has_class("line-chart"));
    let svgs = find_by_tag(&root, "svg");
    assert_eq!(svgs.len(), 1);
    let paths = find_by_tag(&root, "path");
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].get_attr("d"), Some("M5,120L435,20"));
    assert_eq!(find_by_tag(&root, "circle").len(), 2);
}

#[test]
fn test_mount_twice_is_ignored() {
    let window = Window::new();
    let chart = linear_chart(vec![line(&[(0.0, 1.0)])]);
    chart.mount(&window);
    chart.mount(&window);
    assert_eq!(window.listener_count(EventKind::Resize), 1);
    assert_eq!(chart.line_paths().len(), 1);
}
