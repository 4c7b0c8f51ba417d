//! Line Chart Example
//!
//! Mounts a two-series chart over the last two weeks, swaps in new data,
//! then resizes the container a few times and waits for the debounced
//! rebuild.

use std::fs::File;
use std::sync::Arc;
use std::time::Duration;

use chrono::{Duration as Days, Utc};
use lintel::components::chart::RESIZE_DEBOUNCE;
use lintel::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

fn series(days: i64, f: impl Fn(i64) -> f64) -> Vec<Point> {
    let today = Utc::now();
    (0..days)
        .map(|i| Point::new(today - Days::days(days - 1 - i), f(i)))
        .collect()
}

#[tokio::main]
async fn main() {
    let log_file = File::create("line_chart.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let container = SharedRect::new(Rect::new(0.0, 0.0, 640.0, 300.0));
    let window = Window::new();
    let cx = RenderContext::default();

    let props = LineChartProps::new(vec![
        Line::new(series(14, |i| 800.0 + 120.0 * i as f64)).color("#3f7fdb"),
        Line::new(series(14, |i| 1500.0 - 40.0 * i as f64)).color("#e05757"),
    ])
    .height(300.0)
    .y_axis(YAxis { tick_count: 4 });
    let chart = LineChart::new(props, Arc::new(container.clone()));

    chart.mount(&window);
    chart.finish_animation();
    println!("{}\n", cx.to_html(&chart.render(&cx)));

    chart.set_lines(vec![
        Line::new(series(14, |i| 2400.0 - 90.0 * i as f64))
            .color("#3f7fdb")
            .curve(Curve::StepAfter),
    ]);
    chart.finish_animation();

    for width in [600.0, 520.0, 480.0] {
        container.set(Rect::new(0.0, 0.0, width, 300.0));
        window.dispatch(&WindowEvent::Resize {
            width,
            height: 800.0,
        });
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    println!("fading: {}", chart.is_fading());

    tokio::time::sleep(RESIZE_DEBOUNCE).await;
    println!(
        "rebuilt {} time(s) at width {}",
        chart.rebuild_count(),
        chart.width()
    );
    println!("{}", cx.to_html(&chart.render(&cx)));

    chart.unmount();
}
