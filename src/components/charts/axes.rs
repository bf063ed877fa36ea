use dioxus::prelude::*;

use crate::chart::{ChartFrame, Tick};

const LABEL_OFFSET: f64 = 16.0;

/// Grid, y ticks and category labels shared by the line and bar charts
#[component]
pub fn ChartAxes(frame: ChartFrame, ticks: Vec<Tick>, labels: Vec<String>) -> Element {
    let left = frame.size.left;
    let right = frame.plot_right();
    let top = frame.size.top;
    let bottom = frame.x_axis_y();
    let tick_x = left - 6.0;
    let label_y = bottom + LABEL_OFFSET;
    let angle = frame.size.label_angle;
    let anchor = if angle < 0.0 { "end" } else { "middle" };

    let categories: Vec<(f64, String, String)> = labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            let x = frame.x(i);
            (x, format!("rotate({angle} {x} {label_y})"), label)
        })
        .collect();

    rsx! {
        g { class: "chart-grid",
            for (i, tick) in ticks.into_iter().enumerate() {
                line {
                    key: "grid-{i}",
                    x1: left,
                    x2: right,
                    y1: tick.y,
                    y2: tick.y,
                    stroke: "#ccc",
                    stroke_dasharray: "3 3",
                }
                text {
                    key: "tick-{i}",
                    class: "chart-tick",
                    x: tick_x,
                    y: tick.y,
                    text_anchor: "end",
                    dominant_baseline: "middle",
                    "{tick.label}"
                }
            }
        }
        line { x1: left, x2: left, y1: top, y2: bottom, stroke: "#666" }
        line { x1: left, x2: right, y1: bottom, y2: bottom, stroke: "#666" }
        g { class: "chart-categories",
            for (i, (x, transform, label)) in categories.into_iter().enumerate() {
                text {
                    key: "cat-{i}",
                    class: "chart-category",
                    x,
                    y: label_y,
                    text_anchor: anchor,
                    transform,
                    "{label}"
                }
            }
        }
    }
}
