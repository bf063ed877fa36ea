use dioxus::prelude::*;

use crate::chart::{line_vertices, polyline_path, y_ticks, ChartFrame, ChartSize, ValueScale};
use crate::components::charts::ChartAxes;
use crate::shaping::SeriesPoint;

/// Continuous line through the points in index order.
/// Hovering a vertex reveals its tooltip.
#[component]
pub fn LineChart(
    points: Vec<SeriesPoint>,
    size: ChartSize,
    scale: ValueScale,
    #[props(into)] stroke: String,
) -> Element {
    let frame = ChartFrame::new(size, &points);
    let ticks = y_ticks(&frame, scale);
    let vertices = line_vertices(&frame, &points, scale);
    let path = polyline_path(&vertices);
    let labels: Vec<String> = vertices.iter().map(|v| v.label.clone()).collect();
    let view_box = format!("0 0 {} {}", size.width, size.height);

    rsx! {
        svg {
            class: "chart line-chart",
            width: size.width,
            height: size.height,
            view_box,
            ChartAxes { frame, ticks, labels }
            polyline {
                points: path,
                fill: "none",
                stroke: stroke.clone(),
                stroke_width: "2",
            }
            for (i, vertex) in vertices.into_iter().enumerate() {
                g { key: "pt-{i}", class: "chart-hover",
                    circle {
                        cx: vertex.x,
                        cy: vertex.y,
                        r: "4",
                        fill: stroke.clone(),
                    }
                    text {
                        class: "chart-tooltip",
                        x: vertex.x,
                        y: vertex.y - 10.0,
                        text_anchor: "middle",
                        "{vertex.tooltip}"
                    }
                }
            }
        }
    }
}
