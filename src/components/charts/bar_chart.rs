use dioxus::prelude::*;

use crate::chart::{bar_shapes, y_ticks, ChartFrame, ChartSize, ValueScale};
use crate::components::charts::ChartAxes;
use crate::shaping::SeriesPoint;

/// One bar per point, growing from zero. `show_values` prints the scaled
/// value above each bar.
#[component]
pub fn BarChart(
    points: Vec<SeriesPoint>,
    size: ChartSize,
    scale: ValueScale,
    #[props(into)] fill: String,
    #[props(default)] show_values: bool,
) -> Element {
    let frame = ChartFrame::new(size, &points);
    let ticks = y_ticks(&frame, scale);
    let bars = bar_shapes(&frame, &points, scale);
    let labels: Vec<String> = bars.iter().map(|b| b.label.clone()).collect();
    let view_box = format!("0 0 {} {}", size.width, size.height);

    rsx! {
        svg {
            class: "chart bar-chart",
            width: size.width,
            height: size.height,
            view_box,
            ChartAxes { frame, ticks, labels }
            for (i, bar) in bars.into_iter().enumerate() {
                g { key: "bar-{i}", class: "chart-hover",
                    rect {
                        x: bar.x,
                        y: bar.y,
                        width: bar.width,
                        height: bar.height,
                        fill: fill.clone(),
                    }
                    if show_values {
                        text {
                            class: "chart-bar-label",
                            x: bar.center_x,
                            y: bar.y - 4.0,
                            text_anchor: "middle",
                            "{bar.value_label}"
                        }
                    }
                    text {
                        class: "chart-tooltip",
                        x: bar.center_x,
                        y: bar.y - 18.0,
                        text_anchor: "middle",
                        "{bar.tooltip}"
                    }
                }
            }
        }
    }
}
