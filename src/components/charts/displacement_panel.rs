use dioxus::prelude::*;

use crate::chart::{ChartSize, ValueScale};
use crate::components::charts::LineChart;
use crate::shaping::{to_series, NODE_PREFIX};

/// Nodal displacements as a line, node 1 first
#[component]
pub fn DisplacementPanel(#[props(!optional)] series: Option<Vec<f64>>) -> Element {
    let points = to_series(series.as_deref(), NODE_PREFIX);

    rsx! {
        div { class: "chart-panel",
            h4 { "Displacements" }
            if points.is_empty() {
                p { class: "chart-empty", "No displacement data" }
            } else {
                LineChart {
                    points,
                    size: ChartSize::WIDE,
                    scale: ValueScale::Raw,
                    stroke: "#82ca9d",
                }
            }
        }
    }
}
