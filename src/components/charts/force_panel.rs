use dioxus::prelude::*;

use crate::chart::{ChartSize, ValueScale};
use crate::components::charts::BarChart;
use crate::shaping::{to_series, ELEMENT_PREFIX};

#[component]
pub fn ForcePanel(#[props(!optional)] series: Option<Vec<f64>>) -> Element {
    let points = to_series(series.as_deref(), ELEMENT_PREFIX);

    rsx! {
        div { class: "chart-panel",
            h4 { "Element Forces" }
            if points.is_empty() {
                p { class: "chart-empty", "No force data" }
            } else {
                BarChart {
                    points,
                    size: ChartSize::COMPACT,
                    scale: ValueScale::Raw,
                    fill: "#8884d8",
                }
            }
        }
    }
}
