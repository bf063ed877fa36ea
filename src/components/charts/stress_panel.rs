use dioxus::prelude::*;

use crate::chart::{ChartSize, ValueScale};
use crate::components::charts::BarChart;
use crate::shaping::{to_series, ELEMENT_PREFIX};

/// Element stresses. Bars, ticks and tooltips read in MPa while the series
/// keeps its Pa values; the max stress line is printed as received.
#[component]
pub fn StressPanel(
    #[props(!optional)] series: Option<Vec<f64>>,
    #[props(!optional)] max_stress: Option<f64>,
) -> Element {
    let points = to_series(series.as_deref(), ELEMENT_PREFIX);
    let max_stress = max_stress_annotation(max_stress);

    rsx! {
        div { class: "chart-panel",
            h4 { "Element Stresses" }
            if points.is_empty() {
                p { class: "chart-empty", "No stress data" }
            } else {
                BarChart {
                    points,
                    size: ChartSize::WIDE,
                    scale: ValueScale::Megapascal,
                    fill: "#ff7300",
                    show_values: true,
                }
            }
            if let Some(text) = max_stress {
                p { strong { "{text}" } }
            }
        }
    }
}

/// Only shown for a present, non-zero value
pub fn max_stress_annotation(max_stress: Option<f64>) -> Option<String> {
    max_stress
        .filter(|v| *v != 0.0 && !v.is_nan())
        .map(|v| format!("Max Stress: {v}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_stress_is_untransformed() {
        assert_eq!(
            max_stress_annotation(Some(2_000_000.0)).as_deref(),
            Some("Max Stress: 2000000")
        );
        assert_eq!(
            max_stress_annotation(Some(-1.5e6)).as_deref(),
            Some("Max Stress: -1500000")
        );
    }

    #[test]
    fn zero_or_missing_max_stress_is_hidden() {
        assert_eq!(max_stress_annotation(None), None);
        assert_eq!(max_stress_annotation(Some(0.0)), None);
    }
}
