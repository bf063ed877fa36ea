use dioxus::prelude::*;

use crate::components::charts::{DisplacementPanel, ForcePanel, StressPanel};
use crate::types::PredictionResult;

/// The three charts plus the scalar summaries of a successful run
#[component]
pub fn ResultsView(result: PredictionResult) -> Element {
    let source = result.source.as_deref().map(source_label);
    let max_disp = max_displacement_line(&result);

    rsx! {
        div { class: "charts",
            if let Some(source) = source {
                p { class: "result-source", "Source: {source}" }
            }
            DisplacementPanel { series: Some(result.displacements.clone()) }
            ForcePanel { series: Some(result.element_forces.clone()) }
            StressPanel {
                series: Some(result.element_stresses.clone()),
                max_stress: result.max_stress,
            }
            if let Some(text) = max_disp {
                p { strong { "{text}" } }
            }
        }
    }
}

pub fn max_displacement_line(result: &PredictionResult) -> Option<String> {
    result.max_displacement.map(|v| format!("Max Displacement: {v}"))
}

pub fn source_label(source: &str) -> &str {
    match source {
        "fea" => "finite element analysis",
        "ml_model" => "trained model",
        other => other,
    }
}
