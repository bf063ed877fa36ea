use dioxus::prelude::*;

use crate::types::PredictionOutcome;

#[component]
pub fn RawJsonView(outcome: PredictionOutcome) -> Element {
    let dump = outcome.to_debug_json();
    let class = if outcome.is_success() { "card raw-json" } else { "card raw-json raw-json-error" };

    rsx! {
        div { class,
            h3 { "Raw JSON Result" }
            pre { "{dump}" }
        }
    }
}
