use dioxus::prelude::*;

use crate::client::PredictionClient;
use crate::components::layout::{BackendStatus, InputForm, RawJsonView, ResultsView};
use crate::config::ClientConfig;
use crate::hooks::use_shell_state;

/// Top-level page. Holds the only mutable state in the app: the input text
/// and the outcome of the latest run.
#[component]
pub fn AppShell() -> Element {
    let client = use_hook(|| PredictionClient::new(&ClientConfig::from_env()));
    let mut shell = use_shell_state();

    // Checked once on mount; never blocks a prediction
    let health = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.health().await }
        }
    });

    let state = shell.state.read().clone();
    let visible = state.visible();
    let run_client = client.clone();

    rsx! {
        div { class: "container",
            h1 { "Truss AI Demo" }

            InputForm {
                load: state.load_text().to_string(),
                area: state.area_text().to_string(),
                loading: state.is_loading(),
                on_load_change: move |text| shell.set_load(text),
                on_area_change: move |text| shell.set_area(text),
                on_run: move |_| shell.run(run_client.clone()),
            }

            if visible.loading_indicator {
                p { class: "loading", "Running prediction..." }
            }

            if let Some(outcome) = state.outcome().filter(|_| visible.raw_json) {
                RawJsonView { outcome: outcome.clone() }
            }

            if let Some(result) = state.result().filter(|_| visible.charts) {
                ResultsView { result: result.clone() }
            }

            BackendStatus {
                base_url: client.base_url().to_string(),
                health: health.cloned(),
            }
        }
    }
}
