use dioxus::prelude::*;

/// Load/area inputs and the run button. Owns nothing; every edit and the
/// run request go back up through the handlers.
#[component]
pub fn InputForm(
    load: String,
    area: String,
    loading: bool,
    on_load_change: EventHandler<String>,
    on_area_change: EventHandler<String>,
    on_run: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "card input-form",
            label { "Load (N, negative = downward)" }
            input {
                r#type: "number",
                value: "{load}",
                oninput: move |evt| on_load_change.call(evt.value()),
            }

            label { "Area (m²)" }
            input {
                r#type: "number",
                step: "1e-7",
                value: "{area}",
                oninput: move |evt| on_area_change.call(evt.value()),
            }

            button {
                class: "btn-run",
                disabled: loading,
                onclick: move |_| on_run.call(()),
                if loading {
                    "Running..."
                } else {
                    "Predict / Run FEA"
                }
            }
        }
    }
}
