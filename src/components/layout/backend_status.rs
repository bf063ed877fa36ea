use dioxus::prelude::*;

use crate::error::ClientResult;
use crate::types::HealthResponse;

/// Footer with the configured backend and the result of the health check
#[component]
pub fn BackendStatus(
    base_url: String,
    #[props(!optional)] health: Option<ClientResult<HealthResponse>>,
) -> Element {
    let (class, status) = health_summary(&base_url, health.as_ref());

    rsx! {
        footer {
            p { class: "backend-status {class}", "{status}" }
            p {
                "Backend must run on "
                code { "{base_url}" }
            }
        }
    }
}

/// CSS modifier and text for the health line
pub fn health_summary(base_url: &str, health: Option<&ClientResult<HealthResponse>>) -> (&'static str, String) {
    match health {
        None => ("pending", format!("Checking backend at {base_url}...")),
        Some(Ok(HealthResponse { ok: true, model_exists: true })) => {
            ("online", "Backend reachable, model loaded".to_string())
        }
        Some(Ok(HealthResponse { ok: true, model_exists: false })) => {
            ("online", "Backend reachable, no trained model (FEA fallback)".to_string())
        }
        Some(Ok(HealthResponse { ok: false, .. })) => {
            ("degraded", "Backend answered but reports not ok".to_string())
        }
        Some(Err(e)) => ("offline", format!("Backend unreachable at {base_url}: {e}")),
    }
}
