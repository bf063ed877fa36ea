use dioxus::prelude::*;

use crate::client::{PredictionClient, Transport};
use crate::state::{PendingRun, ShellState};
use crate::types::PredictionOutcome;

/// Handle on the shell's single state slot.
///
/// Child components never get this; they receive plain values as props and
/// report intents back through `EventHandler`s that end up here.
#[derive(Clone, Copy)]
pub struct ShellHandle {
    pub state: Signal<ShellState>,
}

pub fn use_shell_state() -> ShellHandle {
    let state = use_signal(ShellState::new);

    ShellHandle { state }
}

impl ShellHandle {
    pub fn set_load(&mut self, text: String) {
        self.state.write().set_load_text(text);
    }

    pub fn set_area(&mut self, text: String) {
        self.state.write().set_area_text(text);
    }

    /// Start a prediction and commit its outcome when the request settles.
    /// Ignored while another one is still running.
    pub fn run(&mut self, client: PredictionClient) {
        let pending = match self.state.write().begin_run() {
            Ok(pending) => pending,
            Err(e) => {
                tracing::warn!("run not started: {e}");
                return;
            }
        };

        let mut state = self.state;
        spawn(async move {
            complete_run(&client, pending, |seq, outcome| state.write().commit(seq, outcome)).await;
        });
    }
}

/// Send `pending` and hand the outcome to `commit` under the run's sequence number
pub async fn complete_run<T, F>(client: &PredictionClient<T>, pending: PendingRun, commit: F) -> bool
where
    T: Transport,
    F: FnOnce(u64, PredictionOutcome) -> bool,
{
    let outcome = client.predict(&pending.request).await;
    commit(pending.seq, outcome)
}
