//! Shell state machine: Idle -> Loading -> Finished(Success | Failure)

use crate::error::{PredictionError, RunRejected};
use crate::types::{PredictionOutcome, PredictionRequest, PredictionResult};

pub const DEFAULT_LOAD: &str = "-1000";
pub const DEFAULT_AREA: &str = "0.0001";

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle,
    Loading { seq: u64 },
    Finished(PredictionOutcome),
}

/// Which parts of the page are on screen.
///
/// The input form is always shown; the raw dump only once a run finished;
/// charts and the scalar summaries only after a success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visible {
    pub loading_indicator: bool,
    pub raw_json: bool,
    pub charts: bool,
}

/// A request the shell has committed to sending
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingRun {
    pub seq: u64,
    pub request: PredictionRequest,
}

/// Everything the top-level component owns: the two text fields and the
/// single outcome slot. Children only ever see copies of it.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellState {
    load_text: String,
    area_text: String,
    phase: Phase,
    latest_seq: u64,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            load_text: DEFAULT_LOAD.to_string(),
            area_text: DEFAULT_AREA.to_string(),
            phase: Phase::Idle,
            latest_seq: 0,
        }
    }
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_text(&self) -> &str {
        &self.load_text
    }

    pub fn area_text(&self) -> &str {
        &self.area_text
    }

    pub fn set_load_text(&mut self, text: impl Into<String>) {
        self.load_text = text.into();
    }

    pub fn set_area_text(&mut self, text: impl Into<String>) {
        self.area_text = text.into();
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    /// The run button is usable in every state except `Loading`
    pub fn trigger_enabled(&self) -> bool {
        !self.is_loading()
    }

    pub fn outcome(&self) -> Option<&PredictionOutcome> {
        match &self.phase {
            Phase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Only set once a run has finished successfully
    pub fn result(&self) -> Option<&PredictionResult> {
        self.outcome().and_then(PredictionOutcome::result)
    }

    pub fn visible(&self) -> Visible {
        Visible {
            loading_indicator: self.is_loading(),
            raw_json: self.outcome().is_some(),
            charts: self.result().is_some(),
        }
    }

    /// Start a run: clear the previous outcome, move to `Loading` and hand back
    /// the request to send.
    ///
    /// A second run while one is in flight is refused. Unparseable inputs
    /// finish immediately with an `InvalidInput` failure and nothing is sent.
    pub fn begin_run(&mut self) -> Result<PendingRun, RunRejected> {
        if self.is_loading() {
            return Err(RunRejected::InFlight);
        }

        let request = match self.parse_request() {
            Ok(request) => request,
            Err(err) => {
                self.phase = Phase::Finished(PredictionOutcome::Failure(err.clone()));
                return Err(RunRejected::InvalidInput(err));
            }
        };

        self.latest_seq += 1;
        let seq = self.latest_seq;
        self.phase = Phase::Loading { seq };
        tracing::info!(seq, load = request.load, area = request.area, "prediction started");
        Ok(PendingRun { seq, request })
    }

    /// Store the outcome of run `seq`. Returns `false` and leaves the state
    /// untouched when that run is no longer the one being waited on.
    pub fn commit(&mut self, seq: u64, outcome: PredictionOutcome) -> bool {
        let current = matches!(self.phase, Phase::Loading { seq: s } if s == seq);
        if !current || seq != self.latest_seq {
            tracing::debug!(seq, latest = self.latest_seq, "discarding stale prediction outcome");
            return false;
        }
        self.phase = Phase::Finished(outcome);
        true
    }

    fn parse_request(&self) -> Result<PredictionRequest, PredictionError> {
        let load = parse_field("load", &self.load_text)?;
        let area = parse_field("area", &self.area_text)?;
        Ok(PredictionRequest::new(load, area))
    }
}

fn parse_field(name: &str, text: &str) -> Result<f64, PredictionError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(PredictionError::InvalidInput(format!("{name} is empty")));
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            PredictionError::InvalidInput(format!("{name} must be a finite number, got \"{trimmed}\""))
        })
}
